//! Potion domain model.
//!
//! # Responsibility
//! - Define the immutable brewed record and its lenient foreign-data view.
//!
//! # Invariants
//! - `tasks` holds value copies of the tasks completed at brew time.
//! - `task_categories` is duplicate-free, in first-occurrence order over `tasks`.
//! - `task_count == tasks.len()`.

use crate::model::category::Category;
use crate::model::mood::MoodSelection;
use crate::model::task::Task;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for potions.
pub type PotionId = Uuid;

/// Immutable record produced by one brew.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Potion {
    pub id: PotionId,
    /// Brew time in Unix epoch milliseconds.
    pub created_at: i64,
    pub mood: MoodSelection,
    pub tasks: Vec<Task>,
    pub diary_note: String,
    pub task_categories: Vec<Category>,
    pub task_count: usize,
}

/// Consistency violations in a persisted potion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PotionValidationError {
    NilId,
    CountMismatch { task_count: usize, tasks: usize },
    CategoriesMismatch,
}

impl Display for PotionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "potion id must not be nil"),
            Self::CountMismatch { task_count, tasks } => write!(
                f,
                "potion taskCount ({task_count}) does not match tasks length ({tasks})"
            ),
            Self::CategoriesMismatch => write!(
                f,
                "potion taskCategories is not the distinct category list of its tasks"
            ),
        }
    }
}

impl Error for PotionValidationError {}

impl Potion {
    /// Checks the structural invariants of a stored potion.
    pub fn validate(&self) -> Result<(), PotionValidationError> {
        if self.id.is_nil() {
            return Err(PotionValidationError::NilId);
        }
        if self.task_count != self.tasks.len() {
            return Err(PotionValidationError::CountMismatch {
                task_count: self.task_count,
                tasks: self.tasks.len(),
            });
        }
        if self.task_categories != distinct_categories(&self.tasks) {
            return Err(PotionValidationError::CategoriesMismatch);
        }
        Ok(())
    }
}

/// Distinct categories of `tasks` in first-occurrence order.
pub fn distinct_categories(tasks: &[Task]) -> Vec<Category> {
    let mut categories: Vec<Category> = Vec::new();
    for task in tasks {
        if !categories.contains(&task.category) {
            categories.push(task.category);
        }
    }
    categories
}

/// Lenient view of a potion coming from imported or foreign data.
///
/// Mood and category keys stay plain strings; resolving them is the
/// narrative layer's job and may fail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PotionRecord {
    pub mood: MoodRecord,
    #[serde(default)]
    pub task_categories: Vec<String>,
    #[serde(default)]
    pub task_count: usize,
    #[serde(default)]
    pub diary_note: String,
}

/// Mood part of [`PotionRecord`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodRecord {
    pub mood: String,
    #[serde(default)]
    pub color: String,
}

impl From<&Potion> for PotionRecord {
    fn from(potion: &Potion) -> Self {
        Self {
            mood: MoodRecord {
                mood: potion.mood.mood.as_str().to_string(),
                color: potion.mood.color.clone(),
            },
            task_categories: potion
                .task_categories
                .iter()
                .map(|category| category.as_str().to_string())
                .collect(),
            task_count: potion.task_count,
            diary_note: potion.diary_note.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::distinct_categories;
    use crate::model::category::Category;
    use crate::model::task::Task;

    #[test]
    fn distinct_categories_keeps_first_occurrence_order() {
        let tasks = vec![
            Task::new("gym", Category::Sport).expect("valid"),
            Task::new("dishes", Category::Home).expect("valid"),
            Task::new("run", Category::Sport).expect("valid"),
            Task::new("report", Category::Work).expect("valid"),
        ];
        assert_eq!(
            distinct_categories(&tasks),
            vec![Category::Sport, Category::Home, Category::Work]
        );
        assert!(distinct_categories(&[]).is_empty());
    }
}
