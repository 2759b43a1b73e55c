//! Task domain model.
//!
//! # Responsibility
//! - Define the task record owned by the task store.
//! - Normalize and validate task titles.
//!
//! # Invariants
//! - `id` is stable and never reused for another task.
//! - `title` is trimmed and non-empty.
//! - `timestamp` is the creation time and never changes.

use crate::model::category::Category;
use crate::model::now_epoch_ms;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for tasks.
pub type TaskId = Uuid;

/// One user task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub category: Category,
    pub completed: bool,
    /// Creation time in Unix epoch milliseconds.
    pub timestamp: i64,
}

/// Validation errors for task records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
    /// Nil UUID is reserved and cannot identify a task.
    NilId,
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::NilId => write!(f, "task id must not be nil"),
        }
    }
}

impl Error for TaskValidationError {}

impl Task {
    /// Creates an incomplete task with a generated ID and current timestamp.
    ///
    /// # Errors
    /// - `EmptyTitle` when `title` is empty after trimming.
    pub fn new(title: &str, category: Category) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), title, category, now_epoch_ms())
    }

    /// Creates a task with caller-provided identity and timestamp.
    ///
    /// Used by import paths where identity already exists externally.
    pub fn with_id(
        id: TaskId,
        title: &str,
        category: Category,
        timestamp: i64,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: normalize_title(title)?,
            category,
            completed: false,
            timestamp,
        };
        task.validate()?;
        Ok(task)
    }

    /// Checks record invariants. Persisted records are re-validated on load.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        Ok(())
    }
}

/// Trims `raw` and rejects empty results.
pub fn normalize_title(raw: &str) -> Result<String, TaskValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}
