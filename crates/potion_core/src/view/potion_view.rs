//! Potion display and detail projections.

use crate::color::{lighten, InvalidColorError};
use crate::model::language::Language;
use crate::model::potion::{Potion, PotionId};
use crate::view::labels::Label;

const HIGHLIGHT_PERCENT: f64 = 20.0;
const MAX_SPARKLES: usize = 10;
const MAX_BUBBLES: usize = 8;
const BUBBLES_PER_CATEGORY: usize = 2;

/// Visual parameters for the potion bottle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionVisual {
    /// Gradient start; the mood color frozen at brew time.
    pub base_color: String,
    /// Gradient end; `base_color` lightened by 20%.
    pub highlight_color: String,
    /// One sparkle per task, capped at 10.
    pub sparkle_count: usize,
    /// Two bubbles per category, capped at 8.
    pub bubble_count: usize,
}

impl PotionVisual {
    /// # Errors
    /// - `InvalidColorError` when the stored mood color is malformed.
    pub fn for_potion(potion: &Potion) -> Result<Self, InvalidColorError> {
        Ok(Self {
            base_color: potion.mood.color.clone(),
            highlight_color: lighten(&potion.mood.color, HIGHLIGHT_PERCENT)?,
            sparkle_count: potion.task_count.min(MAX_SPARKLES),
            bubble_count: (potion.task_categories.len() * BUBBLES_PER_CATEGORY).min(MAX_BUBBLES),
        })
    }
}

/// Localized detail card for one collected potion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PotionDetails {
    pub potion_id: PotionId,
    /// Brew time in epoch milliseconds; date formatting is left to the UI.
    pub created_at: i64,
    pub heading: &'static str,
    pub color: String,
    pub mood_label: &'static str,
    pub mood_name: &'static str,
    /// Rendered as `"{tasks_label} ({task_count}):"`.
    pub tasks_label: &'static str,
    pub task_count: usize,
    /// `"{glyph} {title}"` per task, in potion order.
    pub task_lines: Vec<String>,
    /// `(label, note)` when the potion has a diary note.
    pub note: Option<(&'static str, String)>,
}

impl PotionDetails {
    pub fn for_potion(potion: &Potion, language: Language) -> Self {
        Self {
            potion_id: potion.id,
            created_at: potion.created_at,
            heading: Label::PotionFrom.text(language),
            color: potion.mood.color.clone(),
            mood_label: Label::MoodHeading.text(language),
            mood_name: potion.mood.mood.display_name(language),
            tasks_label: Label::TasksHeading.text(language),
            task_count: potion.task_count,
            task_lines: potion
                .tasks
                .iter()
                .map(|task| format!("{} {}", task.category.glyph(), task.title))
                .collect(),
            note: (!potion.diary_note.is_empty())
                .then(|| (Label::NoteHeading.text(language), potion.diary_note.clone())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{PotionDetails, PotionVisual};
    use crate::model::category::Category;
    use crate::model::language::Language;
    use crate::model::mood::{MoodKind, MoodSelection};
    use crate::model::task::Task;
    use crate::service::potion_service::brew;

    fn completed(title: &str, category: Category) -> Task {
        let mut task = Task::new(title, category).unwrap();
        task.completed = true;
        task
    }

    #[test]
    fn visual_caps_sparkles_and_bubbles() {
        let tasks: Vec<Task> = (0..12)
            .map(|i| completed(&format!("t{i}"), Category::ALL[i % 6]))
            .collect();
        let potion = brew(Some(&MoodSelection::new(MoodKind::Joy)), &tasks, "").unwrap();

        let visual = PotionVisual::for_potion(&potion).unwrap();
        assert_eq!(visual.sparkle_count, 10);
        assert_eq!(visual.bubble_count, 8);
        assert_eq!(visual.base_color, "#ffb6c1");
        assert_eq!(visual.highlight_color, "#ffe9f4");
    }

    #[test]
    fn visual_rejects_corrupted_color() {
        let mut potion = brew(Some(&MoodSelection::new(MoodKind::Calm)), &[], "").unwrap();
        potion.mood.color = "lavender".to_string();
        assert!(PotionVisual::for_potion(&potion).is_err());
    }

    #[test]
    fn details_are_localized_and_list_tasks() {
        let tasks = vec![completed("Buy milk", Category::Home)];
        let potion = brew(Some(&MoodSelection::new(MoodKind::Sadness)), &tasks, "rainy").unwrap();

        let details = PotionDetails::for_potion(&potion, Language::Ru);
        assert_eq!(details.heading, "Эликсир от");
        assert_eq!(details.mood_name, "Грусть");
        assert_eq!(details.task_lines, vec!["🏠 Buy milk".to_string()]);
        assert_eq!(details.note, Some(("Заметка:", "rainy".to_string())));

        let empty = brew(Some(&MoodSelection::new(MoodKind::Joy)), &[], "").unwrap();
        assert_eq!(PotionDetails::for_potion(&empty, Language::En).note, None);
    }
}
