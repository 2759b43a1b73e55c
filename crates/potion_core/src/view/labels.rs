//! Localized UI strings owned by the core.

use crate::model::language::Language;

/// Fixed UI label identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// Shown when brewing without a mood.
    SelectMoodAlert,
    EmptyTaskList,
    MoodHeading,
    TasksHeading,
    NoteHeading,
    PotionFrom,
    EditTask,
    EditTaskPrompt,
    DeleteTask,
    DeleteTaskConfirm,
}

impl Label {
    pub fn text(self, language: Language) -> &'static str {
        match (self, language) {
            (Self::SelectMoodAlert, Language::En) => "Please select a mood!",
            (Self::SelectMoodAlert, Language::Ru) => "Пожалуйста, выберите настроение!",
            (Self::EmptyTaskList, Language::En) => "No tasks yet. Add your first task!",
            (Self::EmptyTaskList, Language::Ru) => "Пока нет задач. Добавьте первую задачу!",
            (Self::MoodHeading, Language::En) => "Mood:",
            (Self::MoodHeading, Language::Ru) => "Настроение:",
            (Self::TasksHeading, Language::En) => "Tasks:",
            (Self::TasksHeading, Language::Ru) => "Задачи:",
            (Self::NoteHeading, Language::En) => "Note:",
            (Self::NoteHeading, Language::Ru) => "Заметка:",
            (Self::PotionFrom, Language::En) => "Potion from",
            (Self::PotionFrom, Language::Ru) => "Эликсир от",
            (Self::EditTask, Language::En) => "Edit",
            (Self::EditTask, Language::Ru) => "Редактировать",
            (Self::EditTaskPrompt, Language::En) => "Edit task:",
            (Self::EditTaskPrompt, Language::Ru) => "Редактировать задачу:",
            (Self::DeleteTask, Language::En) => "Delete",
            (Self::DeleteTask, Language::Ru) => "Удалить",
            (Self::DeleteTaskConfirm, Language::En) => "Delete this task?",
            (Self::DeleteTaskConfirm, Language::Ru) => "Удалить эту задачу?",
        }
    }
}
