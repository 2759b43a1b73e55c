//! Task list projection for the task management modal.

use crate::model::language::Language;
use crate::model::task::{Task, TaskId};
use crate::view::labels::Label;

/// One row of the task list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskListItem {
    pub id: TaskId,
    pub title: String,
    pub completed: bool,
    pub glyph: &'static str,
    pub category_name: &'static str,
}

/// Either the rows to render or the localized empty-state message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskListView {
    Empty(&'static str),
    Items(Vec<TaskListItem>),
}

impl TaskListView {
    pub fn build(tasks: &[Task], language: Language) -> Self {
        if tasks.is_empty() {
            return Self::Empty(Label::EmptyTaskList.text(language));
        }
        Self::Items(
            tasks
                .iter()
                .map(|task| TaskListItem {
                    id: task.id,
                    title: task.title.clone(),
                    completed: task.completed,
                    glyph: task.category.glyph(),
                    category_name: task.category.display_name(language),
                })
                .collect(),
        )
    }
}
