//! Task store service.
//!
//! # Responsibility
//! - Own the newest-first task list and its CRUD/toggle use-cases.
//! - Persist the whole list after every successful mutation.
//!
//! # Invariants
//! - New tasks are prepended.
//! - A failed persist keeps the in-memory list authoritative; the store stays
//!   dirty until a later write (next mutation or `flush`) succeeds.

use crate::model::category::Category;
use crate::model::task::{normalize_title, Task, TaskId, TaskValidationError};
use crate::repo::kv_store::{KvStore, StoreError, StoreResult, TASKS_KEY};
use crate::repo::snapshot::{load_collection, save_collection};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Task store use-case error.
#[derive(Debug)]
pub enum TaskStoreError {
    Validation(TaskValidationError),
    NotFound(TaskId),
    /// In-memory change was applied but could not be written.
    Persistence(StoreError),
}

impl Display for TaskStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "task not found: {id}"),
            Self::Persistence(err) => write!(f, "failed to persist tasks: {err}"),
        }
    }
}

impl Error for TaskStoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<TaskValidationError> for TaskStoreError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for TaskStoreError {
    fn from(value: StoreError) -> Self {
        Self::Persistence(value)
    }
}

/// Owned task list with eager persistence.
pub struct TaskStore<S: KvStore> {
    store: S,
    tasks: Vec<Task>,
    dirty: bool,
}

impl<S: KvStore> TaskStore<S> {
    /// Loads the persisted task list (empty when nothing is stored).
    ///
    /// # Errors
    /// - Store read, snapshot decode, or task invariant failures.
    pub fn load(store: S) -> StoreResult<Self> {
        let tasks: Vec<Task> = load_collection(&store, TASKS_KEY)?;
        for task in &tasks {
            task.validate().map_err(|err| {
                StoreError::InvalidData(format!("task {} in `{TASKS_KEY}`: {err}", task.id))
            })?;
        }
        info!(
            "event=tasks_load module=service status=ok count={}",
            tasks.len()
        );
        Ok(Self {
            store,
            tasks,
            dirty: false,
        })
    }

    /// Creates an incomplete task at the front of the list.
    pub fn add(&mut self, title: &str, category: Category) -> TaskStoreResult<Task> {
        let task = Task::new(title, category)?;
        self.tasks.insert(0, task.clone());
        info!(
            "event=task_add module=service status=ok task_id={} category={}",
            task.id,
            category.as_str()
        );
        self.persist()?;
        Ok(task)
    }

    /// Flips the completion flag of one task.
    pub fn toggle_completion(&mut self, id: TaskId) -> TaskStoreResult<Task> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        let updated = task.clone();
        info!(
            "event=task_toggle module=service status=ok task_id={id} completed={}",
            updated.completed
        );
        self.persist()?;
        Ok(updated)
    }

    /// Replaces a task title with the trimmed `new_title`.
    ///
    /// Validation runs before lookup, so an empty title never touches state.
    pub fn rename(&mut self, id: TaskId, new_title: &str) -> TaskStoreResult<Task> {
        let title = normalize_title(new_title)?;
        let task = self.find_mut(id)?;
        task.title = title;
        let updated = task.clone();
        info!("event=task_rename module=service status=ok task_id={id}");
        self.persist()?;
        Ok(updated)
    }

    /// Removes a task. Returns `Ok(false)` without writing when `id` is absent.
    pub fn remove(&mut self, id: TaskId) -> TaskStoreResult<bool> {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        info!("event=task_remove module=service status=ok task_id={id}");
        self.persist()?;
        Ok(true)
    }

    /// Completed tasks in store order (newest first).
    pub fn completed_tasks(&self) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.completed)
            .cloned()
            .collect()
    }

    /// All tasks in store order (newest first).
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Whether the last write failed and in-memory state is ahead of storage.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retries writing the current list.
    pub fn flush(&mut self) -> StoreResult<()> {
        self.save()
    }

    fn find_mut(&mut self, id: TaskId) -> TaskStoreResult<&mut Task> {
        self.tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(TaskStoreError::NotFound(id))
    }

    fn persist(&mut self) -> TaskStoreResult<()> {
        self.save().map_err(TaskStoreError::from)
    }

    fn save(&mut self) -> StoreResult<()> {
        match save_collection(&self.store, TASKS_KEY, &self.tasks) {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                error!(
                    "event=tasks_persist module=service status=error count={} error={err}",
                    self.tasks.len()
                );
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{TaskStore, TaskStoreError};
    use crate::model::category::Category;
    use crate::model::task::TaskValidationError;
    use crate::repo::kv_store::InMemoryKvStore;
    use uuid::Uuid;

    #[test]
    fn add_prepends_and_rejects_blank_titles() {
        let kv = InMemoryKvStore::new();
        let mut store = TaskStore::load(&kv).unwrap();

        let first = store.add("first", Category::Work).unwrap();
        let second = store.add("second", Category::Home).unwrap();
        assert_eq!(store.tasks()[0].id, second.id);
        assert_eq!(store.tasks()[1].id, first.id);

        let err = store.add("   ", Category::Work).unwrap_err();
        assert!(matches!(
            err,
            TaskStoreError::Validation(TaskValidationError::EmptyTitle)
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rename_validates_before_lookup() {
        let kv = InMemoryKvStore::new();
        let mut store = TaskStore::load(&kv).unwrap();
        let task = store.add("draft", Category::Hobby).unwrap();

        assert!(matches!(
            store.rename(task.id, " "),
            Err(TaskStoreError::Validation(_))
        ));
        assert!(matches!(
            store.rename(Uuid::new_v4(), "x"),
            Err(TaskStoreError::NotFound(_))
        ));

        let renamed = store.rename(task.id, "  final  ").unwrap();
        assert_eq!(renamed.title, "final");
        assert_eq!(store.get(task.id).unwrap().title, "final");
    }

    #[test]
    fn remove_reports_whether_anything_was_removed() {
        let kv = InMemoryKvStore::new();
        let mut store = TaskStore::load(&kv).unwrap();
        let task = store.add("temp", Category::Social).unwrap();

        assert!(store.remove(task.id).unwrap());
        assert!(!store.remove(task.id).unwrap());
        assert!(store.is_empty());
    }
}
