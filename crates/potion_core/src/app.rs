//! Application facade wiring the services into one editing session.
//!
//! # Responsibility
//! - Own the task store, potion collection, language preference, mood
//!   selection and diary note for one process.
//! - Notify registered observers after state changes.
//! - Reset the editing session after a brew.
//!
//! # Invariants
//! - Observers are notified whenever in-memory state changed, even if the
//!   following persist failed.
//! - A rejected brew (no mood) leaves the session untouched.

use crate::color::InvalidColorError;
use crate::model::category::Category;
use crate::model::language::Language;
use crate::model::mood::{MoodKind, MoodSelection};
use crate::model::potion::{Potion, PotionRecord};
use crate::model::task::{Task, TaskId};
use crate::narrative::compose::{compose, compose_records, NarrativeResult};
use crate::repo::kv_store::{KvStore, StoreResult};
use crate::service::language_service::LanguagePreference;
use crate::service::mood_service::MoodCapture;
use crate::service::potion_service::{BrewError, PotionCollection};
use crate::service::task_service::{TaskStore, TaskStoreError, TaskStoreResult};
use crate::view::potion_view::{PotionDetails, PotionVisual};
use crate::view::task_view::TaskListView;
use log::info;

/// Hooks the UI layer implements to react to core state changes.
///
/// Every method defaults to a no-op.
pub trait CoreObserver {
    fn tasks_changed(&self, _tasks: &[Task]) {}
    fn potion_brewed(&self, _potion: &Potion) {}
    fn language_changed(&self, _language: Language) {}
}

/// One user's mood alchemy session over a shared key-value store.
pub struct MoodAlchemy<S: KvStore + Clone> {
    tasks: TaskStore<S>,
    potions: PotionCollection<S>,
    language: LanguagePreference<S>,
    mood: MoodCapture,
    diary_note: String,
    observers: Vec<Box<dyn CoreObserver>>,
}

impl<S: KvStore + Clone> MoodAlchemy<S> {
    /// Loads tasks, potions and language from `store`.
    pub fn load(store: S) -> StoreResult<Self> {
        let app = Self {
            tasks: TaskStore::load(store.clone())?,
            potions: PotionCollection::load(store.clone())?,
            language: LanguagePreference::load(store)?,
            mood: MoodCapture::new(),
            diary_note: String::new(),
            observers: Vec::new(),
        };
        info!(
            "event=session_start module=app status=ok tasks={} potions={} language={}",
            app.tasks.len(),
            app.potions.len(),
            app.language.current()
        );
        Ok(app)
    }

    pub fn register_observer(&mut self, observer: Box<dyn CoreObserver>) {
        self.observers.push(observer);
    }

    pub fn add_task(&mut self, title: &str, category: Category) -> TaskStoreResult<Task> {
        let result = self.tasks.add(title, category);
        self.after_task_mutation(result)
    }

    pub fn toggle_task(&mut self, id: TaskId) -> TaskStoreResult<Task> {
        let result = self.tasks.toggle_completion(id);
        self.after_task_mutation(result)
    }

    pub fn rename_task(&mut self, id: TaskId, new_title: &str) -> TaskStoreResult<Task> {
        let result = self.tasks.rename(id, new_title);
        self.after_task_mutation(result)
    }

    pub fn remove_task(&mut self, id: TaskId) -> TaskStoreResult<bool> {
        let result = self.tasks.remove(id);
        if matches!(result, Ok(false)) {
            return result;
        }
        self.after_task_mutation(result)
    }

    pub fn tasks(&self) -> &[Task] {
        self.tasks.tasks()
    }

    pub fn completed_tasks(&self) -> Vec<Task> {
        self.tasks.completed_tasks()
    }

    pub fn task_list_view(&self) -> TaskListView {
        TaskListView::build(self.tasks.tasks(), self.language.current())
    }

    pub fn select_mood(&mut self, mood: MoodKind) -> MoodSelection {
        self.mood.select(mood).clone()
    }

    pub fn current_mood(&self) -> Option<&MoodSelection> {
        self.mood.current()
    }

    pub fn set_diary_note(&mut self, note: impl Into<String>) {
        self.diary_note = note.into();
    }

    pub fn diary_note(&self) -> &str {
        &self.diary_note
    }

    /// Diary note length in characters, as shown by the counter.
    pub fn diary_note_len(&self) -> usize {
        self.diary_note.chars().count()
    }

    /// Brews from the current session, notifies observers and resets the
    /// mood selection and diary note.
    ///
    /// # Errors
    /// - `NoMoodSelected`: nothing changes.
    /// - `Persistence`: the potion is kept in memory, observers are notified
    ///   and the session is reset before the error is returned.
    pub fn brew_potion(&mut self) -> Result<Potion, BrewError> {
        let completed = self.tasks.completed_tasks();
        let result = self
            .potions
            .brew(self.mood.current(), &completed, &self.diary_note);

        if matches!(result, Err(BrewError::NoMoodSelected)) {
            return result;
        }

        let brewed = match &result {
            Ok(potion) => Some(potion),
            Err(_) => self.potions.latest(),
        };
        if let Some(potion) = brewed {
            self.notify(|observer| observer.potion_brewed(potion));
        }

        self.reset_session();
        result
    }

    /// Clears the mood selection and diary note.
    pub fn reset_session(&mut self) {
        self.mood.clear();
        self.diary_note.clear();
    }

    pub fn potions(&self) -> &[Potion] {
        self.potions.potions()
    }

    /// Stored potions whose mood or category keys this build does not know.
    pub fn foreign_potions(&self) -> Vec<PotionRecord> {
        self.potions.foreign_records()
    }

    /// One story or lookup error per foreign potion, in stored order.
    pub fn foreign_stories(&self) -> Vec<NarrativeResult<String>> {
        compose_records(&self.potions.foreign_records(), self.language.current())
    }

    pub fn clear_potions(&mut self) -> StoreResult<()> {
        self.potions.clear()
    }

    /// Story for `potion` in the current language.
    pub fn story(&self, potion: &Potion) -> String {
        compose(potion, self.language.current())
    }

    pub fn potion_details(&self, potion: &Potion) -> PotionDetails {
        PotionDetails::for_potion(potion, self.language.current())
    }

    pub fn potion_visual(&self, potion: &Potion) -> Result<PotionVisual, InvalidColorError> {
        PotionVisual::for_potion(potion)
    }

    pub fn language(&self) -> Language {
        self.language.current()
    }

    pub fn set_language(&mut self, language: Language) -> StoreResult<()> {
        let result = self.language.set(language);
        self.notify(|observer| observer.language_changed(language));
        result
    }

    pub fn toggle_language(&mut self) -> StoreResult<Language> {
        let next = self.language.current().toggle();
        self.set_language(next)?;
        Ok(next)
    }

    /// Retries every collection whose last write failed.
    pub fn flush(&mut self) -> StoreResult<()> {
        if self.tasks.is_dirty() {
            self.tasks.flush()?;
        }
        if self.potions.is_dirty() {
            self.potions.flush()?;
        }
        Ok(())
    }

    fn after_task_mutation<T>(&self, result: TaskStoreResult<T>) -> TaskStoreResult<T> {
        if matches!(result, Ok(_) | Err(TaskStoreError::Persistence(_))) {
            let tasks = self.tasks.tasks();
            self.notify(|observer| observer.tasks_changed(tasks));
        }
        result
    }

    fn notify(&self, f: impl Fn(&dyn CoreObserver)) {
        for observer in &self.observers {
            f(observer.as_ref());
        }
    }
}
