//! Potion record builder and potion collection service.
//!
//! # Responsibility
//! - Snapshot mood, completed tasks and diary note into an immutable potion.
//! - Own the newest-first potion collection and persist it eagerly.
//!
//! # Invariants
//! - A brew without a mood never touches the collection.
//! - Brewing never mutates the mood selection or the diary note; resetting
//!   the editing session is the caller's job.
//! - A failed persist keeps the in-memory collection authoritative.
//! - Stored items that do not decode as typed potions are kept as foreign
//!   records and written back untouched; they never fail the load.

use crate::model::mood::MoodSelection;
use crate::model::now_epoch_ms;
use crate::model::potion::{distinct_categories, Potion, PotionId, PotionRecord};
use crate::model::task::Task;
use crate::repo::kv_store::{KvStore, StoreError, StoreResult, POTIONS_KEY};
use crate::repo::snapshot::{load_collection, save_collection};
use log::{error, info, warn};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Brew use-case error.
#[derive(Debug)]
pub enum BrewError {
    /// No mood is selected; the only user-facing brew validation.
    NoMoodSelected,
    /// Potion was added in memory but could not be written.
    Persistence(StoreError),
}

impl Display for BrewError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoMoodSelected => write!(f, "no mood selected"),
            Self::Persistence(err) => write!(f, "failed to persist potions: {err}"),
        }
    }
}

impl Error for BrewError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NoMoodSelected => None,
            Self::Persistence(err) => Some(err),
        }
    }
}

impl From<StoreError> for BrewError {
    fn from(value: StoreError) -> Self {
        Self::Persistence(value)
    }
}

/// Builds a potion from the current editing state.
///
/// `completed_tasks` is expected newest-first; tasks are value-copied so later
/// task store edits cannot rewrite history.
pub fn brew(
    mood: Option<&MoodSelection>,
    completed_tasks: &[Task],
    diary_note: &str,
) -> Result<Potion, BrewError> {
    let mood = mood.ok_or(BrewError::NoMoodSelected)?;
    let tasks = completed_tasks.to_vec();
    Ok(Potion {
        id: Uuid::new_v4(),
        created_at: now_epoch_ms(),
        mood: mood.clone(),
        task_categories: distinct_categories(&tasks),
        task_count: tasks.len(),
        tasks,
        diary_note: diary_note.to_string(),
    })
}

/// Owned potion collection with eager persistence.
pub struct PotionCollection<S: KvStore> {
    store: S,
    potions: Vec<Potion>,
    foreign: Vec<ForeignPotion>,
    dirty: bool,
}

/// Stored item that only decodes leniently (unknown mood or category key).
struct ForeignPotion {
    record: PotionRecord,
    raw: Value,
}

impl<S: KvStore> PotionCollection<S> {
    /// Loads the persisted collection (empty when nothing is stored).
    ///
    /// Items with keys outside the fixed mood/category tables are kept aside
    /// as foreign records, see [`PotionCollection::foreign_records`].
    ///
    /// # Errors
    /// - `InvalidData` when a typed potion is inconsistent or an item is not
    ///   even a potion record.
    pub fn load(store: S) -> StoreResult<Self> {
        let items: Vec<Value> = load_collection(&store, POTIONS_KEY)?;
        let mut potions = Vec::with_capacity(items.len());
        let mut foreign = Vec::new();
        for (index, raw) in items.into_iter().enumerate() {
            match serde_json::from_value::<Potion>(raw.clone()) {
                Ok(potion) => {
                    potion.validate().map_err(|err| {
                        StoreError::InvalidData(format!(
                            "potion {} in `{POTIONS_KEY}`: {err}",
                            potion.id
                        ))
                    })?;
                    potions.push(potion);
                }
                Err(typed_err) => {
                    let record = serde_json::from_value::<PotionRecord>(raw.clone()).map_err(
                        |err| {
                            StoreError::InvalidData(format!(
                                "item {index} in `{POTIONS_KEY}`: {err}"
                            ))
                        },
                    )?;
                    warn!(
                        "event=potions_load module=service status=foreign index={index} mood={} error={typed_err}",
                        record.mood.mood
                    );
                    foreign.push(ForeignPotion { record, raw });
                }
            }
        }
        info!(
            "event=potions_load module=service status=ok count={} foreign={}",
            potions.len(),
            foreign.len()
        );
        Ok(Self {
            store,
            potions,
            foreign,
            dirty: false,
        })
    }

    /// Brews a potion and prepends it to the collection.
    ///
    /// # Errors
    /// - `NoMoodSelected` when `mood` is `None`; the collection is untouched.
    /// - `Persistence` when the write fails; the potion stays in memory and is
    ///   reachable via [`PotionCollection::latest`].
    pub fn brew(
        &mut self,
        mood: Option<&MoodSelection>,
        completed_tasks: &[Task],
        diary_note: &str,
    ) -> Result<Potion, BrewError> {
        let potion = match brew(mood, completed_tasks, diary_note) {
            Ok(potion) => potion,
            Err(err) => {
                warn!("event=potion_brew module=service status=rejected reason=no_mood");
                return Err(err);
            }
        };

        self.potions.insert(0, potion.clone());
        info!(
            "event=potion_brew module=service status=ok potion_id={} mood={} task_count={} categories={} has_note={}",
            potion.id,
            potion.mood.mood.as_str(),
            potion.task_count,
            potion.task_categories.len(),
            !potion.diary_note.is_empty()
        );
        self.persist()?;
        Ok(potion)
    }

    /// All potions, newest first.
    pub fn potions(&self) -> &[Potion] {
        &self.potions
    }

    pub fn latest(&self) -> Option<&Potion> {
        self.potions.first()
    }

    pub fn get(&self, id: PotionId) -> Option<&Potion> {
        self.potions.iter().find(|potion| potion.id == id)
    }

    pub fn len(&self) -> usize {
        self.potions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.potions.is_empty()
    }

    /// Stored items that could not be read as typed potions, in stored order.
    ///
    /// Feed them to `compose_records` to get one story or error per item.
    pub fn foreign_records(&self) -> Vec<PotionRecord> {
        self.foreign
            .iter()
            .map(|foreign| foreign.record.clone())
            .collect()
    }

    /// Drops every potion, foreign records included, and writes the empty
    /// collection.
    pub fn clear(&mut self) -> StoreResult<()> {
        let removed = self.potions.len() + self.foreign.len();
        self.potions.clear();
        self.foreign.clear();
        info!("event=potions_clear module=service status=ok removed={removed}");
        self.persist()
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Retries writing the current collection.
    pub fn flush(&mut self) -> StoreResult<()> {
        self.persist()
    }

    fn persist(&mut self) -> StoreResult<()> {
        match self.write_snapshot() {
            Ok(()) => {
                self.dirty = false;
                Ok(())
            }
            Err(err) => {
                self.dirty = true;
                error!(
                    "event=potions_persist module=service status=error count={} error={err}",
                    self.potions.len()
                );
                Err(err)
            }
        }
    }

    // Foreign items are written after the typed ones, byte-for-byte as loaded.
    fn write_snapshot(&self) -> StoreResult<()> {
        let mut items = Vec::with_capacity(self.potions.len() + self.foreign.len());
        for potion in &self.potions {
            items.push(serde_json::to_value(potion)?);
        }
        items.extend(self.foreign.iter().map(|foreign| foreign.raw.clone()));
        save_collection(&self.store, POTIONS_KEY, &items)
    }
}

#[cfg(test)]
mod tests {
    use super::{brew, BrewError};
    use crate::model::category::Category;
    use crate::model::mood::{MoodKind, MoodSelection};
    use crate::model::task::Task;

    #[test]
    fn brew_without_mood_fails() {
        let err = brew(None, &[], "note").unwrap_err();
        assert!(matches!(err, BrewError::NoMoodSelected));
        assert_eq!(err.to_string(), "no mood selected");
    }

    #[test]
    fn brew_counts_tasks_and_dedups_categories() {
        let mut first = Task::new("a", Category::Work).unwrap();
        first.completed = true;
        let mut second = Task::new("b", Category::Work).unwrap();
        second.completed = true;
        let selection = MoodSelection::new(MoodKind::Calm);

        let potion = brew(Some(&selection), &[first, second], "").unwrap();
        assert_eq!(potion.task_count, 2);
        assert_eq!(potion.task_categories, vec![Category::Work]);
        assert_eq!(potion.mood, selection);
        assert!(potion.diary_note.is_empty());
        potion.validate().unwrap();
    }
}
