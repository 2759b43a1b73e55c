//! Core domain logic for Mood Alchemy.
//! This crate is the single source of truth for business invariants.

pub mod app;
pub mod color;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod narrative;
pub mod repo;
pub mod service;
pub mod view;

pub use app::{CoreObserver, MoodAlchemy};
pub use color::{lighten, InvalidColorError};
pub use config::CoreConfig;
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::category::Category;
pub use model::language::Language;
pub use model::mood::{MoodKind, MoodSelection};
pub use model::potion::{MoodRecord, Potion, PotionId, PotionRecord};
pub use model::task::{Task, TaskId, TaskValidationError};
pub use narrative::compose::{
    compose, compose_record, compose_records, compose_with, NarrativeError, NarrativeOptions,
    NarrativeResult, RussianPlurals,
};
pub use repo::kv_store::{InMemoryKvStore, KvStore, SqliteKvStore, StoreError, StoreResult};
pub use service::language_service::LanguagePreference;
pub use service::mood_service::MoodCapture;
pub use service::potion_service::{brew, BrewError, PotionCollection};
pub use service::task_service::{TaskStore, TaskStoreError, TaskStoreResult};
pub use view::potion_view::{PotionDetails, PotionVisual};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
