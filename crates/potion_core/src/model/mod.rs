//! Domain model for tasks, moods and brewed potions.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own the fixed bilingual tables (category names/clauses, mood names/colors).
//!
//! # Invariants
//! - Every task and potion is identified by a random v4 UUID.
//! - A potion holds value copies of tasks, never references into the task store.
//! - Timestamps are Unix epoch milliseconds.

pub mod category;
pub mod language;
pub mod mood;
pub mod potion;
pub mod task;

use std::time::{SystemTime, UNIX_EPOCH};

/// Current wall-clock time in Unix epoch milliseconds.
///
/// Falls back to `0` when the system clock is set before the epoch.
pub(crate) fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| i64::try_from(elapsed.as_millis()).unwrap_or(i64::MAX))
        .unwrap_or(0)
}
