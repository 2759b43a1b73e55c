//! Narrative composition for brewed potions.
//!
//! # Responsibility
//! - Turn a potion into a deterministic English or Russian story.
//! - Resolve foreign mood/category keys with explicit errors.
//!
//! # Invariants
//! - Output depends only on the potion, the language and the options.
//! - Segment order is fixed: mood, categories, count, note.

pub mod compose;
pub mod templates;
