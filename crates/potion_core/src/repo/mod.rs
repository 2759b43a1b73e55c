//! Persistence layer: abstract key-value store and collection snapshots.
//!
//! # Responsibility
//! - Define the string-keyed store contract services persist through.
//! - Keep SQLite and JSON details inside the persistence boundary.
//!
//! # Invariants
//! - Collections are written as whole snapshots, never as diffs.
//! - Snapshots carry a schema version; newer versions are rejected on load.

pub mod kv_store;
pub mod snapshot;
