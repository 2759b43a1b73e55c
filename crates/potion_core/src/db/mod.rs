//! SQLite bootstrap for the key-value backing store.
//!
//! # Responsibility
//! - Open and configure the connection behind `SqliteKvStore`.
//! - Bring the `kv_entries` schema up to date before any key is read.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version`.
//! - A store file written by a newer build is never migrated or opened.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod open;

pub use open::{open_db, open_db_in_memory};

pub type StoreOpenResult<T> = Result<T, StoreOpenError>;

/// Failure while opening or migrating the SQLite store.
#[derive(Debug)]
pub enum StoreOpenError {
    /// The database file (or in-memory handle) could not be opened.
    Connect {
        mode: &'static str,
        source: rusqlite::Error,
    },
    /// Migration `version` failed and was rolled back.
    Migration {
        version: u32,
        source: rusqlite::Error,
    },
    /// Store file was written by a newer build.
    SchemaTooNew { found: u32, supported: u32 },
    /// Any other SQLite failure, including `kv_entries` statements.
    Sqlite(rusqlite::Error),
}

impl Display for StoreOpenError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Connect { mode, source } => {
                write!(f, "cannot open {mode} potion store: {source}")
            }
            Self::Migration { version, source } => {
                write!(f, "potion store migration {version} failed: {source}")
            }
            Self::SchemaTooNew { found, supported } => write!(
                f,
                "potion store schema {found} is newer than this build ({supported})"
            ),
            Self::Sqlite(err) => write!(f, "sqlite: {err}"),
        }
    }
}

impl Error for StoreOpenError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Connect { source, .. } | Self::Migration { source, .. } => Some(source),
            Self::Sqlite(err) => Some(err),
            Self::SchemaTooNew { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StoreOpenError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
