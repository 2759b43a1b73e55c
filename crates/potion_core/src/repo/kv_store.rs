//! Key-value store contract with in-memory and SQLite implementations.
//!
//! # Invariants
//! - `set` replaces the whole value for a key in one statement.
//! - `get` on a missing key returns `Ok(None)`, never an error.

use crate::db::StoreOpenError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store key for the task list snapshot.
pub const TASKS_KEY: &str = "tasks";
/// Store key for the potion collection snapshot.
pub const POTIONS_KEY: &str = "potions";
/// Store key for the language preference.
pub const LANGUAGE_KEY: &str = "language";

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence failure while reading or writing the key-value store.
#[derive(Debug)]
pub enum StoreError {
    Db(StoreOpenError),
    Json(serde_json::Error),
    /// Snapshot was written by a newer schema than this build understands.
    UnsupportedVersion {
        key: String,
        found: u64,
        supported: u32,
    },
    /// Stored value decoded but violates record invariants.
    InvalidData(String),
    /// Backend-specific failure reported by custom store implementations.
    Backend(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Json(err) => write!(f, "invalid stored JSON: {err}"),
            Self::UnsupportedVersion {
                key,
                found,
                supported,
            } => write!(
                f,
                "snapshot `{key}` has version {found}, newer than supported {supported}"
            ),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::Backend(message) => write!(f, "store backend failure: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::UnsupportedVersion { .. } | Self::InvalidData(_) | Self::Backend(_) => None,
        }
    }
}

impl From<StoreOpenError> for StoreError {
    fn from(value: StoreOpenError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(StoreOpenError::Sqlite(value))
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// String-keyed persistence capability injected into services.
pub trait KvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Deletes `key`; returns whether a value existed.
    fn remove(&self, key: &str) -> StoreResult<bool>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        (**self).remove(key)
    }
}

/// Process-local store; contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryKvStore {
    entries: RefCell<BTreeMap<String, String>>,
}

impl InMemoryKvStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl KvStore for InMemoryKvStore {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.borrow_mut().remove(key).is_some())
    }
}

/// SQLite-backed store over the `kv_entries` table.
#[derive(Clone, Copy)]
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a connection opened via `db::open_db*` (migrations applied).
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_entries (key, value, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StoreResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM kv_entries WHERE key = ?1;", [key])?;
        Ok(changed > 0)
    }
}
