//! Versioned whole-collection snapshots stored as JSON values.
//!
//! Wire shape: `{"version": 1, "items": [...]}`.

use crate::repo::kv_store::{KvStore, StoreError, StoreResult};
use log::debug;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Snapshot schema version written by this build.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotOut<'a, T> {
    version: u32,
    items: &'a [T],
}

#[derive(Deserialize)]
struct SnapshotHeader {
    version: u64,
}

#[derive(Deserialize)]
struct SnapshotIn<T> {
    items: Vec<T>,
}

/// Loads the collection stored under `key`.
///
/// Missing key yields an empty collection.
///
/// # Errors
/// - `UnsupportedVersion` when the snapshot is newer than `SNAPSHOT_VERSION`.
/// - `Json` when the blob is not a valid snapshot of `T`.
pub fn load_collection<T, S>(store: &S, key: &str) -> StoreResult<Vec<T>>
where
    T: DeserializeOwned,
    S: KvStore + ?Sized,
{
    let Some(raw) = store.get(key)? else {
        debug!("event=snapshot_load module=repo status=empty key={key}");
        return Ok(Vec::new());
    };

    let header: SnapshotHeader = serde_json::from_str(&raw)?;
    if header.version > u64::from(SNAPSHOT_VERSION) {
        return Err(StoreError::UnsupportedVersion {
            key: key.to_string(),
            found: header.version,
            supported: SNAPSHOT_VERSION,
        });
    }

    let snapshot: SnapshotIn<T> = serde_json::from_str(&raw)?;
    debug!(
        "event=snapshot_load module=repo status=ok key={key} items={}",
        snapshot.items.len()
    );
    Ok(snapshot.items)
}

/// Replaces the snapshot stored under `key` with `items`.
pub fn save_collection<T, S>(store: &S, key: &str, items: &[T]) -> StoreResult<()>
where
    T: Serialize,
    S: KvStore + ?Sized,
{
    let raw = serde_json::to_string(&SnapshotOut {
        version: SNAPSHOT_VERSION,
        items,
    })?;
    store.set(key, &raw)?;
    debug!(
        "event=snapshot_save module=repo status=ok key={key} items={}",
        items.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{load_collection, save_collection, SNAPSHOT_VERSION};
    use crate::repo::kv_store::{InMemoryKvStore, KvStore, StoreError};

    #[test]
    fn missing_key_loads_empty() {
        let store = InMemoryKvStore::new();
        let items: Vec<String> = load_collection(&store, "tasks").unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn saved_snapshot_carries_version_tag() {
        let store = InMemoryKvStore::new();
        save_collection(&store, "tasks", &["a".to_string(), "b".to_string()]).unwrap();

        let raw = store.get("tasks").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["version"], SNAPSHOT_VERSION);
        assert_eq!(value["items"][1], "b");

        let loaded: Vec<String> = load_collection(&store, "tasks").unwrap();
        assert_eq!(loaded, vec!["a", "b"]);
    }

    #[test]
    fn newer_version_is_rejected() {
        let store = InMemoryKvStore::new();
        store
            .set("potions", r#"{"version": 99, "items": []}"#)
            .unwrap();
        let err = load_collection::<String, _>(&store, "potions").unwrap_err();
        assert!(matches!(
            err,
            StoreError::UnsupportedVersion { found: 99, .. }
        ));
    }

    #[test]
    fn bare_array_without_envelope_is_rejected() {
        let store = InMemoryKvStore::new();
        store.set("tasks", "[]").unwrap();
        let err = load_collection::<String, _>(&store, "tasks").unwrap_err();
        assert!(matches!(err, StoreError::Json(_)));
    }
}
