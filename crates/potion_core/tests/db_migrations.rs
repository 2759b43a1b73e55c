use potion_core::db::migrations::latest_version;
use potion_core::db::{open_db, open_db_in_memory, StoreOpenError};
use potion_core::{KvStore, SqliteKvStore};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "kv_entries");
}

#[test]
fn reopening_file_database_keeps_values() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("alchemy.db");

    let conn_first = open_db(&path).unwrap();
    SqliteKvStore::new(&conn_first).set("language", "ru").unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let store = SqliteKvStore::new(&conn_second);
    assert_eq!(store.get("language").unwrap().as_deref(), Some("ru"));
}

#[test]
fn sqlite_store_upserts_and_removes() {
    let conn = open_db_in_memory().unwrap();
    let store = SqliteKvStore::new(&conn);

    assert_eq!(store.get("tasks").unwrap(), None);
    store.set("tasks", "first").unwrap();
    store.set("tasks", "second").unwrap();
    assert_eq!(store.get("tasks").unwrap().as_deref(), Some("second"));

    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM kv_entries;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);

    assert!(store.remove("tasks").unwrap());
    assert!(!store.remove("tasks").unwrap());
    assert_eq!(store.get("tasks").unwrap(), None);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        StoreOpenError::SchemaTooNew { found, supported } => {
            assert_eq!(found, 999);
            assert_eq!(supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn opening_database_in_missing_directory_reports_connect_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nested").join("potions.db");

    let err = open_db(&path).unwrap_err();
    assert!(matches!(err, StoreOpenError::Connect { mode: "file", .. }));
    assert!(err.to_string().starts_with("cannot open file potion store"));
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
