use notebook_core::{schema_version, KeyValueStore, SqliteKeyValueStore, StorageError};
use rusqlite::Connection;
use tempfile::TempDir;

#[test]
fn set_get_remove_roundtrip_in_memory() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();

    assert_eq!(store.get("missing").unwrap(), None);

    store.set("notes", "[]").unwrap();
    assert_eq!(store.get("notes").unwrap().as_deref(), Some("[]"));

    store.remove("notes").unwrap();
    assert_eq!(store.get("notes").unwrap(), None);
}

#[test]
fn set_is_an_upsert() {
    let store = SqliteKeyValueStore::open_in_memory().unwrap();

    store.set("selected-id", "1").unwrap();
    store.set("selected-id", "2").unwrap();

    assert_eq!(store.get("selected-id").unwrap().as_deref(), Some("2"));
}

#[test]
fn values_survive_reopen_of_the_same_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notebook.sqlite3");

    {
        let store = SqliteKeyValueStore::open(&path).unwrap();
        store.set("notes", r#"[{"stub":true}]"#).unwrap();
    }

    let reopened = SqliteKeyValueStore::open(&path).unwrap();
    assert_eq!(
        reopened.get("notes").unwrap().as_deref(),
        Some(r#"[{"stub":true}]"#)
    );
}

#[test]
fn opening_is_idempotent_on_an_initialized_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notebook.sqlite3");

    drop(SqliteKeyValueStore::open(&path).unwrap());
    // Second open must find the schema already applied and succeed.
    drop(SqliteKeyValueStore::open(&path).unwrap());

    let conn = Connection::open(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(version, schema_version());
}

#[test]
fn newer_schema_on_disk_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("notebook.sqlite3");

    {
        let conn = Connection::open(&path).unwrap();
        conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    }

    let err = SqliteKeyValueStore::open(&path).unwrap_err();
    assert!(matches!(
        err,
        StorageError::UnsupportedSchemaVersion {
            db_version: 999,
            ..
        }
    ));
}
