//! SQLite-backed key-value engine.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections for notebook persistence.
//! - Configure connection pragmas and create the schema before first use.
//! - Implement `KeyValueStore` over a single `kv` table.
//!
//! # Invariants
//! - Returned stores have the schema fully applied.
//! - The applied schema version is mirrored to `PRAGMA user_version`; a
//!   database written by a newer binary is rejected, not guessed at.
//! - `set` is an upsert; re-setting a key replaces its value.

use super::{KeyValueStore, StorageError, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

const SCHEMA_VERSION: u32 = 1;
const SCHEMA_SQL: &str = "CREATE TABLE IF NOT EXISTS kv (
    key TEXT PRIMARY KEY NOT NULL,
    value TEXT NOT NULL,
    updated_at INTEGER NOT NULL DEFAULT (strftime('%s', 'now') * 1000)
);";

/// Returns the schema version written by this binary.
pub fn schema_version() -> u32 {
    SCHEMA_VERSION
}

/// Key-value store persisted in a SQLite database.
#[derive(Debug)]
pub struct SqliteKeyValueStore {
    conn: Connection,
}

impl SqliteKeyValueStore {
    /// Opens a database file and ensures the schema is applied.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, "file", started_at)
    }

    /// Opens an in-memory database and ensures the schema is applied.
    ///
    /// Contents live only as long as this store value.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=memory");

        let conn = match Connection::open_in_memory() {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, "memory", started_at)
    }

    fn bootstrap(mut conn: Connection, mode: &str, started_at: Instant) -> StorageResult<Self> {
        let result = (|| {
            conn.execute_batch("PRAGMA foreign_keys = ON;")?;
            conn.busy_timeout(Duration::from_secs(5))?;
            ensure_schema(&mut conn)
        })();

        match result {
            Ok(()) => {
                info!(
                    "event=storage_open module=storage status=ok mode={} duration_ms={}",
                    mode,
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={} duration_ms={} error={}",
                    mode,
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

impl KeyValueStore for SqliteKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1;", [key])?;
        Ok(())
    }
}

fn ensure_schema(conn: &mut Connection) -> StorageResult<()> {
    let on_disk: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;

    if on_disk > SCHEMA_VERSION {
        return Err(StorageError::UnsupportedSchemaVersion {
            db_version: on_disk,
            latest_supported: SCHEMA_VERSION,
        });
    }
    if on_disk == SCHEMA_VERSION {
        return Ok(());
    }

    let tx = conn.transaction()?;
    tx.execute_batch(SCHEMA_SQL)?;
    tx.execute_batch(&format!("PRAGMA user_version = {SCHEMA_VERSION};"))?;
    tx.commit()?;

    Ok(())
}
