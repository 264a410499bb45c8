//! Core domain logic for the notebook.
//! This crate is the single source of truth for note state and persistence.

pub mod dates;
pub mod logging;
pub mod model;
pub mod render;
pub mod stats;
pub mod storage;
pub mod store;

pub use dates::format_created;
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteId, DEFAULT_NOTE_CONTENT};
pub use render::render_markdown;
pub use stats::{text_stats, TextStats};
pub use storage::{
    schema_version, KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError,
    StorageResult,
};
pub use store::note_store::{NoteStore, StoreError, StoreResult, NOTES_KEY, SELECTED_ID_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
