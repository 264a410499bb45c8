//! Note domain model.
//!
//! # Responsibility
//! - Define the canonical record for a single markdown note.
//! - Provide constructors for the defaulted "new note" shape.
//!
//! # Invariants
//! - `id` is assigned once and never reused for another note.
//! - `created` is epoch milliseconds and never changes after construction.

use serde::{Deserialize, Serialize};

/// Stable identifier for a note.
///
/// Time-derived (stringified epoch milliseconds at creation). Kept as a type
/// alias to make semantic intent explicit in signatures.
pub type NoteId = String;

/// Default markdown body for a freshly added note.
pub const DEFAULT_NOTE_CONTENT: &str =
    "**Hi!** This notebook is using [markdown](https://github.com/adam-p/markdown-here/wiki/Markdown-Cheatsheet) for formatting!";

/// Canonical record for a single markdown note.
///
/// The serialized shape (`id`, `title`, `content`, `created`, `favorite`) is
/// the on-disk persistence format; renaming a field is a breaking change for
/// existing notebooks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Stable ID used for selection and lookups.
    pub id: NoteId,
    /// Display title shown in the note list.
    pub title: String,
    /// Markdown source body.
    pub content: String,
    /// Creation time in epoch milliseconds. Drives display ordering.
    pub created: i64,
    /// Favorites sort ahead of everything else in the ordered view.
    pub favorite: bool,
}

impl Note {
    /// Creates a note with the defaulted fields of an "add" operation.
    ///
    /// `id` is the stringified `created_ms`; the caller is responsible for
    /// picking a timestamp that keeps ids unique within its collection.
    /// `ordinal` is the 1-based position used for the default title.
    pub fn with_defaults(created_ms: i64, ordinal: usize) -> Self {
        Self {
            id: created_ms.to_string(),
            title: format!("New note {ordinal}"),
            content: DEFAULT_NOTE_CONTENT.to_string(),
            created: created_ms,
            favorite: false,
        }
    }

    /// Flips the favorite flag in place and returns the new value.
    pub fn toggle_favorite(&mut self) -> bool {
        self.favorite = !self.favorite;
        self.favorite
    }
}

#[cfg(test)]
mod tests {
    use super::Note;

    #[test]
    fn with_defaults_derives_id_from_created() {
        let note = Note::with_defaults(1_700_000_000_000, 3);
        assert_eq!(note.id, "1700000000000");
        assert_eq!(note.created, 1_700_000_000_000);
        assert_eq!(note.title, "New note 3");
        assert!(!note.favorite);
        assert!(note.content.contains("markdown"));
    }

    #[test]
    fn toggle_favorite_twice_restores_flag() {
        let mut note = Note::with_defaults(1, 1);
        assert!(note.toggle_favorite());
        assert!(!note.toggle_favorite());
    }

    #[test]
    fn serialized_shape_matches_persistence_format() {
        let note = Note {
            id: "42".to_string(),
            title: "t".to_string(),
            content: "c".to_string(),
            created: 42,
            favorite: true,
        };
        let json = serde_json::to_value(&note).expect("note serializes");
        assert_eq!(
            json,
            serde_json::json!({
                "id": "42",
                "title": "t",
                "content": "c",
                "created": 42,
                "favorite": true,
            })
        );
    }
}
