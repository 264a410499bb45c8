//! In-memory note collection with explicit persistence.
//!
//! # Responsibility
//! - Implement add/remove/select/favorite/edit over the note collection.
//! - Derive the favorite-first ordered view, preview and text stats.
//! - Write the collection and selection to storage on every mutation.
//!
//! # Invariants
//! - Note ids are unique within the collection and never reassigned.
//! - `notes` keeps insertion order; display order is derived on demand.
//! - Selection is a lookup key; a dangling id resolves to "no selection".
//! - Malformed persisted state loads as empty defaults, never as an error.

use crate::model::note::{Note, NoteId};
use crate::render::render_markdown;
use crate::stats::{text_stats, TextStats};
use crate::storage::{KeyValueStore, StorageError};
use log::{info, warn};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{SystemTime, UNIX_EPOCH};

/// Storage key holding the serialized JSON array of all notes.
pub const NOTES_KEY: &str = "notes";
/// Storage key holding the selected note id as a raw string.
pub const SELECTED_ID_KEY: &str = "selected-id";

pub type StoreResult<T> = Result<T, StoreError>;

/// Failure surfaced by note store mutations.
///
/// Reads never fail: absent ids are `None`/no-op by contract, and malformed
/// persisted state falls back to defaults at load time.
#[derive(Debug)]
pub enum StoreError {
    /// The key-value engine rejected a read or write.
    Storage(StorageError),
    /// The note collection could not be serialized for persistence.
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(err) => write!(f, "{err}"),
            Self::Serialize(err) => write!(f, "failed to serialize notes: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Storage(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// The notebook's single source of truth for one session.
///
/// Constructed once at startup from persisted state via [`NoteStore::load`],
/// handed to the presentation layer, torn down never. Exactly one logical
/// writer mutates it; every mutation persists synchronously before returning.
pub struct NoteStore<S: KeyValueStore> {
    kv: S,
    notes: Vec<Note>,
    selected_id: Option<NoteId>,
}

impl<S: KeyValueStore> NoteStore<S> {
    /// Loads a store from persisted state, defaulting on anything malformed.
    ///
    /// A missing or unparseable notes payload yields an empty collection; a
    /// missing selection key yields no selection. Neither is an error, both
    /// are logged.
    pub fn load(kv: S) -> StoreResult<Self> {
        let notes = match kv.get(NOTES_KEY)? {
            Some(payload) => match serde_json::from_str::<Vec<Note>>(&payload) {
                Ok(notes) => notes,
                Err(err) => {
                    warn!(
                        "event=notes_load module=store status=fallback reason=malformed_payload error={err}"
                    );
                    Vec::new()
                }
            },
            None => Vec::new(),
        };
        let selected_id = kv.get(SELECTED_ID_KEY)?;

        info!(
            "event=notes_load module=store status=ok count={} selected={}",
            notes.len(),
            selected_id.is_some()
        );

        Ok(Self {
            kv,
            notes,
            selected_id,
        })
    }

    /// Creates a defaulted note, appends it and selects it.
    ///
    /// The id is the stringified current epoch millisecond, bumped forward
    /// until unique so that two adds within the same millisecond cannot
    /// collide. Returns a clone of the created note.
    pub fn add(&mut self) -> StoreResult<Note> {
        let created_ms = self.next_note_timestamp();
        let note = Note::with_defaults(created_ms, self.notes.len() + 1);

        self.notes.push(note.clone());
        self.save_notes()?;
        self.select(note.id.clone())?;

        info!("event=note_add module=store status=ok id={}", note.id);
        Ok(note)
    }

    /// Removes the note matching `id`. No-op when absent.
    ///
    /// If the removed note was selected, the selection is cleared; the caller
    /// decides what to select next. Returns whether anything changed.
    pub fn remove(&mut self, id: &str) -> StoreResult<bool> {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            return Ok(false);
        };

        self.notes.remove(index);
        self.save_notes()?;
        if self.selected_id.as_deref() == Some(id) {
            self.deselect()?;
        }

        info!("event=note_remove module=store status=ok id={id}");
        Ok(true)
    }

    /// Sets the selection reference without validating existence.
    ///
    /// A dangling id is allowed and resolves to no selection downstream.
    pub fn select(&mut self, id: impl Into<NoteId>) -> StoreResult<()> {
        self.selected_id = Some(id.into());
        self.save_selection()
    }

    /// Clears the selection reference.
    pub fn deselect(&mut self) -> StoreResult<()> {
        self.selected_id = None;
        self.save_selection()
    }

    /// Flips the favorite flag of the note matching `id` in place.
    ///
    /// Returns whether a note was found and flipped.
    pub fn toggle_favorite(&mut self, id: &str) -> StoreResult<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(false);
        };
        note.toggle_favorite();
        self.save_notes()?;
        Ok(true)
    }

    /// Replaces the title of the note matching `id`. No-op when absent.
    pub fn set_title(&mut self, id: &str, title: impl Into<String>) -> StoreResult<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(false);
        };
        note.title = title.into();
        self.save_notes()?;
        Ok(true)
    }

    /// Replaces the markdown body of the note matching `id`. No-op when absent.
    pub fn set_content(&mut self, id: &str, content: impl Into<String>) -> StoreResult<bool> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            return Ok(false);
        };
        note.content = content.into();
        self.save_notes()?;
        Ok(true)
    }

    /// Notes in insertion order.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Looks up a note by id.
    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    /// The raw selection reference, dangling or not.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected_id.as_deref()
    }

    /// Resolves the selection; absent or dangling ids yield `None`.
    pub fn selected_note(&self) -> Option<&Note> {
        self.selected_id
            .as_deref()
            .and_then(|id| self.get(id))
    }

    /// Display sequence: favorites first, then by creation time.
    ///
    /// Two stable passes: sort by `created` ascending, then re-sort by the
    /// favorite flag with equal flags comparing equal so the first pass's
    /// order survives within each group. A single combined comparator would
    /// have to re-derive that tie-breaking and is easy to get subtly wrong.
    pub fn ordered_view(&self) -> Vec<&Note> {
        let mut view: Vec<&Note> = self.notes.iter().collect();
        view.sort_by(|a, b| a.created.cmp(&b.created));
        view.sort_by(|a, b| match (a.favorite, b.favorite) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        });
        view
    }

    /// HTML preview of the selected note; empty when nothing is selected.
    pub fn note_preview(&self) -> String {
        self.selected_note()
            .map(|note| render_markdown(&note.content))
            .unwrap_or_default()
    }

    /// Text statistics of the selected note.
    pub fn selected_stats(&self) -> Option<TextStats> {
        self.selected_note().map(|note| text_stats(&note.content))
    }

    fn next_note_timestamp(&self) -> i64 {
        let mut candidate = now_epoch_ms();
        loop {
            let id = candidate.to_string();
            if !self.notes.iter().any(|note| note.id == id) {
                return candidate;
            }
            candidate += 1;
        }
    }

    fn save_notes(&self) -> StoreResult<()> {
        let payload = serde_json::to_string(&self.notes)?;
        self.kv.set(NOTES_KEY, &payload)?;
        Ok(())
    }

    fn save_selection(&self) -> StoreResult<()> {
        match self.selected_id.as_deref() {
            Some(id) => self.kv.set(SELECTED_ID_KEY, id)?,
            None => self.kv.remove(SELECTED_ID_KEY)?,
        }
        Ok(())
    }
}

fn now_epoch_ms() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as i64
}
