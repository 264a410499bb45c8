//! Domain model for the notebook core.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, storage and views.
//! - Keep the persisted JSON shape stable across sessions.
//!
//! # Invariants
//! - Every note is identified by a stable, immutable `NoteId`.
//! - Serialized field names never change.

pub mod note;
