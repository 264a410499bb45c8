//! Note store use-case layer.
//!
//! # Responsibility
//! - Own the in-memory note collection and the selection reference.
//! - Persist through the key-value facility on every mutation.
//!
//! # Invariants
//! - The store is the only writer of the `notes` and `selected-id` keys.
//! - Display order is always derived, never stored.

pub mod note_store;
