//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `notebook_core` linkage.
//! - Keep output deterministic for quick local sanity checks.

use notebook_core::{MemoryKeyValueStore, NoteStore};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    let mut store = NoteStore::load(MemoryKeyValueStore::new())?;
    let note = store.add()?;

    let stats = store.selected_stats().ok_or("added note should be selected")?;
    println!("notebook_core version={}", notebook_core::core_version());
    println!("note title={:?}", note.title);
    println!(
        "note stats lines={} words={} chars={}",
        stats.lines, stats.words, stats.chars
    );
    println!("preview={}", store.note_preview());

    Ok(())
}
