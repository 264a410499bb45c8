use notebook_core::{KeyValueStore, MemoryKeyValueStore, Note, NoteStore, NOTES_KEY};

fn note(id: &str, created: i64, favorite: bool) -> Note {
    Note {
        id: id.to_string(),
        title: format!("note {id}"),
        content: String::new(),
        created,
        favorite,
    }
}

fn store_with(notes: Vec<Note>) -> NoteStore<MemoryKeyValueStore> {
    let kv = MemoryKeyValueStore::new();
    kv.set(NOTES_KEY, &serde_json::to_string(&notes).unwrap())
        .unwrap();
    NoteStore::load(kv).unwrap()
}

fn ordered_ids(store: &NoteStore<MemoryKeyValueStore>) -> Vec<&str> {
    store
        .ordered_view()
        .iter()
        .map(|note| note.id.as_str())
        .collect()
}

#[test]
fn favorites_come_first_then_creation_time() {
    let store = store_with(vec![
        note("c", 30, false),
        note("a", 10, false),
        note("d", 40, true),
        note("b", 20, true),
    ]);

    assert_eq!(ordered_ids(&store), vec!["b", "d", "a", "c"]);
}

#[test]
fn equal_keys_preserve_insertion_order() {
    // Same created, same favorite: the tie must break by insertion order.
    let store = store_with(vec![
        note("first", 100, false),
        note("second", 100, false),
        note("third", 100, false),
    ]);

    assert_eq!(ordered_ids(&store), vec!["first", "second", "third"]);
}

#[test]
fn view_invariant_holds_for_a_mixed_collection() {
    let store = store_with(vec![
        note("n1", 5, false),
        note("n2", 3, true),
        note("n3", 3, false),
        note("n4", 8, true),
        note("n5", 1, false),
    ]);

    let view = store.ordered_view();
    for pair in view.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        assert!(a.favorite >= b.favorite, "favorites must sort first");
        if a.favorite == b.favorite {
            assert!(a.created <= b.created, "created must be non-decreasing");
        }
    }
}

#[test]
fn view_is_a_projection_not_a_reorder() {
    let store = store_with(vec![note("late", 20, true), note("early", 10, false)]);

    assert_eq!(ordered_ids(&store), vec!["late", "early"]);
    // Insertion order is untouched.
    let stored_ids: Vec<_> = store.notes().iter().map(|n| n.id.as_str()).collect();
    assert_eq!(stored_ids, vec!["late", "early"]);
}

#[test]
fn toggling_favorite_moves_a_note_ahead() {
    let mut store = store_with(vec![note("a", 10, false), note("b", 20, false)]);
    assert_eq!(ordered_ids(&store), vec!["a", "b"]);

    store.toggle_favorite("b").unwrap();
    assert_eq!(ordered_ids(&store), vec!["b", "a"]);

    store.toggle_favorite("b").unwrap();
    assert_eq!(ordered_ids(&store), vec!["a", "b"]);
}
