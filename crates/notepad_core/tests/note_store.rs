use notepad_core::{InMemoryNoteStore, NoteDraft, NoteId, NoteStore, StoreError};

#[test]
fn add_returns_sequential_ids_on_fresh_store() {
    let mut store = InMemoryNoteStore::new();
    assert_eq!(store.add(NoteDraft::titled("x")), NoteId::new(0));
    assert_eq!(store.add(NoteDraft::titled("y")), NoteId::new(1));
    assert_eq!(store.len(), 2);
}

#[test]
fn add_then_get_roundtrip() {
    let mut store = InMemoryNoteStore::new();
    let id = store.add(NoteDraft::new("title", "body"));

    let loaded = store.get(id).unwrap();
    assert_eq!(loaded.id, id);
    assert_eq!(loaded.title.as_deref(), Some("title"));
    assert_eq!(loaded.body.as_deref(), Some("body"));
    assert_eq!(store.get_id(loaded).unwrap(), id);
}

#[test]
fn delete_shifts_positions_of_later_notes() {
    let mut store = InMemoryNoteStore::new();
    let a = store.add(NoteDraft::titled("A"));
    let b = store.add(NoteDraft::titled("B"));
    let c = store.add(NoteDraft::titled("C"));
    let note_a = store.get(a).unwrap().clone();

    store.delete(a).unwrap();

    let titles = store
        .get_all()
        .iter()
        .map(|note| note.title.as_deref().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(titles, vec!["B", "C"]);
    assert_eq!(store.position(b).unwrap(), 0);
    assert_eq!(store.position(c).unwrap(), 1);

    let note_b = store.get(b).unwrap().clone();
    assert_eq!(store.get_id(&note_b).unwrap(), b);
    assert_eq!(store.get_id(&note_a), Err(StoreError::NotFound(a)));
}

#[test]
fn equal_content_notes_are_distinct_entities() {
    let mut store = InMemoryNoteStore::new();
    let first = store.add(NoteDraft::new("same", "same"));
    let second = store.add(NoteDraft::new("same", "same"));
    assert_ne!(first, second);

    store.delete(first).unwrap();
    let remaining = store.get_all()[0].clone();
    assert_eq!(store.get_id(&remaining).unwrap(), second);
}

#[test]
fn update_is_in_place_and_keeps_other_notes() {
    let mut store = InMemoryNoteStore::new();
    let first = store.add(NoteDraft::new("one", "first body"));
    let second = store.add(NoteDraft::new("two", "second body"));
    let third = store.add(NoteDraft::new("three", "third body"));

    store.update(second, "t", "b").unwrap();

    assert_eq!(store.len(), 3);
    assert_eq!(store.position(second).unwrap(), 1);
    let updated = store.get(second).unwrap();
    assert_eq!(updated.title.as_deref(), Some("t"));
    assert_eq!(updated.body.as_deref(), Some("b"));
    assert_eq!(store.get(first).unwrap().title.as_deref(), Some("one"));
    assert_eq!(store.get(third).unwrap().body.as_deref(), Some("third body"));
}

#[test]
fn unknown_ids_return_out_of_range() {
    let mut store = InMemoryNoteStore::new();
    store.add(NoteDraft::titled("only"));
    let missing = NoteId::new(42);

    assert_eq!(store.get(missing).unwrap_err(), StoreError::OutOfRange(missing));
    assert_eq!(
        store.update(missing, "t", "b").unwrap_err(),
        StoreError::OutOfRange(missing)
    );
    assert_eq!(store.delete(missing).unwrap_err(), StoreError::OutOfRange(missing));
    assert_eq!(
        store.position(missing).unwrap_err(),
        StoreError::OutOfRange(missing)
    );
    assert_eq!(store.len(), 1);
}

#[test]
fn deleting_twice_fails_the_second_time() {
    let mut store = InMemoryNoteStore::new();
    let id = store.add(NoteDraft::default());
    store.delete(id).unwrap();
    assert_eq!(store.delete(id), Err(StoreError::OutOfRange(id)));
    assert!(store.is_empty());
}
