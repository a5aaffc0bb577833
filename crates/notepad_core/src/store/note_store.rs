//! Note store trait and `Vec`-backed implementation.
//!
//! # Responsibility
//! - Provide create/read/update/delete over session notes.
//! - Assign ids on insert and expose current positions for list rendering.
//!
//! # Invariants
//! - Ids come from a monotonically increasing counter and are never reused.
//! - Deleting a note shifts the position of every later note down by one.
//! - Lookups by an unknown id fail; they never fall back to another note.

use crate::model::note::{Note, NoteDraft, NoteId};
use log::debug;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Store error for id-based lookups and mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// The id does not name a note currently in the store.
    OutOfRange(NoteId),
    /// Reverse lookup of a note that is no longer (or never was) stored.
    NotFound(NoteId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange(id) => write!(f, "note id out of range: {id}"),
            Self::NotFound(id) => write!(f, "note not found in store: {id}"),
        }
    }
}

impl Error for StoreError {}

/// Store interface used by services and the presentation layer.
pub trait NoteStore {
    /// Returns every note in insertion order.
    fn get_all(&self) -> &[Note];
    /// Gets one note by id.
    fn get(&self, id: NoteId) -> StoreResult<&Note>;
    /// Returns the id of `note` if that entity is currently stored.
    fn get_id(&self, note: &Note) -> StoreResult<NoteId>;
    /// Appends a draft and returns its assigned id.
    fn add(&mut self, draft: NoteDraft) -> NoteId;
    /// Replaces title and body of one note in place.
    fn update(&mut self, id: NoteId, title: &str, body: &str) -> StoreResult<()>;
    /// Removes one note.
    fn delete(&mut self, id: NoteId) -> StoreResult<()>;
    /// Returns the current list position of one note.
    fn position(&self, id: NoteId) -> StoreResult<usize>;

    fn len(&self) -> usize {
        self.get_all().len()
    }

    fn is_empty(&self) -> bool {
        self.get_all().is_empty()
    }
}

/// Session-scoped store backed by a `Vec`.
///
/// Construct one per session and drop it when the session ends. Mutating
/// calls take `&mut self`; hosts sharing it across threads wrap it in a mutex.
#[derive(Debug, Default)]
pub struct InMemoryNoteStore {
    notes: Vec<Note>,
    next_id: u64,
}

impl InMemoryNoteStore {
    /// Creates an empty store whose first assigned id is `0`.
    pub fn new() -> Self {
        Self::default()
    }

    fn index_of(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }
}

impl NoteStore for InMemoryNoteStore {
    fn get_all(&self) -> &[Note] {
        &self.notes
    }

    fn get(&self, id: NoteId) -> StoreResult<&Note> {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .ok_or(StoreError::OutOfRange(id))
    }

    fn get_id(&self, note: &Note) -> StoreResult<NoteId> {
        match self.index_of(note.id) {
            Some(_) => Ok(note.id),
            None => Err(StoreError::NotFound(note.id)),
        }
    }

    fn add(&mut self, draft: NoteDraft) -> NoteId {
        let id = NoteId::new(self.next_id);
        self.next_id += 1;
        self.notes.push(Note::from_draft(id, draft));
        debug!(
            "event=note_add module=store status=ok id={} len={}",
            id,
            self.notes.len()
        );
        id
    }

    fn update(&mut self, id: NoteId, title: &str, body: &str) -> StoreResult<()> {
        let Some(note) = self.notes.iter_mut().find(|note| note.id == id) else {
            debug!("event=note_update module=store status=error reason=out_of_range id={id}");
            return Err(StoreError::OutOfRange(id));
        };
        note.title = Some(title.to_string());
        note.body = Some(body.to_string());
        debug!("event=note_update module=store status=ok id={id}");
        Ok(())
    }

    fn delete(&mut self, id: NoteId) -> StoreResult<()> {
        let Some(index) = self.index_of(id) else {
            debug!("event=note_delete module=store status=error reason=out_of_range id={id}");
            return Err(StoreError::OutOfRange(id));
        };
        self.notes.remove(index);
        debug!(
            "event=note_delete module=store status=ok id={} position={} len={}",
            id,
            index,
            self.notes.len()
        );
        Ok(())
    }

    fn position(&self, id: NoteId) -> StoreResult<usize> {
        self.index_of(id).ok_or(StoreError::OutOfRange(id))
    }
}
