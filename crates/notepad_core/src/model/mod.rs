//! Domain model for session notes.
//!
//! # Responsibility
//! - Define the note record and the draft shape used by the "new note" flow.
//!
//! # Invariants
//! - Every stored note carries a `NoteId` assigned by its store.
//! - Drafts carry no identity until they are added to a store.

pub mod note;
