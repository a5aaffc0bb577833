//! Note domain model.
//!
//! # Responsibility
//! - Define the title/body record held by the note store.
//! - Keep identity separate from storage position.
//!
//! # Invariants
//! - `id` is assigned once by the owning store and never reused there.
//! - `title` and `body` may both be absent; readers must not assume either.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier assigned to a note when it enters a store.
///
/// Ids come from a per-store counter, so they survive deletion of other notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Wraps a raw id value.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw id value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl Display for NoteId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for NoteId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Unsaved title/body pair.
///
/// `NoteDraft::default()` is the empty draft shown when a user starts a new
/// note.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteDraft {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl NoteDraft {
    /// Creates a draft with both fields set.
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: Some(body.into()),
        }
    }

    /// Creates a draft with only a title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            body: None,
        }
    }
}

/// Note held by a store.
///
/// Two notes with equal title and body are still distinct entities; compare
/// `id` to test identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identity assigned by the store on insert.
    pub id: NoteId,
    pub title: Option<String>,
    pub body: Option<String>,
}

impl Note {
    /// Builds a stored note from a draft and its assigned id.
    pub fn from_draft(id: NoteId, draft: NoteDraft) -> Self {
        Self {
            id,
            title: draft.title,
            body: draft.body,
        }
    }

    /// Returns an editable copy of the title/body fields.
    pub fn to_draft(&self) -> NoteDraft {
        NoteDraft {
            title: self.title.clone(),
            body: self.body.clone(),
        }
    }

    /// Returns whether the lowercased title or body contains `term`.
    ///
    /// `term` must already be lowercased. The empty term matches every note,
    /// including notes whose fields are both absent.
    pub fn matches_term(&self, term: &str) -> bool {
        if term.is_empty() {
            return true;
        }
        field_contains(self.title.as_deref(), term) || field_contains(self.body.as_deref(), term)
    }
}

fn field_contains(field: Option<&str>, term: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase().contains(term))
}
