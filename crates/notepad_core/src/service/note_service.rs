//! Note use-case service.
//!
//! # Responsibility
//! - Open notes for editing or creation and submit the result.
//! - Re-run the active filter after deletes.
//! - Project ranked notes into list cards with a plain-text preview.
//!
//! # Invariants
//! - Submitting an edit form never changes list order or other ids.
//! - Card lists follow `search::rank` ordering exactly.

use crate::model::note::{NoteDraft, NoteId};
use crate::search::ranker::{rank, SearchHit};
use crate::store::note_store::{NoteStore, StoreError};
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::error::Error;
use std::fmt::{Display, Formatter};

const PREVIEW_MAX_CHARS: usize = 100;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Service error for note use-cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoteServiceError {
    /// Target note does not exist (stale id after a delete).
    NoteNotFound(NoteId),
    /// Store-level failure.
    Store(StoreError),
}

impl Display for NoteServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoteNotFound(id) => write!(f, "note not found: {id}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for NoteServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::NoteNotFound(_) => None,
        }
    }
}

impl From<StoreError> for NoteServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::OutOfRange(id) => Self::NoteNotFound(id),
            other => Self::Store(other),
        }
    }
}

/// Detail-view form state.
///
/// `id == None` is the "new note" flow; `Some(id)` edits an existing note.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NoteForm {
    pub id: Option<NoteId>,
    pub draft: NoteDraft,
}

impl NoteForm {
    /// Returns whether submitting this form creates a note.
    pub fn is_creating(&self) -> bool {
        self.id.is_none()
    }
}

/// List-view projection of one ranked note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteCard {
    pub id: NoteId,
    /// Current list position, used for link generation.
    pub position: usize,
    pub title: Option<String>,
    /// Whitespace-collapsed body summary.
    pub preview_text: Option<String>,
    pub match_count: usize,
}

/// Note service facade over store implementations.
pub struct NoteService<S: NoteStore> {
    store: S,
}

impl<S: NoteStore> NoteService<S> {
    /// Creates a service owning the provided store.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Consumes the service and returns its store.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Opens the detail form for a new note (`None`) or an existing one.
    pub fn open_note(&self, id: Option<NoteId>) -> Result<NoteForm, NoteServiceError> {
        let Some(id) = id else {
            return Ok(NoteForm::default());
        };
        let note = self.store.get(id)?;
        Ok(NoteForm {
            id: Some(id),
            draft: note.to_draft(),
        })
    }

    /// Saves a detail form: appends on create, updates in place on edit.
    ///
    /// Absent fields on the edit path are stored as empty strings.
    pub fn submit(&mut self, form: NoteForm) -> Result<NoteId, NoteServiceError> {
        match form.id {
            None => Ok(self.store.add(form.draft)),
            Some(id) => {
                let title = form.draft.title.unwrap_or_default();
                let body = form.draft.body.unwrap_or_default();
                self.store.update(id, &title, &body).map_err(|err| {
                    warn!("event=note_submit module=service status=error id={id}");
                    NoteServiceError::from(err)
                })?;
                Ok(id)
            }
        }
    }

    /// Deletes one note and re-runs the list filter with `current_query`.
    pub fn delete_note(
        &mut self,
        id: NoteId,
        current_query: &str,
    ) -> Result<Vec<NoteCard>, NoteServiceError> {
        self.store.delete(id)?;
        debug!("event=note_delete module=service status=ok id={id}");
        Ok(self.search(current_query))
    }

    /// Ranks all notes against `query` and projects them into cards.
    pub fn search(&self, query: &str) -> Vec<NoteCard> {
        rank(self.store.get_all(), query)
            .into_iter()
            .filter_map(|hit| self.to_card(hit))
            .collect()
    }

    fn to_card(&self, hit: SearchHit<'_>) -> Option<NoteCard> {
        let position = self.store.position(hit.note.id).ok()?;
        Some(NoteCard {
            id: hit.note.id,
            position,
            title: hit.note.title.clone(),
            preview_text: derive_preview(hit.note.body.as_deref()),
            match_count: hit.match_count,
        })
    }
}

/// Derives a plain-text list preview from a note body.
///
/// Whitespace runs collapse to one space, the result is trimmed, and at most
/// 100 chars are kept. Blank or absent bodies have no preview.
pub fn derive_preview(body: Option<&str>) -> Option<String> {
    let body = body?;
    let normalized = WHITESPACE_RE.replace_all(body, " ");
    let trimmed = normalized.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.chars().take(PREVIEW_MAX_CHARS).collect())
    }
}
