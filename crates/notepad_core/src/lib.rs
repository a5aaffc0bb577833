//! Core domain logic for the session notepad.
//! This crate is the single source of truth for note identity and ranking.

pub mod logging;
pub mod model;
pub mod search;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{Note, NoteDraft, NoteId};
pub use search::ranker::{rank, rank_query, SearchHit, SearchQuery};
pub use service::note_service::{
    derive_preview, NoteCard, NoteForm, NoteService, NoteServiceError,
};
pub use store::note_store::{InMemoryNoteStore, NoteStore, StoreError, StoreResult};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
