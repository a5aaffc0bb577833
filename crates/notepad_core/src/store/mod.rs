//! Note store contracts and the in-memory implementation.
//!
//! # Responsibility
//! - Own the note collection for one session.
//! - Return semantic errors (`OutOfRange`, `NotFound`) instead of guessing.
//!
//! # Invariants
//! - Insertion order is the canonical list order.
//! - Positions are dense in `[0, len)`; ids are not.

pub mod note_store;
