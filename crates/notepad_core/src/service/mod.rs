//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store and search calls into the flows a UI performs.
//! - Keep presentation layers decoupled from store details.

pub mod note_service;
