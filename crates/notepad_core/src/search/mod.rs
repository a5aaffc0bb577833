//! Multi-term relevance search over session notes.
//!
//! # Responsibility
//! - Filter notes by case-insensitive substring terms.
//! - Order hits by how many distinct terms each note matched.

pub mod ranker;
