//! Term-count relevance ranking.
//!
//! # Responsibility
//! - Normalize and tokenize free-text queries.
//! - Rank a note snapshot without mutating it.
//!
//! # Invariants
//! - Ranking is total: any query over any snapshot returns a result.
//! - Ties keep first-occurrence order (terms in query order, notes in store
//!   order), because `slice::sort_by` is stable.
//! - The empty query returns every note with match count 1, in store order.

use crate::model::note::{Note, NoteId};
use log::debug;
use std::collections::HashMap;

/// Parsed search query.
///
/// Terms are the lowercased, trimmed query split on single spaces, with
/// duplicates removed. Consecutive spaces produce empty terms, and an empty
/// term matches every note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
}

impl SearchQuery {
    /// Parses raw query text.
    pub fn parse(raw: &str) -> Self {
        let normalized = raw.to_lowercase();
        let mut terms: Vec<String> = Vec::new();
        for term in normalized.trim().split(' ') {
            if !terms.iter().any(|existing| existing == term) {
                terms.push(term.to_string());
            }
        }
        Self { terms }
    }

    /// Unique terms in first-occurrence order.
    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    /// Returns whether this query keeps every note (it contains an empty term).
    pub fn matches_everything(&self) -> bool {
        self.terms.iter().any(String::is_empty)
    }
}

/// One ranked note.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub note: &'a Note,
    /// Number of distinct query terms this note matched.
    pub match_count: usize,
}

/// Ranks `notes` against raw query text.
pub fn rank<'a>(notes: &'a [Note], query: &str) -> Vec<SearchHit<'a>> {
    rank_query(notes, &SearchQuery::parse(query))
}

/// Ranks `notes` against an already parsed query.
pub fn rank_query<'a>(notes: &'a [Note], query: &SearchQuery) -> Vec<SearchHit<'a>> {
    let mut counts: HashMap<NoteId, usize> = HashMap::new();
    let mut first_seen: Vec<&'a Note> = Vec::new();

    for term in query.terms() {
        for note in notes.iter().filter(|note| note.matches_term(term)) {
            let count = counts.entry(note.id).or_insert(0);
            if *count == 0 {
                first_seen.push(note);
            }
            *count += 1;
        }
    }

    let mut hits = first_seen
        .into_iter()
        .map(|note| SearchHit {
            note,
            match_count: counts.get(&note.id).copied().unwrap_or(0),
        })
        .collect::<Vec<_>>();
    hits.sort_by(|a, b| b.match_count.cmp(&a.match_count));

    debug!(
        "event=search_rank module=search status=ok terms={} notes={} hits={}",
        query.terms().len(),
        notes.len(),
        hits.len()
    );
    hits
}

#[cfg(test)]
mod tests {
    use super::SearchQuery;

    #[test]
    fn parse_lowercases_trims_and_dedups() {
        let query = SearchQuery::parse("  Apple PIE apple ");
        assert_eq!(query.terms(), ["apple", "pie"]);
        assert!(!query.matches_everything());
    }

    #[test]
    fn parse_keeps_empty_terms_from_consecutive_spaces() {
        let query = SearchQuery::parse("a  b");
        assert_eq!(query.terms(), ["a", "", "b"]);
        assert!(query.matches_everything());
    }

    #[test]
    fn parse_of_blank_query_is_single_empty_term() {
        assert_eq!(SearchQuery::parse("").terms(), [""]);
        assert_eq!(SearchQuery::parse("   ").terms(), [""]);
    }
}
