// SPDX-License-Identifier: MIT

//! Literal substring search over the searchable view with highlight spans.

use regex::RegexBuilder;
use serde::Serialize;

use crate::models::TableRow;
use crate::services::collection::RecordCollection;

/// One matching record: its table-row projection plus the byte-offset
/// `[start, end)` spans of every term occurrence within `row.body`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchMatch {
    pub row: TableRow,
    pub spans: Vec<(usize, usize)>,
}

/// Result of one search run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResults {
    /// The trimmed term that was searched
    pub term: String,
    pub count: usize,
    pub matches: Vec<SearchMatch>,
}

impl SearchResults {
    fn empty(term: &str) -> Self {
        Self {
            term: term.to_string(),
            count: 0,
            matches: Vec::new(),
        }
    }
}

/// Search the collection's searchable view for a literal term.
///
/// The term is trimmed and regex-escaped, then matched case-insensitively
/// against each record's user commentary when present, otherwise its raw
/// text. An empty or whitespace-only term is a defined empty result, not
/// an error. Zero matches is likewise a valid empty result.
pub fn search(collection: &RecordCollection, raw_term: &str) -> SearchResults {
    let term = raw_term.trim();
    if term.is_empty() {
        return SearchResults::empty(term);
    }

    let pattern = regex::escape(term);
    let re = match RegexBuilder::new(&pattern).case_insensitive(true).build() {
        Ok(re) => re,
        Err(err) => {
            // Unreachable for an escaped literal, but never fatal.
            tracing::warn!(term, error = %err, "Search term failed to compile");
            return SearchResults::empty(term);
        }
    };

    let mut matches = Vec::new();
    for record in collection.searchable() {
        let haystack = record.haystack();
        let spans: Vec<(usize, usize)> = re
            .find_iter(haystack)
            .map(|m| (m.start(), m.end()))
            .collect();
        if !spans.is_empty() {
            matches.push(SearchMatch {
                row: record.table_row(),
                spans,
            });
        }
    }

    SearchResults {
        term: term.to_string(),
        count: matches.len(),
        matches,
    }
}
