//! Tripcode matching
//!
//! Substring search of the query inside a 10-byte tripcode. Case-agnostic
//! mode folds ASCII letters to lowercase on both sides before comparing.

use crate::constants::TRIPCODE_LENGTH;
use crate::domain::query::SearchQuery;
use crate::domain::tripcode::Tripcode;

/// Matching mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchMode {
    /// Benchmark mode, nothing ever matches
    NoQuery,
    /// Exact byte-wise substring
    CaseSensitive,
    /// Substring after ASCII lowercase folding of both sides
    CaseAgnostic,
}

/// Evaluate a single tripcode against a query
pub fn matches(mode: MatchMode, query: &SearchQuery, tripcode: &Tripcode) -> bool {
    match mode {
        MatchMode::NoQuery => false,
        MatchMode::CaseSensitive => contains(tripcode.as_bytes(), query.as_bytes()),
        MatchMode::CaseAgnostic => {
            let haystack = fold(tripcode.as_bytes());
            let needle = query.as_str().to_ascii_lowercase();
            contains(&haystack, needle.as_bytes())
        }
    }
}

/// Pre-folded matcher used in the search loop
///
/// The query is folded once up front so each iteration only folds the
/// 10-byte tripcode on the stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Matcher {
    mode: MatchMode,
    query: Option<SearchQuery>,
    needle: Vec<u8>,
}

impl Matcher {
    /// Matcher that never matches
    pub fn benchmark() -> Self {
        Self {
            mode: MatchMode::NoQuery,
            query: None,
            needle: Vec::new(),
        }
    }

    /// Exact substring matcher
    pub fn case_sensitive(query: SearchQuery) -> Self {
        Self {
            mode: MatchMode::CaseSensitive,
            needle: query.as_bytes().to_vec(),
            query: Some(query),
        }
    }

    /// Case-folded substring matcher
    pub fn case_agnostic(query: SearchQuery) -> Self {
        Self {
            mode: MatchMode::CaseAgnostic,
            needle: query.as_bytes().to_ascii_lowercase(),
            query: Some(query),
        }
    }

    pub fn mode(&self) -> MatchMode {
        self.mode
    }

    pub fn query(&self) -> Option<&SearchQuery> {
        self.query.as_ref()
    }

    /// Test a tripcode
    #[inline]
    pub fn is_match(&self, tripcode: &Tripcode) -> bool {
        match self.mode {
            MatchMode::NoQuery => false,
            MatchMode::CaseSensitive => contains(tripcode.as_bytes(), &self.needle),
            MatchMode::CaseAgnostic => contains(&fold(tripcode.as_bytes()), &self.needle),
        }
    }
}

#[inline]
fn fold(bytes: &[u8; TRIPCODE_LENGTH]) -> [u8; TRIPCODE_LENGTH] {
    let mut folded = *bytes;
    folded.make_ascii_lowercase();
    folded
}

#[inline]
fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    if needle.is_empty() {
        return true;
    }
    if needle.len() > haystack.len() {
        return false;
    }
    haystack.windows(needle.len()).any(|w| w == needle)
}
