//! Search query validation
//!
//! A tripcode is at most 10 characters from `./0-9A-Za-z`, and the 10th
//! character only ever comes from a 16-symbol subset.

use crate::constants::{TENTH_CHAR_CANDIDATES, TRIPCODE_LENGTH};
use std::fmt;
use thiserror::Error;

/// Query validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// No query string (absent or empty)
    #[error("You didn't provide a query string.")]
    Missing,
    /// Longer than a tripcode
    #[error("Tripcodes cannot be longer than 10 characters.")]
    TooLong(usize),
    /// Character outside the tripcode alphabet
    #[error("Tripcodes can only contain the characters ./0-9A-Za-z")]
    InvalidCharacter(char),
    /// 10th character that no tripcode can end with
    #[error("10th character can only be one of these characters: '.26AEIMQUYcgkosw'")]
    InvalidTenthCharacter(char),
}

/// Validated, immutable search query
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate a query string
    pub fn parse(query: &str) -> Result<Self, QueryError> {
        if query.is_empty() {
            return Err(QueryError::Missing);
        }

        let len = query.len();
        if len > TRIPCODE_LENGTH {
            return Err(QueryError::TooLong(len));
        }

        if let Some(ch) = query.chars().find(|&c| !is_tripcode_char(c)) {
            return Err(QueryError::InvalidCharacter(ch));
        }

        // All characters are ASCII at this point
        let last = query.as_bytes()[len - 1];
        if len == TRIPCODE_LENGTH && !TENTH_CHAR_CANDIDATES.contains(&last) {
            return Err(QueryError::InvalidTenthCharacter(last as char));
        }

        Ok(Self(query.to_owned()))
    }

    /// Validate an optional query argument
    pub fn from_arg(query: Option<&str>) -> Result<Self, QueryError> {
        query.map_or(Err(QueryError::Missing), Self::parse)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Debug for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SearchQuery({:?})", self.0)
    }
}

#[inline]
fn is_tripcode_char(c: char) -> bool {
    matches!(c, '.'..='9' | 'A'..='Z' | 'a'..='z')
}
