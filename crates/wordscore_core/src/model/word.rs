//! Word record domain model.
//!
//! # Responsibility
//! - Define the persisted record for a scored word.
//! - Guard the normalized-key invariant on write paths.
//!
//! # Invariants
//! - `uuid` is store-assigned, stable and never reused for another word.
//! - `word` is the natural key: non-empty, trimmed, lower-case, unique.
//! - `score` and `created_at` are fixed at creation and never mutated.
//!
//! # See also
//! - docs/architecture/data-model.md

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier assigned by the store to every word record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type WordId = Uuid;

/// Persisted record for one scored word.
///
/// The `word` field is the natural key and holds the normalized form only.
/// Serialized field names (`id`, `createdAt`) match the shape exposed to
/// presentation layers by the ranked listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordRecord {
    /// Store-assigned stable ID.
    #[serde(rename = "id")]
    pub uuid: WordId,
    /// Normalized word value, unique across all records.
    pub word: String,
    /// Score computed the first time this word was processed.
    pub score: u32,
    /// Creation timestamp in Unix epoch milliseconds.
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// Violation of the normalized-key contract for persisted words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordValidationError {
    /// Key is empty after normalization would apply.
    EmptyWord,
    /// Key still carries surrounding whitespace or upper-case characters.
    NotNormalized(String),
}

impl Display for WordValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyWord => write!(f, "word key cannot be empty"),
            Self::NotNormalized(word) => {
                write!(f, "word key `{word}` is not trimmed lower-case")
            }
        }
    }
}

impl Error for WordValidationError {}

/// Validates that a word key satisfies the persistence contract.
///
/// Callers normalize before storage; the store never stores a key that is
/// empty, padded with whitespace, or mixed-case.
pub fn validate_key(word: &str) -> Result<(), WordValidationError> {
    if word.is_empty() {
        return Err(WordValidationError::EmptyWord);
    }
    if word.trim() != word || word.chars().any(char::is_uppercase) {
        return Err(WordValidationError::NotNormalized(word.to_string()));
    }
    Ok(())
}
