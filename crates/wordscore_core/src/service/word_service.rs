//! Word scoring use-case service.
//!
//! # Responsibility
//! - Normalize and validate candidate words against the dictionary.
//! - Persist first-seen scores through the repository and report outcomes.
//!
//! # Invariants
//! - The returned score is always the stored one; a freshly computed score
//!   never overrides an existing record.
//! - Validation failures are outcomes, not errors; only store failures
//!   surface as `Err`.
//!
//! # See also
//! - docs/architecture/scoring.md

use crate::dictionary::Dictionary;
use crate::model::word::WordRecord;
use crate::repo::word_repo::{RepoResult, WordRepository};
use crate::scoring::score_word;
use log::info;

/// Normalizes raw input for lookup, scoring and storage.
pub fn normalize_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Reason a candidate word was not scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Input is empty or whitespace-only after normalization.
    EmptyInput,
    /// Normalized input is not a dictionary entry.
    NotAWord,
}

impl RejectReason {
    /// Stable human-readable message for boundary layers.
    pub fn message(self) -> &'static str {
        match self {
            Self::EmptyInput => "empty input",
            Self::NotAWord => "not an english word",
        }
    }
}

/// Result of processing one candidate word.
///
/// Constructed once and never mutated; boundary layers map it to their own
/// response shapes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WordOutcome {
    /// Input failed validation; nothing was persisted.
    Rejected(RejectReason),
    /// Word is valid; `score` is the authoritative stored value and
    /// `created` tells whether this call persisted it.
    Scored {
        word: String,
        score: u32,
        created: bool,
    },
}

/// Use-case service orchestrating dictionary, scorer and repository.
///
/// The dictionary is injected at construction and shared read-only for the
/// process lifetime.
pub struct WordService<R: WordRepository> {
    dictionary: Dictionary,
    repo: R,
}

impl<R: WordRepository> WordService<R> {
    /// Creates a service over an injected dictionary and repository.
    pub fn new(dictionary: Dictionary, repo: R) -> Self {
        Self { dictionary, repo }
    }

    /// Processes one candidate word: normalize, validate, score, persist.
    ///
    /// # Contract
    /// - Empty or non-dictionary input yields `WordOutcome::Rejected`.
    /// - The first successful call for a word persists its score; later
    ///   calls return the stored score with `created = false`.
    /// - `Err` means the store failed, never that validation failed.
    pub fn process(&self, raw: &str) -> RepoResult<WordOutcome> {
        let normalized = normalize_word(raw);
        if normalized.is_empty() {
            info!("event=word_rejected module=service reason=empty_input");
            return Ok(WordOutcome::Rejected(RejectReason::EmptyInput));
        }

        if !self.dictionary.contains(&normalized) {
            info!("event=word_rejected module=service reason=not_a_word word={normalized}");
            return Ok(WordOutcome::Rejected(RejectReason::NotAWord));
        }

        let candidate_score = score_word(&normalized);
        let upsert = self.repo.insert_if_absent(&normalized, candidate_score)?;
        info!(
            "event=word_scored module=service status=ok word={} score={} created={}",
            upsert.record.word, upsert.record.score, upsert.created
        );

        Ok(WordOutcome::Scored {
            word: upsert.record.word,
            score: upsert.record.score,
            created: upsert.created,
        })
    }

    /// Lists all scored words ordered by score descending.
    pub fn ranked_words(&self) -> RepoResult<Vec<WordRecord>> {
        self.repo.list_ranked()
    }

    /// Returns the injected dictionary.
    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }
}
