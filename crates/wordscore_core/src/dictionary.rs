//! Immutable word-list membership set.
//!
//! # Responsibility
//! - Load the reference word list once at process start.
//! - Answer case-insensitive membership queries in O(1) expected time.
//!
//! # Invariants
//! - The set is read-only after construction and requires no locking.
//! - A failed load is a startup-fatal error, never a per-request error.
//! - Lookups lower-case the query but never trim it; trimming belongs to
//!   the orchestration layer.

use log::{error, info};
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Case-insensitive membership set over a fixed word list.
///
/// Reference word lists run to hundreds of thousands of entries, so
/// membership is backed by a hash set rather than a scan.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: HashSet<String>,
}

/// Startup-fatal failure while building a [`Dictionary`].
#[derive(Debug)]
pub enum DictionaryError {
    /// Word-list source is missing or unreadable.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl Display for DictionaryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "cannot read word list `{}`: {source}", path.display())
            }
        }
    }
}

impl Error for DictionaryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl Dictionary {
    /// Loads a dictionary from a newline-delimited UTF-8 word list.
    ///
    /// Each line holds one word; empty lines are skipped and every entry is
    /// lower-cased before insertion.
    ///
    /// # Side effects
    /// - Emits `dictionary_load` logging events with entry count and duration.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let started_at = Instant::now();
        info!("event=dictionary_load module=dictionary status=start");

        let raw = std::fs::read_to_string(path).map_err(|source| {
            let err = DictionaryError::Io {
                path: path.to_path_buf(),
                source,
            };
            error!(
                "event=dictionary_load module=dictionary status=error duration_ms={} error={err}",
                started_at.elapsed().as_millis()
            );
            err
        })?;

        let dictionary = Self::from_words(raw.lines());
        info!(
            "event=dictionary_load module=dictionary status=ok entries={} duration_ms={}",
            dictionary.len(),
            started_at.elapsed().as_millis()
        );
        Ok(dictionary)
    }

    /// Builds a dictionary from in-process word values.
    ///
    /// Used by tests and embedded word lists; applies the same lower-casing
    /// and empty-entry filtering as [`Dictionary::load`].
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .filter(|word| !word.as_ref().is_empty())
            .map(|word| word.as_ref().to_lowercase())
            .collect();
        Self { words }
    }

    /// Returns whether `word` is a known dictionary entry.
    ///
    /// The query is lower-cased before lookup. It is NOT trimmed: callers
    /// hand over already-trimmed input.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }

    /// Returns the number of distinct entries.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns whether the dictionary holds no entries.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
