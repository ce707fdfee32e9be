//! Word repository contracts and SQLite implementation.
//!
//! # Responsibility
//! - Provide lookup, insert-if-absent and ranked-listing APIs over the
//!   canonical `words` storage.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Write paths must call `validate_key()` before SQL mutations.
//! - Read paths must reject invalid persisted state instead of masking it.
//! - A record's score and timestamp are never updated after creation.
//!
//! # See also
//! - docs/architecture/data-model.md

use crate::db::DbError;
use crate::model::word::{validate_key, WordRecord, WordValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const WORD_SELECT_SQL: &str = "SELECT
    uuid,
    word,
    score,
    created_at
FROM words";

pub type RepoResult<T> = Result<T, RepoError>;

/// Generic repository error for word persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(WordValidationError),
    Db(DbError),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted word data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<WordValidationError> for RepoError {
    fn from(value: WordValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Result of an insert-if-absent call.
///
/// `record` is always the authoritative stored row; `created` tells whether
/// this call made it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpsertOutcome {
    pub record: WordRecord,
    pub created: bool,
}

/// Repository interface for word score persistence.
///
/// All keys are pre-normalized by the caller; the store performs exact
/// matches and no case folding of its own.
pub trait WordRepository {
    /// Returns the record for an exact normalized key, if any.
    fn find_by_word(&self, word: &str) -> RepoResult<Option<WordRecord>>;

    /// Inserts a record for `word` unless one already exists.
    ///
    /// Existing records are returned unchanged with `created = false`; the
    /// stored score wins over the caller-supplied one. Safe under
    /// concurrent invocation for the same key: exactly one caller creates,
    /// the others observe the created record.
    fn insert_if_absent(&self, word: &str, score: u32) -> RepoResult<UpsertOutcome>;

    /// Returns all records ordered by score descending.
    ///
    /// Ties are broken by creation time then ID so repeated reads of an
    /// unchanged store yield the same order.
    fn list_ranked(&self) -> RepoResult<Vec<WordRecord>>;
}

/// SQLite-backed word repository.
pub struct SqliteWordRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteWordRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl WordRepository for SqliteWordRepository<'_> {
    fn find_by_word(&self, word: &str) -> RepoResult<Option<WordRecord>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{WORD_SELECT_SQL} WHERE word = ?1;"))?;

        let mut rows = stmt.query([word])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_word_row(row)?));
        }

        Ok(None)
    }

    fn insert_if_absent(&self, word: &str, score: u32) -> RepoResult<UpsertOutcome> {
        validate_key(word)?;

        // The UNIQUE constraint on `word` makes the duplicate case a no-op
        // instead of an error; the read-back returns whichever row won.
        let uuid = Uuid::new_v4();
        let changed = self.conn.execute(
            "INSERT INTO words (uuid, word, score, created_at)
             VALUES (?1, ?2, ?3, (strftime('%s', 'now') * 1000))
             ON CONFLICT(word) DO NOTHING;",
            params![uuid.to_string(), word, score],
        )?;

        let record = self.find_by_word(word)?.ok_or_else(|| {
            RepoError::InvalidData(format!("word `{word}` missing after insert-if-absent"))
        })?;

        Ok(UpsertOutcome {
            record,
            created: changed == 1,
        })
    }

    fn list_ranked(&self) -> RepoResult<Vec<WordRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "{WORD_SELECT_SQL} ORDER BY score DESC, created_at ASC, uuid ASC;"
        ))?;

        let mut rows = stmt.query([])?;
        let mut records = Vec::new();
        while let Some(row) = rows.next()? {
            records.push(parse_word_row(row)?);
        }

        Ok(records)
    }
}

fn parse_word_row(row: &Row<'_>) -> RepoResult<WordRecord> {
    let uuid_text: String = row.get("uuid")?;
    let uuid = Uuid::parse_str(&uuid_text).map_err(|_| {
        RepoError::InvalidData(format!("invalid uuid value `{uuid_text}` in words.uuid"))
    })?;

    let record = WordRecord {
        uuid,
        word: row.get("word")?,
        score: row.get("score")?,
        created_at: row.get("created_at")?,
    };
    validate_key(&record.word)?;
    Ok(record)
}
