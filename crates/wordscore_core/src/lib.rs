//! Core domain logic for WordScore.
//! This crate is the single source of truth for scoring and ranking invariants.

pub mod db;
pub mod dictionary;
pub mod logging;
pub mod model;
pub mod repo;
pub mod scoring;
pub mod service;

pub use dictionary::{Dictionary, DictionaryError};
pub use logging::{default_log_level, init_logging};
pub use model::word::{validate_key, WordId, WordRecord, WordValidationError};
pub use repo::word_repo::{
    RepoError, RepoResult, SqliteWordRepository, UpsertOutcome, WordRepository,
};
pub use scoring::score_word;
pub use service::word_service::{normalize_word, RejectReason, WordOutcome, WordService};
