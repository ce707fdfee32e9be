//! Domain model for scored words.
//!
//! # Responsibility
//! - Define the canonical persisted record shape used by core logic.
//!
//! # Invariants
//! - Every record is identified by a stable `WordId`.
//! - Records are immutable after creation; there is no update path.
//!
//! # See also
//! - docs/architecture/data-model.md

pub mod word;
