//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate dictionary, scorer and repository into the
//!   process-a-word use case.
//! - Keep CLI/transport layers decoupled from storage details.

pub mod word_service;
