//! # Framework Errors
//!
//! This module defines the common error types used throughout the ledger
//! framework. Centralizing them keeps error handling consistent across all
//! ledgers and clients.

/// Errors that can occur within the ledger framework itself.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Ledger closed")]
    ActorClosed,
    #[error("Ledger dropped response channel")]
    ActorDropped,
    #[error("Entry not found: {0}")]
    NotFound(String),
    #[error("Entry already exists: {0}")]
    AlreadyExists(String),
    #[error("Entry error: {0}")]
    EntryError(Box<dyn std::error::Error + Send + Sync>),
}
