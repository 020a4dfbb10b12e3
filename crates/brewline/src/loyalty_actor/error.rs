//! Error types for the loyalty ledger.

use thiserror::Error;

/// Errors that can occur during loyalty account operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LoyaltyError {
    /// No account is registered under the given loyalty number.
    #[error("Loyalty account not found: {0}")]
    NotFound(String),

    /// An account with the given loyalty number already exists.
    #[error("Loyalty account already exists: {0}")]
    AlreadyExists(String),

    /// A balance overwrite with a negative value was rejected.
    #[error("Balance cannot be negative: {0}")]
    InvalidBalance(f64),

    /// An error occurred while communicating with the ledger.
    #[error("Loyalty ledger error: {0}")]
    Ledger(String),
}

impl From<String> for LoyaltyError {
    fn from(msg: String) -> Self {
        LoyaltyError::Ledger(msg)
    }
}
