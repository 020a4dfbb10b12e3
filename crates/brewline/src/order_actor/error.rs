//! Error types for the order ledger.

use crate::model::MenuItemId;
use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order does not exist.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// One or more referenced menu item ids do not resolve in the catalog.
    /// Carries every offending id, not just the first.
    #[error("Invalid menu items: {}", .0.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    InvalidItems(Vec<MenuItemId>),

    /// A search matched no orders. Searches never succeed with an empty
    /// result.
    #[error("No orders matched the search")]
    NoMatches,

    /// An error occurred while communicating with the ledger.
    #[error("Order ledger error: {0}")]
    Ledger(String),
}

impl From<String> for OrderError {
    fn from(msg: String) -> Self {
        OrderError::Ledger(msg)
    }
}
