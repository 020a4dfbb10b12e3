use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The unique identifier of a customer's loyalty account.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LoyaltyNumber(pub String);

impl LoyaltyNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }
}

impl Display for LoyaltyNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for LoyaltyNumber {
    fn from(number: &str) -> Self {
        Self(number.to_string())
    }
}

impl From<String> for LoyaltyNumber {
    fn from(number: String) -> Self {
        Self(number)
    }
}

/// A loyalty account. Keyed by its loyalty number; the balance only ever
/// changes through an explicit overwrite.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyAccount {
    pub name: String,
    pub loyalty_number: LoyaltyNumber,
    pub balance: f64,
}

/// Payload for registering a new loyalty account.
#[derive(Debug, Clone)]
pub struct LoyaltyCreate {
    pub name: String,
    pub loyalty_number: LoyaltyNumber,
    pub balance: f64,
}

/// Balance overwrite for an existing account.
#[derive(Debug, Clone, Copy)]
pub struct BalanceUpdate {
    pub balance: f64,
}
