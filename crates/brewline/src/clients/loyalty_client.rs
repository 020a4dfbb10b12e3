//! # Loyalty Client
//!
//! Provides a high-level API for interacting with the loyalty ledger. It
//! wraps a `LedgerClient<LoyaltyAccount>` and exposes the account
//! operations in domain vocabulary.

use crate::loyalty_actor::LoyaltyError;
use crate::model::{BalanceUpdate, LoyaltyAccount, LoyaltyCreate, LoyaltyNumber};
use async_trait::async_trait;
use ledger_actor::{EntryClient, LedgerClient, LedgerError};
use tracing::{debug, instrument};

/// Client for interacting with the loyalty ledger.
#[derive(Clone)]
pub struct LoyaltyClient {
    inner: LedgerClient<LoyaltyAccount>,
}

impl LoyaltyClient {
    pub fn new(inner: LedgerClient<LoyaltyAccount>) -> Self {
        Self { inner }
    }

    /// Register a new account. A loyalty number that is already registered
    /// fails with [`LoyaltyError::AlreadyExists`] and leaves the existing
    /// account untouched.
    #[instrument(skip(self, params))]
    pub async fn create_account(
        &self,
        params: LoyaltyCreate,
    ) -> Result<LoyaltyAccount, LoyaltyError> {
        debug!(?params, "create_account called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Current balance of the account, or NotFound for an unregistered
    /// number.
    #[instrument(skip(self))]
    pub async fn balance_of(&self, number: LoyaltyNumber) -> Result<f64, LoyaltyError> {
        self.get(number.clone())
            .await?
            .map(|account| account.balance)
            .ok_or_else(|| LoyaltyError::NotFound(number.to_string()))
    }

    /// Overwrite the account's balance. Negative balances are rejected and
    /// the stored balance stays unchanged.
    #[instrument(skip(self))]
    pub async fn set_balance(
        &self,
        number: LoyaltyNumber,
        balance: f64,
    ) -> Result<LoyaltyAccount, LoyaltyError> {
        debug!(balance, "set_balance called");
        self.inner
            .update(number, BalanceUpdate { balance })
            .await
            .map_err(Self::map_error)
    }
}

#[async_trait]
impl EntryClient<LoyaltyAccount> for LoyaltyClient {
    type Error = LoyaltyError;

    fn inner(&self) -> &LedgerClient<LoyaltyAccount> {
        &self.inner
    }

    fn map_error(e: LedgerError) -> LoyaltyError {
        match e {
            LedgerError::NotFound(number) => LoyaltyError::NotFound(number),
            LedgerError::AlreadyExists(number) => LoyaltyError::AlreadyExists(number),
            LedgerError::EntryError(inner) => match inner.downcast::<LoyaltyError>() {
                Ok(err) => *err,
                Err(other) => LoyaltyError::Ledger(other.to_string()),
            },
            other => LoyaltyError::Ledger(other.to_string()),
        }
    }
}
