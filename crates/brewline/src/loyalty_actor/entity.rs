//! [`LedgerEntry`] implementation for [`LoyaltyAccount`].
//!
//! Loyalty accounts are a natural-key ledger: the loyalty number supplied at
//! registration *is* the id, and the ledger's duplicate check is what makes
//! "create fails with AlreadyExists" hold. The only mutation is the explicit
//! balance overwrite, which rejects negative values and leaves the stored
//! balance untouched when it does.

use crate::loyalty_actor::LoyaltyError;
use crate::model::{BalanceUpdate, LoyaltyAccount, LoyaltyCreate, LoyaltyNumber};
use async_trait::async_trait;
use ledger_actor::LedgerEntry;

#[async_trait]
impl LedgerEntry for LoyaltyAccount {
    type Id = LoyaltyNumber;
    type Create = LoyaltyCreate;
    type Update = BalanceUpdate;
    type Filter = ();
    type Context = ();
    type Error = LoyaltyError;

    fn assign_id(_next: u32, params: &LoyaltyCreate) -> LoyaltyNumber {
        params.loyalty_number.clone()
    }

    fn id(&self) -> &LoyaltyNumber {
        &self.loyalty_number
    }

    fn from_create(id: LoyaltyNumber, params: LoyaltyCreate) -> Result<Self, LoyaltyError> {
        Ok(Self {
            name: params.name,
            loyalty_number: id,
            balance: params.balance,
        })
    }

    async fn on_update(&mut self, update: BalanceUpdate, _ctx: &()) -> Result<(), LoyaltyError> {
        if update.balance < 0.0 {
            return Err(LoyaltyError::InvalidBalance(update.balance));
        }
        self.balance = update.balance;
        Ok(())
    }
}
