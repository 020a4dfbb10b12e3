//! # Loyalty Ledger
//!
//! The loyalty ledger holds one account per loyalty number. Accounts are
//! registered explicitly (duplicate numbers rejected), read for their
//! balance, and mutated only by the explicit balance overwrite — placing an
//! order never touches a balance. Accounts are never deleted.
//!
//! ## Structure
//!
//! - [`entity`] - [`LedgerEntry`](ledger_actor::LedgerEntry) implementation
//!   for [`LoyaltyAccount`](crate::model::LoyaltyAccount): natural-key ids
//!   and the non-negative balance guard
//! - [`error`] - [`LoyaltyError`] taxonomy for account operations
//! - [`new()`] - factory that seeds the ledger and pairs actor with client

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::LoyaltyAccount;
use ledger_actor::{LedgerActor, LedgerClient};

/// Creates the loyalty ledger actor and its generic client, seeded with
/// `seed`. Ids are the accounts' loyalty numbers, so the id counter is
/// unused.
pub fn new(seed: Vec<LoyaltyAccount>) -> (LedgerActor<LoyaltyAccount>, LedgerClient<LoyaltyAccount>) {
    LedgerActor::with_entries(32, 1, seed)
}
