//! # Order Ledger
//!
//! The order ledger holds every placed order for the lifetime of the
//! process. Orders are appended by `place`, mutated in place by partial
//! updates, searched with AND-composed filters, and never deleted.
//!
//! ## Structure
//!
//! - [`entity`] - [`LedgerEntry`](ledger_actor::LedgerEntry) implementation
//!   for [`Order`](crate::model::Order): catalog validation and the derived
//!   `total_price`
//! - [`error`] - [`OrderError`] taxonomy for order operations
//! - [`new()`] - factory that seeds the ledger and pairs actor with client
//!
//! ## Dependencies
//!
//! The order ledger validates item ids against the [`Catalog`] and prices
//! orders from it, so the catalog is injected as the actor's context:
//!
//! ```rust,ignore
//! let (actor, client) = order_actor::new(seed_orders);
//! tokio::spawn(actor.run(catalog.clone()));
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::Order;
use ledger_actor::{LedgerActor, LedgerClient};

/// Creates the order ledger actor and its generic client, seeded with
/// `seed`. Fresh order ids continue above the highest seeded id.
pub fn new(seed: Vec<Order>) -> (LedgerActor<Order>, LedgerClient<Order>) {
    let next_id = seed.iter().map(|order| order.id.0).max().unwrap_or(0) + 1;
    LedgerActor::with_entries(32, next_id, seed)
}
