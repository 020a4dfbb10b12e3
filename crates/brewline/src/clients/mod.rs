//! Domain-specific clients over the generic ledger clients. The rest of the
//! application (and the HTTP gateway in particular) talks to these, never to
//! raw message passing.

pub mod loyalty_client;
pub mod order_client;

pub use loyalty_client::LoyaltyClient;
pub use order_client::OrderClient;
