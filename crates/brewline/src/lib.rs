//! # Brewline
//!
//! An in-memory order-management service for a coffee shop: browse the
//! menu, place and update orders, manage loyalty-account balances. State
//! lives only in memory for the process lifetime; each ledger is owned by
//! its own actor task (see the `ledger-actor` crate).
//!
//! ## Module map
//!
//! - [`model`]: domain types (menu items, orders, loyalty accounts) and DTOs
//! - [`catalog`]: immutable menu reference data, shared as an `Arc`
//! - [`order_actor`] / [`loyalty_actor`]: the two ledgers
//! - [`clients`]: domain-vocabulary wrappers over the ledger clients
//! - [`validate`]: per-operation payload schemas with aggregated errors
//! - [`api`]: the axum gateway mapping routes to operations
//! - [`lifecycle`]: [`CafeSystem`](lifecycle::CafeSystem) startup/shutdown
//! - [`seed`]: the initial-state shape and the demo data

pub mod api;
pub mod catalog;
pub mod clients;
pub mod lifecycle;
pub mod loyalty_actor;
pub mod model;
pub mod order_actor;
pub mod seed;
pub mod validate;
