//! # Ledger Actor
//!
//! This crate provides the building blocks for in-memory **ledgers**:
//! append/update collections of domain entities owned by a single actor
//! task. It pairs a resource-oriented operation set (Create, Get, Update,
//! Query) with the Actor Model so each ledger gets isolated state and
//! at-most-one-writer-at-a-time semantics without any locking.
//!
//! ## Why a ledger actor?
//!
//! The systems this crate serves keep their state in process memory for the
//! process lifetime: collections that are appended to and updated in place,
//! never deleted, and consulted by request handlers. Two properties matter:
//!
//! - **Exclusive writes**: every mutation on a ledger must complete before
//!   the next request touches it, so failed validation can never leave a
//!   half-applied change behind.
//! - **Shared reads**: many tasks (HTTP handlers, other ledgers) need cheap
//!   handles to the same ledger.
//!
//! Running each ledger in its own Tokio task and funneling every request
//! through one mpsc channel gives both: messages are processed sequentially
//! within a ledger (no `Mutex` needed), while different ledgers run in
//! parallel and clients clone freely.
//!
//! ## Architecture Overview
//!
//! The crate separates concerns into three layers:
//!
//! 1. **Entry layer** ([`LedgerEntry`]) — your domain model and its hooks
//! 2. **Runtime layer** ([`LedgerActor`]) — message processing and state
//! 3. **Interface layer** ([`LedgerClient`]) — type-safe communication
//!
//! Business logic is written once, in the entry trait; the framework owns
//! the channels, the message loop, and the error plumbing.
//!
//! ## Core Abstractions
//!
//! ### [`LedgerEntry`] — the business logic
//!
//! Define what a ledger stores and how it behaves:
//!
//! ```rust
//! use ledger_actor::{LedgerActor, LedgerClient, LedgerEntry};
//! use async_trait::async_trait;
//!
//! // 1. Define the entry
//! #[derive(Clone, Debug)]
//! struct Tab {
//!     id: u32,
//!     owner: String,
//! }
//!
//! #[derive(Debug)] struct TabCreate { owner: String }
//! #[derive(Debug)] struct TabPatch { owner: Option<String> }
//! #[derive(Debug, thiserror::Error)]
//! #[error("tab error")]
//! struct TabError;
//!
//! #[async_trait]
//! impl LedgerEntry for Tab {
//!     type Id = u32;
//!     type Create = TabCreate;
//!     type Update = TabPatch;
//!     type Filter = ();
//!     type Context = ();
//!     type Error = TabError;
//!
//!     fn assign_id(next: u32, _: &TabCreate) -> u32 { next }
//!     fn id(&self) -> &u32 { &self.id }
//!
//!     fn from_create(id: u32, params: TabCreate) -> Result<Self, TabError> {
//!         Ok(Self { id, owner: params.owner })
//!     }
//!
//!     async fn on_update(&mut self, patch: TabPatch, _: &()) -> Result<(), TabError> {
//!         if let Some(owner) = patch.owner { self.owner = owner; }
//!         Ok(())
//!     }
//! }
//!
//! // 2. Use the ledger
//! #[tokio::main]
//! async fn main() {
//!     let (actor, client) = LedgerActor::<Tab>::new(10);
//!     tokio::spawn(actor.run(()));
//!
//!     let tab = client.create(TabCreate { owner: "Ines".into() }).await.unwrap();
//!     let fetched = client.get(tab.id).await.unwrap().unwrap();
//!     assert_eq!(fetched.owner, "Ines");
//! }
//! ```
//!
//! ## Id Assignment & Uniqueness
//!
//! [`LedgerEntry::assign_id`] receives the ledger's counter and the create
//! payload, so a ledger either generates ids (return the counter) or uses a
//! natural key (return a field of the payload). The actor rejects a create
//! whose id is already present with [`LedgerError::AlreadyExists`] — for
//! natural-key ledgers that is the duplicate-registration check.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run()`, not at
//! construction. A ledger whose entries validate against shared reference
//! data declares it as `Context` and receives it in every hook:
//!
//! ```rust,ignore
//! // No dependencies
//! impl LedgerEntry for LoyaltyAccount {
//!     type Context = ();
//! }
//!
//! // Validates against the catalog on create/update
//! impl LedgerEntry for Order {
//!     type Context = Arc<Catalog>;
//! }
//!
//! tokio::spawn(loyalty_actor.run(()));
//! tokio::spawn(order_actor.run(catalog.clone()));
//! ```
//!
//! ## Seeding
//!
//! [`LedgerActor::with_entries`] boots a ledger from seed data and sets the
//! id counter, so a process can start with pre-existing orders or accounts
//! and keep generating fresh ids above them.
//!
//! ## Testing
//!
//! The [`mock`] module provides [`MockLedger`](mock::MockLedger), a drop-in
//! client that answers from queued expectations — see its docs for the full
//! testing guide.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::LedgerActor;
pub use client::LedgerClient;
pub use client_trait::EntryClient;
pub use entity::LedgerEntry;
pub use error::LedgerError;
pub use message::{LedgerRequest, Response};
