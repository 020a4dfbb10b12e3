//! # LedgerEntry Trait
//!
//! The `LedgerEntry` trait defines the contract every ledger-managed resource
//! (orders, loyalty accounts, …) must implement so the generic [`LedgerActor`]
//! can host it. It specifies associated types for ids, DTOs, query filters,
//! context, and errors, and provides the lifecycle hooks (`on_create`,
//! `on_update`) where the domain's validation and derived-value logic lives.
//!
//! [`LedgerActor`]: crate::LedgerActor

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any entry type must implement to be managed by a `LedgerActor`.
///
/// # Architecture Note
/// By defining one contract that all ledger entries satisfy, the message loop
/// in [`LedgerActor`](crate::LedgerActor) is written *once* and reused for
/// every ledger in the system. Associated types keep the whole thing
/// type-safe: an order ledger only ever accepts order payloads.
///
/// # Id Assignment
/// Ledgers differ in how entries get their identity. Orders take a fresh
/// server-generated id; loyalty accounts are keyed by a caller-supplied
/// loyalty number. [`LedgerEntry::assign_id`] covers both: it receives the
/// ledger's id counter *and* the create payload, and each entry type decides
/// which to use. The actor rejects the create when the resulting id is
/// already present, which is how natural-key ledgers get their uniqueness
/// guarantee.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await other parts of the
/// system. The `Context` type is injected into every hook at `run()` time
/// rather than at construction ("late binding"), so a ledger can depend on
/// shared reference data or on other clients without circular wiring.
#[async_trait]
pub trait LedgerEntry: Clone + Send + Sync + 'static {
    /// The unique identifier for this entry (e.g. a numeric order id or a
    /// loyalty number).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new entry (DTO).
    type Create: Send + Sync + Debug;

    /// The data describing a partial update. Absent fields leave the entry
    /// untouched; how "absent" is modelled (usually `Option`) is up to the
    /// entry type's `on_update`.
    type Update: Send + Sync + Debug;

    /// The filter type accepted by ledger-wide queries.
    type Filter: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the hooks.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entry.
    /// Must implement `std::error::Error` so the framework can box it and
    /// clients can downcast it back to the concrete type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Decide the id for a new entry: either the ledger's `next` counter
    /// value (generated ids) or a natural key taken from `params`.
    fn assign_id(next: u32, params: &Self::Create) -> Self::Id;

    /// The id this entry is stored under.
    fn id(&self) -> &Self::Id;

    /// Construct the full entry from the id and the create payload.
    /// Called synchronously before `on_create`.
    fn from_create(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle hooks (async) ---

    /// Called after the entry is constructed but before it is stored.
    /// This is where cross-entity validation and derived values belong;
    /// returning an error abandons the create and nothing is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Apply a partial update in place. Returning an error must leave the
    /// entry unchanged; the actor hands callers the post-hook state.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    // --- Query hook (sync) ---

    /// Whether this entry satisfies `filter`. Ledgers that never get
    /// queried can rely on the default.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }
}
