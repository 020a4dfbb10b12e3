//! # EntryClient Trait
//!
//! Provides a common interface for domain-specific clients, adding a default
//! `get` built on top of the generic `LedgerClient`.

use crate::{LedgerClient, LedgerEntry, LedgerError};
use async_trait::async_trait;

/// Trait for domain clients to inherit the standard read operation.
///
/// Domain clients wrap a [`LedgerClient`] to expose operation names from
/// their own vocabulary (`place`, `set_balance`, …) and errors from their
/// own taxonomy. The shared `get` only needs to know how to reach the inner
/// client and how to translate framework errors, so it lives here.
///
/// # Example
///
/// ```rust
/// use ledger_actor::{EntryClient, LedgerClient, LedgerEntry, LedgerError};
/// use async_trait::async_trait;
///
/// // 1. Define an entry
/// #[derive(Clone, Debug)]
/// struct Tab { id: u32 }
/// #[derive(Debug)] struct TabCreate;
/// #[derive(Debug)] struct TabPatch;
/// #[derive(Debug, thiserror::Error)]
/// #[error("tab error")]
/// struct TabError;
///
/// impl From<String> for TabError {
///     fn from(_: String) -> Self { TabError }
/// }
///
/// #[async_trait]
/// impl LedgerEntry for Tab {
///     type Id = u32;
///     type Create = TabCreate;
///     type Update = TabPatch;
///     type Filter = ();
///     type Context = ();
///     type Error = TabError;
///
///     fn assign_id(next: u32, _: &TabCreate) -> u32 { next }
///     fn id(&self) -> &u32 { &self.id }
///     fn from_create(id: u32, _: TabCreate) -> Result<Self, TabError> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: TabPatch, _: &()) -> Result<(), TabError> { Ok(()) }
/// }
///
/// // 2. Define the domain wrapper
/// struct TabClient {
///     inner: LedgerClient<Tab>,
/// }
///
/// // 3. Implement EntryClient
/// #[async_trait]
/// impl EntryClient<Tab> for TabClient {
///     type Error = TabError;
///
///     fn inner(&self) -> &LedgerClient<Tab> {
///         &self.inner
///     }
///
///     fn map_error(e: LedgerError) -> Self::Error {
///         TabError
///     }
/// }
///
/// // 4. Usage: get() comes for free
/// async fn usage(client: TabClient) {
///     let _ = client.get(1).await;
/// }
/// ```
#[async_trait]
pub trait EntryClient<T: LedgerEntry>: Send + Sync {
    /// The domain-specific error type.
    type Error: From<String> + Send + Sync;

    /// Access the inner generic LedgerClient.
    fn inner(&self) -> &LedgerClient<T>;

    /// Map framework errors to the domain error type.
    fn map_error(e: LedgerError) -> Self::Error;

    /// Fetch an entry by id.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }
}
