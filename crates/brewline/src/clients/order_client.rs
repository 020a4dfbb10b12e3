//! # Order Client
//!
//! Provides a high-level API for interacting with the order ledger. It
//! wraps a `LedgerClient<Order>` and translates framework errors back into
//! the order taxonomy.

use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use ledger_actor::{EntryClient, LedgerClient, LedgerError};
use tracing::{debug, instrument};

/// Client for interacting with the order ledger.
///
/// Item validation and price computation happen in the order entry's
/// `on_create`/`on_update` hooks; this client's job is the error mapping —
/// in particular recovering a structured [`OrderError`] (with its offending
/// item ids) from the boxed form the framework carries.
#[derive(Clone)]
pub struct OrderClient {
    inner: LedgerClient<Order>,
}

impl OrderClient {
    pub fn new(inner: LedgerClient<Order>) -> Self {
        Self { inner }
    }

    /// Place a new order. Returns the stored order with its assigned id and
    /// computed total.
    #[instrument(skip(self, params))]
    pub async fn place(&self, params: OrderCreate) -> Result<Order, OrderError> {
        debug!(?params, "place called");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Apply a partial update to an existing order.
    #[instrument(skip(self, update))]
    pub async fn update_order(
        &self,
        id: OrderId,
        update: OrderUpdate,
    ) -> Result<Order, OrderError> {
        debug!(%id, ?update, "update_order called");
        self.inner
            .update(id, update)
            .await
            .map_err(Self::map_error)
    }

    /// Search the ledger. Supplied filters must all match; zero matches is
    /// an error, never an empty success. Results are sorted by order id so
    /// responses do not depend on store iteration order.
    #[instrument(skip(self))]
    pub async fn search(&self, filter: OrderFilter) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        let mut orders = self.inner.query(filter).await.map_err(Self::map_error)?;
        if orders.is_empty() {
            return Err(OrderError::NoMatches);
        }
        orders.sort_by_key(|order| order.id);
        Ok(orders)
    }
}

#[async_trait]
impl EntryClient<Order> for OrderClient {
    type Error = OrderError;

    fn inner(&self) -> &LedgerClient<Order> {
        &self.inner
    }

    fn map_error(e: LedgerError) -> OrderError {
        match e {
            LedgerError::NotFound(id) => OrderError::NotFound(id),
            LedgerError::EntryError(inner) => match inner.downcast::<OrderError>() {
                Ok(err) => *err,
                Err(other) => OrderError::Ledger(other.to_string()),
            },
            other => OrderError::Ledger(other.to_string()),
        }
    }
}
