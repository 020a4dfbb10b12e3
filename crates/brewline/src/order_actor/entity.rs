//! [`LedgerEntry`] implementation for [`Order`].
//!
//! This is where the order ledger's cross-entity logic lives: every item id
//! must resolve in the catalog (all offenders reported at once), and
//! `total_price` is derived from the resolved prices whenever the item list
//! is accepted — on create and on every update that supplies `items`.

use crate::catalog::Catalog;
use crate::model::{Order, OrderCreate, OrderFilter, OrderId, OrderUpdate};
use crate::order_actor::OrderError;
use async_trait::async_trait;
use ledger_actor::LedgerEntry;
use std::sync::Arc;

#[async_trait]
impl LedgerEntry for Order {
    type Id = OrderId;
    type Create = OrderCreate;
    type Update = OrderUpdate;
    type Filter = OrderFilter;
    type Context = Arc<Catalog>;
    type Error = OrderError;

    fn assign_id(next: u32, _params: &OrderCreate) -> OrderId {
        OrderId(next)
    }

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create(id: OrderId, params: OrderCreate) -> Result<Self, OrderError> {
        Ok(Self {
            id,
            items: params.items,
            loyalty_number: params.loyalty_number,
            name: params.name,
            // Derived in on_create once the catalog is at hand
            total_price: 0.0,
            status: params.status,
        })
    }

    async fn on_create(&mut self, catalog: &Arc<Catalog>) -> Result<(), OrderError> {
        self.total_price = catalog
            .price_of(&self.items)
            .map_err(OrderError::InvalidItems)?;
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: OrderUpdate,
        catalog: &Arc<Catalog>,
    ) -> Result<(), OrderError> {
        // Validate the new item list before touching anything, so a failed
        // update leaves the order exactly as it was.
        if let Some(items) = update.items {
            let total = catalog
                .price_of(&items)
                .map_err(OrderError::InvalidItems)?;
            self.items = items;
            self.total_price = total;
        }
        if let Some(loyalty_number) = update.loyalty_number {
            self.loyalty_number = loyalty_number;
        }
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        Ok(())
    }

    fn matches(&self, filter: &OrderFilter) -> bool {
        filter
            .name
            .as_deref()
            .is_none_or(|name| self.name == name)
            && filter.order_id.is_none_or(|id| self.id == id)
            && filter
                .loyalty_number
                .as_ref()
                .is_none_or(|number| &self.loyalty_number == number)
    }
}
