//! Domain model: menu items, orders, and loyalty accounts, plus the
//! create/update DTOs the ledgers accept. Wire names are camelCase to stay
//! compatible with existing API consumers.

pub mod loyalty;
pub mod menu_item;
pub mod order;

pub use loyalty::{BalanceUpdate, LoyaltyAccount, LoyaltyCreate, LoyaltyNumber};
pub use menu_item::{MenuItem, MenuItemId};
pub use order::{Order, OrderCreate, OrderFilter, OrderId, OrderStatus, OrderUpdate};
