//! Initial ledger state, injected once at process start.
//!
//! The shape mirrors the JSON the service has always been seeded with:
//! `menuItems`, `menuItemDescriptionMap`, `orders`, `loyaltyAccounts`. There
//! is no on-disk format; state lives in memory for the process lifetime.

use crate::model::{
    LoyaltyAccount, LoyaltyNumber, MenuItem, MenuItemId, Order, OrderId, OrderStatus,
};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeedData {
    pub menu_items: Vec<MenuItem>,
    pub menu_item_description_map: HashMap<MenuItemId, String>,
    pub orders: Vec<Order>,
    pub loyalty_accounts: Vec<LoyaltyAccount>,
}

impl SeedData {
    /// The demo coffee shop: three drinks with descriptions, two orders,
    /// two loyalty accounts.
    pub fn demo() -> Self {
        Self {
            menu_items: vec![
                MenuItem::new("1", "Espresso", 3.0, "espresso.jpg"),
                MenuItem::new("2", "Latte", 4.0, "latte.jpg"),
                MenuItem::new("3", "Cappuccino", 4.5, "cappuccino.jpg"),
            ],
            menu_item_description_map: HashMap::from([
                (
                    MenuItemId::from("1"),
                    "Espresso is not merely a drink; it is a cultural phenomenon woven into \
                     the very fabric of daily life."
                        .to_string(),
                ),
                (
                    MenuItemId::from("2"),
                    "At its core, the latte is a celebration of craftsmanship. It starts with \
                     a shot or two of robust espresso, extracted with precision so that every \
                     drop carries deep, complex flavors. Steamed milk is then introduced, \
                     transformed into a silky texture that envelops the espresso, and a \
                     delicate layer of frothy milk foam finishes the cup."
                        .to_string(),
                ),
                (
                    MenuItemId::from("3"),
                    "In the grand theater of coffee culture there exists a beverage that \
                     stands as a paragon of balance and artistry: the cappuccino, a blend of \
                     robust espresso, creamy steamed milk, and a crown of velvety foam that \
                     encapsulates the essence of coffee craftsmanship."
                        .to_string(),
                ),
            ]),
            orders: vec![
                Order {
                    id: OrderId(1),
                    items: vec![MenuItemId::from("1")],
                    loyalty_number: LoyaltyNumber::from("123456789"),
                    name: "John".to_string(),
                    total_price: 3.0,
                    status: OrderStatus::Pending,
                },
                Order {
                    id: OrderId(2),
                    items: vec![MenuItemId::from("2")],
                    loyalty_number: LoyaltyNumber::from("987654321"),
                    name: "Jane".to_string(),
                    total_price: 4.0,
                    status: OrderStatus::Completed,
                },
            ],
            loyalty_accounts: vec![
                LoyaltyAccount {
                    name: "John".to_string(),
                    loyalty_number: LoyaltyNumber::from("123456789"),
                    balance: 10.0,
                },
                LoyaltyAccount {
                    name: "Jane".to_string(),
                    loyalty_number: LoyaltyNumber::from("987654321"),
                    balance: 20.0,
                },
            ],
        }
    }
}
