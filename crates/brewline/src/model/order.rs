use crate::model::{LoyaltyNumber, MenuItemId};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::Display;
use std::str::FromStr;

/// Identifier for orders. Generated sequentially by the order ledger but
/// carried as a decimal string on the wire (`"1"`, `"2"`, …), matching the
/// ids clients already hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for OrderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl Serialize for OrderId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_string())
    }
}

impl<'de> Deserialize<'de> for OrderId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(D::Error::custom)
    }
}

/// Order lifecycle status. No workflow is enforced: any status may
/// overwrite any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    #[default]
    Pending,
    Completed,
}

impl OrderStatus {
    /// Parse the wire form ("pending" / "completed").
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(Self::Pending),
            "completed" => Some(Self::Completed),
            _ => None,
        }
    }
}

/// A placed order.
///
/// `total_price` is derived: it always equals the sum of the current catalog
/// prices of `items`, recomputed whenever `items` changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub items: Vec<MenuItemId>,
    pub loyalty_number: LoyaltyNumber,
    pub name: String,
    pub total_price: f64,
    pub status: OrderStatus,
}

/// Payload for placing a new order, as produced by the request validator.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub items: Vec<MenuItemId>,
    pub loyalty_number: LoyaltyNumber,
    pub name: String,
    pub status: OrderStatus,
}

/// Partial update for an order: only supplied fields are applied.
///
/// A supplied `items` list re-validates against the catalog and recomputes
/// `total_price`; the other fields overwrite verbatim.
#[derive(Debug, Clone, Default)]
pub struct OrderUpdate {
    pub items: Option<Vec<MenuItemId>>,
    pub loyalty_number: Option<LoyaltyNumber>,
    pub name: Option<String>,
    pub status: Option<OrderStatus>,
}

/// Search filter over the order ledger. Supplied fields must all match
/// (logical AND); omitted fields constrain nothing.
#[derive(Debug, Clone, Default)]
pub struct OrderFilter {
    pub name: Option<String>,
    pub order_id: Option<OrderId>,
    pub loyalty_number: Option<LoyaltyNumber>,
}
