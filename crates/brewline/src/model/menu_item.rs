use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a menu item, as referenced by order item lists.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(pub String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl Display for MenuItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MenuItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A purchasable menu item. Immutable after the catalog is loaded.
///
/// The long-form description is *not* part of this struct: the menu listing
/// omits it, and the detail view pulls it from the catalog's description
/// map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub image_file_name: String,
}

impl MenuItem {
    pub fn new(
        id: impl Into<MenuItemId>,
        name: impl Into<String>,
        price: f64,
        image_file_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            image_file_name: image_file_name.into(),
        }
    }
}

impl From<String> for MenuItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}
