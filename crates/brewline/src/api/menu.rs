//! Menu routes: the listing and the per-item detail view.

use crate::api::{ApiError, ApiState};
use crate::model::{MenuItem, MenuItemId};
use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

/// A menu item joined with its narrative description, for the detail view.
#[derive(Serialize)]
pub struct MenuItemDetail {
    #[serde(flatten)]
    item: MenuItem,
    description: String,
}

/// `GET /menu` — every menu item, without descriptions.
pub async fn list(State(state): State<ApiState>) -> Json<Vec<MenuItem>> {
    Json(state.catalog.items().to_vec())
}

/// `GET /menu/:id` — one item with its description. An id the catalog does
/// not know, or an item without a description, is not found.
pub async fn detail(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> Result<Json<MenuItemDetail>, ApiError> {
    let id = MenuItemId::from(id);
    let (item, description) = state
        .catalog
        .detail(&id)
        .ok_or(ApiError::NotFound("Menu item not found"))?;
    Ok(Json(MenuItemDetail {
        item: item.clone(),
        description: description.to_string(),
    }))
}
