//! Order routes: placement, partial update, and search.

use crate::api::{ApiError, ApiState};
use crate::model::{LoyaltyNumber, Order, OrderFilter, OrderId};
use crate::validate;
use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    name: Option<String>,
    order_id: Option<String>,
    loyalty_number: Option<String>,
}

/// `GET /order/search` — every order matching all supplied filters.
/// Zero matches is a 404, never an empty 200.
pub async fn search(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Order>>, ApiError> {
    // A non-numeric orderId can match nothing, so it short-circuits to the
    // same answer an unmatched search gives.
    let order_id = match params.order_id {
        None => None,
        Some(raw) => Some(
            raw.parse::<OrderId>()
                .map_err(|_| ApiError::NotFound("Order not found"))?,
        ),
    };
    let filter = OrderFilter {
        name: params.name,
        order_id,
        loyalty_number: params.loyalty_number.map(LoyaltyNumber),
    };
    let orders = state.orders.search(filter).await?;
    Ok(Json(orders))
}

/// `POST /order` — validate, place, and echo the stored order.
pub async fn place(
    State(state): State<ApiState>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let draft = validate::order_create(&payload)?;
    let order = state.orders.place(draft).await?;
    Ok(Json(json!({ "message": "Order placed", "order": order })))
}

/// `PUT /order/:orderId` — partial update. Validation failures answer
/// before existence is checked, as they always have.
pub async fn update(
    State(state): State<ApiState>,
    Path(order_id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let patch = validate::order_update(&payload)?;
    let id = order_id
        .parse::<OrderId>()
        .map_err(|_| ApiError::NotFound("Order not found"))?;
    let order = state.orders.update_order(id, patch).await?;
    Ok(Json(json!({ "message": "Order updated", "order": order })))
}
