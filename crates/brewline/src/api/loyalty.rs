//! Loyalty routes: registration, balance read, balance overwrite.

use crate::api::{ApiError, ApiState};
use crate::model::LoyaltyNumber;
use crate::validate;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

/// `GET /loyalty/:loyaltyNumber` — the account's current balance.
pub async fn balance(
    State(state): State<ApiState>,
    Path(number): Path<String>,
) -> Result<Json<Value>, ApiError> {
    let balance = state.loyalty.balance_of(LoyaltyNumber(number)).await?;
    Ok(Json(json!({ "balance": balance })))
}

/// `POST /loyalty` — register a new account. Duplicate numbers are a 400;
/// creation is the one operation that is not safe to blindly resubmit.
pub async fn create(
    State(state): State<ApiState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Value>), ApiError> {
    let draft = validate::loyalty_create(&payload)?;
    let account = state.loyalty.create_account(draft).await?;
    Ok((
        StatusCode::CREATED,
        Json(json!({ "message": "Loyalty account created", "loyaltyAccount": account })),
    ))
}

/// `PUT /loyalty/:loyaltyNumber` — overwrite the balance.
pub async fn set_balance(
    State(state): State<ApiState>,
    Path(number): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let update = validate::loyalty_balance(&payload)?;
    let account = state
        .loyalty
        .set_balance(LoyaltyNumber(number), update.balance)
        .await?;
    Ok(Json(json!({
        "message": "Loyalty account balance updated",
        "loyaltyAccount": account,
    })))
}
