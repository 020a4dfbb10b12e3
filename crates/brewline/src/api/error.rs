//! Error bridge between the domain taxonomy and HTTP responses.
//!
//! Every failure the gateway can surface becomes an [`ApiError`], which
//! implements axum's `IntoResponse`: a status code plus the JSON body the
//! API has always produced (`{errors: [...]}` for validation,
//! `{message, invalidItems}` for unresolvable items, `{message}` for the
//! rest). None of these are fatal — a failed request never crashes the
//! process or leaves a ledger half-mutated, because every failure path runs
//! before or instead of a mutation.

use crate::loyalty_actor::LoyaltyError;
use crate::model::MenuItemId;
use crate::order_actor::OrderError;
use crate::validate::{FieldError, ValidationErrors};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::error;

#[derive(Debug)]
pub enum ApiError {
    /// Malformed payload; carries the complete list of field violations.
    Validation(ValidationErrors),
    /// One or more referenced menu item ids do not resolve.
    InvalidItems(Vec<MenuItemId>),
    /// The addressed resource (or a search) found nothing.
    NotFound(&'static str),
    /// Duplicate loyalty-number registration.
    AlreadyExists(&'static str),
    /// Ledger plumbing failure; not expected in normal operation.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            ApiError::InvalidItems(ids) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "message": "Invalid menu items", "invalidItems": ids })),
            )
                .into_response(),
            ApiError::NotFound(message) => {
                (StatusCode::NOT_FOUND, Json(json!({ "message": message }))).into_response()
            }
            ApiError::AlreadyExists(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "message": message }))).into_response()
            }
            ApiError::Internal(detail) => {
                error!(%detail, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        ApiError::Validation(errors)
    }
}

impl From<OrderError> for ApiError {
    fn from(error: OrderError) -> Self {
        match error {
            OrderError::NotFound(_) | OrderError::NoMatches => {
                ApiError::NotFound("Order not found")
            }
            OrderError::InvalidItems(ids) => ApiError::InvalidItems(ids),
            OrderError::Ledger(detail) => ApiError::Internal(detail),
        }
    }
}

impl From<LoyaltyError> for ApiError {
    fn from(error: LoyaltyError) -> Self {
        match error {
            LoyaltyError::NotFound(_) => ApiError::NotFound("Loyalty account not found"),
            LoyaltyError::AlreadyExists(_) => {
                ApiError::AlreadyExists("Loyalty account already exists")
            }
            // The ledger-level guard answers in the same shape as the
            // validator, whichever of the two catches the negative value.
            LoyaltyError::InvalidBalance(_) => ApiError::Validation(ValidationErrors(vec![
                FieldError {
                    field: "balance".to_string(),
                    message: "Balance cannot be negative".to_string(),
                },
            ])),
            LoyaltyError::Ledger(detail) => ApiError::Internal(detail),
        }
    }
}
