//! # Request Validator
//!
//! Schema checks for the mutating endpoints: one function per operation
//! kind, each taking the raw JSON payload and returning either a typed,
//! normalized value or the complete list of field-level violations.
//!
//! Two properties matter here:
//!
//! - **Pure**: nothing is read from or written to the ledgers; callers run
//!   validation before any mutation, so a rejected request provably changed
//!   nothing.
//! - **Aggregating**: every violated constraint is reported at once, never
//!   just the first, so clients get one round trip to a complete error
//!   list.
//!
//! Unknown fields are ignored. A body that is not a JSON object is itself a
//! field error.

use crate::model::{
    BalanceUpdate, LoyaltyCreate, LoyaltyNumber, MenuItemId, OrderCreate, OrderStatus, OrderUpdate,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt::Display;

/// A single violated constraint on a named field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Every violation found in one payload. Serializes as a JSON array of
/// `{field, message}` objects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub Vec<FieldError>);

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let rendered: Vec<String> = self
            .0
            .iter()
            .map(|e| format!("{}: {}", e.field, e.message))
            .collect();
        write!(f, "{}", rendered.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Validate a create-order payload.
///
/// Requires `items` (array of strings), `loyaltyNumber` (string), `name`
/// (string); `status` is optional and defaults to pending. Whether the item
/// ids resolve in the catalog is the order ledger's concern, not this one's.
pub fn order_create(payload: &Value) -> Result<OrderCreate, ValidationErrors> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(payload, &mut errors) else {
        return Err(ValidationErrors(errors));
    };

    let items = required(obj, "items", &mut errors, item_ids);
    let loyalty_number = required(obj, "loyaltyNumber", &mut errors, string);
    let name = required(obj, "name", &mut errors, string);
    let status = optional(obj, "status", &mut errors, status);

    match (items, loyalty_number, name) {
        (Some(items), Some(loyalty_number), Some(name)) if errors.is_empty() => Ok(OrderCreate {
            items,
            loyalty_number: LoyaltyNumber(loyalty_number),
            name,
            status: status.unwrap_or_default(),
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validate an update-order payload: every field optional, each constrained
/// exactly as in [`order_create`] when present.
pub fn order_update(payload: &Value) -> Result<OrderUpdate, ValidationErrors> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(payload, &mut errors) else {
        return Err(ValidationErrors(errors));
    };

    let update = OrderUpdate {
        items: optional(obj, "items", &mut errors, item_ids),
        loyalty_number: optional(obj, "loyaltyNumber", &mut errors, string)
            .map(LoyaltyNumber),
        name: optional(obj, "name", &mut errors, string),
        status: optional(obj, "status", &mut errors, status),
    };

    if errors.is_empty() {
        Ok(update)
    } else {
        Err(ValidationErrors(errors))
    }
}

/// Validate a create-loyalty payload: `name` (string), `loyaltyNumber`
/// (string), `balance` (non-negative number).
pub fn loyalty_create(payload: &Value) -> Result<LoyaltyCreate, ValidationErrors> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(payload, &mut errors) else {
        return Err(ValidationErrors(errors));
    };

    let name = required(obj, "name", &mut errors, string);
    let loyalty_number = required(obj, "loyaltyNumber", &mut errors, string);
    let balance = required(obj, "balance", &mut errors, non_negative_number);

    match (name, loyalty_number, balance) {
        (Some(name), Some(loyalty_number), Some(balance)) if errors.is_empty() => {
            Ok(LoyaltyCreate {
                name,
                loyalty_number: LoyaltyNumber(loyalty_number),
                balance,
            })
        }
        _ => Err(ValidationErrors(errors)),
    }
}

/// Validate an update-loyalty-balance payload: `balance` (number, negative
/// rejected).
pub fn loyalty_balance(payload: &Value) -> Result<BalanceUpdate, ValidationErrors> {
    let mut errors = Vec::new();
    let Some(obj) = as_object(payload, &mut errors) else {
        return Err(ValidationErrors(errors));
    };

    match required(obj, "balance", &mut errors, non_negative_number) {
        Some(balance) if errors.is_empty() => Ok(BalanceUpdate { balance }),
        _ => Err(ValidationErrors(errors)),
    }
}

// --- field checks ---

/// Outcome of checking one present field.
type Checked<T> = Result<T, &'static str>;

fn as_object<'a>(payload: &'a Value, errors: &mut Vec<FieldError>) -> Option<&'a Map<String, Value>> {
    match payload.as_object() {
        Some(obj) => Some(obj),
        None => {
            errors.push(FieldError {
                field: "body".to_string(),
                message: "Expected a JSON object".to_string(),
            });
            None
        }
    }
}

/// Run `check` on a field that must be present. Absence and check failures
/// both land in `errors`.
fn required<T>(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
    check: fn(&Value) -> Checked<T>,
) -> Option<T> {
    match obj.get(field) {
        None => {
            errors.push(FieldError {
                field: field.to_string(),
                message: "Required".to_string(),
            });
            None
        }
        Some(value) => run_check(value, field, errors, check),
    }
}

/// Run `check` on a field that may be absent. Absence is fine; a present
/// field that fails its check is an error.
fn optional<T>(
    obj: &Map<String, Value>,
    field: &str,
    errors: &mut Vec<FieldError>,
    check: fn(&Value) -> Checked<T>,
) -> Option<T> {
    obj.get(field)
        .and_then(|value| run_check(value, field, errors, check))
}

fn run_check<T>(
    value: &Value,
    field: &str,
    errors: &mut Vec<FieldError>,
    check: fn(&Value) -> Checked<T>,
) -> Option<T> {
    match check(value) {
        Ok(checked) => Some(checked),
        Err(message) => {
            errors.push(FieldError {
                field: field.to_string(),
                message: message.to_string(),
            });
            None
        }
    }
}

fn string(value: &Value) -> Checked<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or("Expected a string")
}

fn item_ids(value: &Value) -> Checked<Vec<MenuItemId>> {
    let entries = value.as_array().ok_or("Expected an array of strings")?;
    entries
        .iter()
        .map(|entry| entry.as_str().map(MenuItemId::from))
        .collect::<Option<Vec<_>>>()
        .ok_or("Expected an array of strings")
}

fn status(value: &Value) -> Checked<OrderStatus> {
    value
        .as_str()
        .and_then(OrderStatus::parse)
        .ok_or("Expected one of: pending, completed")
}

fn non_negative_number(value: &Value) -> Checked<f64> {
    let number = value.as_f64().ok_or("Expected a number")?;
    if number < 0.0 {
        return Err("Balance cannot be negative");
    }
    Ok(number)
}
