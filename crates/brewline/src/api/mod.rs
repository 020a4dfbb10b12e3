//! # HTTP Gateway
//!
//! The thin layer between HTTP and the domain: each route validates its
//! payload, calls the matching catalog or ledger operation, and serializes
//! the result. All policy — field constraints, item resolution, uniqueness,
//! balance rules — lives below this module; the gateway only maps outcomes
//! to status codes and JSON bodies (see [`error::ApiError`]).
//!
//! | Route | Success | Failure |
//! |---|---|---|
//! | `GET /menu` | 200 items | — |
//! | `GET /menu/:id` | 200 item + description | 404 |
//! | `GET /order/search` | 200 matches | 404 when none match |
//! | `POST /order` | 200 "Order placed" | 400 validation / invalid items |
//! | `PUT /order/:orderId` | 200 "Order updated" | 400; 404 |
//! | `GET /loyalty/:loyaltyNumber` | 200 balance | 404 |
//! | `POST /loyalty` | 201 "Loyalty account created" | 400 validation / duplicate |
//! | `PUT /loyalty/:loyaltyNumber` | 200 balance updated | 404; 400 negative |

pub mod error;
pub mod loyalty;
pub mod menu;
pub mod orders;

pub use error::ApiError;

use crate::catalog::Catalog;
use crate::clients::{LoyaltyClient, OrderClient};
use axum::routing::{get, post, put};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Everything a handler needs: the catalog plus a client per ledger.
/// Cloning is cheap (an `Arc` and two channel senders).
#[derive(Clone)]
pub struct ApiState {
    pub catalog: Arc<Catalog>,
    pub orders: OrderClient,
    pub loyalty: LoyaltyClient,
}

/// Builds the service router.
pub fn router(state: ApiState) -> Router {
    Router::new()
        .route("/menu", get(menu::list))
        .route("/menu/:id", get(menu::detail))
        .route("/order/search", get(orders::search))
        .route("/order", post(orders::place))
        .route("/order/:orderId", put(orders::update))
        .route("/loyalty", post(loyalty::create))
        .route(
            "/loyalty/:loyaltyNumber",
            get(loyalty::balance).put(loyalty::set_balance),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
