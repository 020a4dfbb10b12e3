use axum::http::StatusCode;
use axum_test::TestServer;
use brewline::api;
use brewline::lifecycle::CafeSystem;
use brewline::seed::SeedData;
use serde_json::{json, Value};

/// HTTP-level tests: the full system behind the real router, driven through
/// axum-test. Each test boots its own seeded system, so state never leaks
/// between tests.

fn server() -> TestServer {
    let system = CafeSystem::new(SeedData::demo());
    TestServer::new(api::router(system.api_state())).expect("Failed to start test server")
}

#[tokio::test]
async fn get_menu_returns_all_items_without_descriptions() {
    let server = server();

    let response = server.get("/menu").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    let items = body.as_array().expect("Expected an array");
    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["name"], "Espresso");
    assert_eq!(items[0]["imageFileName"], "espresso.jpg");
    assert!(items[0].get("description").is_none());
}

#[tokio::test]
async fn get_menu_item_returns_the_description() {
    let server = server();

    let response = server.get("/menu/1").await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["id"], "1");
    assert_eq!(body["price"], 3.0);
    assert!(body["description"]
        .as_str()
        .unwrap()
        .starts_with("Espresso"));
}

#[tokio::test]
async fn get_unknown_menu_item_is_404() {
    let server = server();

    let response = server.get("/menu/99").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Menu item not found");
}

#[tokio::test]
async fn post_order_places_an_order_with_computed_total_and_default_status() {
    let server = server();

    let response = server
        .post("/order")
        .json(&json!({
            "items": ["1"],
            "loyaltyNumber": "X",
            "name": "A",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Order placed");
    assert_eq!(body["order"]["totalPrice"], 3.0);
    assert_eq!(body["order"]["status"], "pending");
    // Demo seed holds orders 1 and 2
    assert_eq!(body["order"]["id"], "3");
}

#[tokio::test]
async fn post_order_with_unknown_items_lists_the_offenders() {
    let server = server();

    let response = server
        .post("/order")
        .json(&json!({
            "items": ["99"],
            "loyaltyNumber": "1234567890",
            "name": "John Doe",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let body: Value = response.json();
    assert_eq!(body["message"], "Invalid menu items");
    assert_eq!(body["invalidItems"], json!(["99"]));
}

#[tokio::test]
async fn post_order_with_malformed_fields_returns_the_full_error_list() {
    let server = server();

    let response = server
        .post("/order")
        .json(&json!({
            "items": "invalid",
            "loyaltyNumber": 1234567890,
            "name": 123,
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let errors = response.json::<Value>()["errors"]
        .as_array()
        .expect("Expected an error array")
        .clone();
    assert_eq!(errors.len(), 3);
}

#[tokio::test]
async fn put_order_applies_a_partial_update() {
    let server = server();

    let response = server
        .put("/order/1")
        .json(&json!({ "status": "completed" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Order updated");
    assert_eq!(body["order"]["status"], "completed");
    // Untouched fields survive
    assert_eq!(body["order"]["name"], "John");
    assert_eq!(body["order"]["totalPrice"], 3.0);
}

#[tokio::test]
async fn put_order_recomputes_the_total_when_items_change() {
    let server = server();

    let response = server
        .put("/order/1")
        .json(&json!({ "items": ["2", "3"] }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()["order"]["totalPrice"], 8.5);
}

#[tokio::test]
async fn put_order_for_a_missing_id_is_404() {
    let server = server();

    for path in ["/order/999", "/order/not-a-number"] {
        let response = server.put(path).json(&json!({ "name": "Nobody" })).await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(response.json::<Value>()["message"], "Order not found");
    }
}

#[tokio::test]
async fn put_order_validation_beats_existence() {
    let server = server();

    // Malformed patch on a missing order: 400, not 404
    let response = server
        .put("/order/999")
        .json(&json!({ "items": "invalid" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn order_search_filters_and_404s_on_no_match() {
    let server = server();

    let response = server.get("/order/search?name=Nonexistent").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(response.json::<Value>()["message"], "Order not found");

    let response = server.get("/order/search?name=Jane").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let matches = response.json::<Value>();
    assert_eq!(matches.as_array().unwrap().len(), 1);
    assert_eq!(matches[0]["id"], "2");

    // AND-composition: Jane exists, but not under John's loyalty number
    let response = server
        .get("/order/search?name=Jane&loyaltyNumber=123456789")
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let response = server.get("/order/search?orderId=1").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>()[0]["name"], "John");

    // No filters at all: every order matches
    let response = server.get("/order/search").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>().as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn loyalty_registration_and_duplicate_rejection() {
    let server = server();

    let response = server
        .post("/loyalty")
        .json(&json!({ "name": "A", "loyaltyNumber": "L1", "balance": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let body: Value = response.json();
    assert_eq!(body["message"], "Loyalty account created");
    assert_eq!(body["loyaltyAccount"]["loyaltyNumber"], "L1");
    assert_eq!(body["loyaltyAccount"]["balance"], 10.0);

    let response = server
        .post("/loyalty")
        .json(&json!({ "name": "A", "loyaltyNumber": "L1", "balance": 10 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(
        response.json::<Value>()["message"],
        "Loyalty account already exists"
    );
}

#[tokio::test]
async fn loyalty_creation_validates_its_payload() {
    let server = server();

    let response = server
        .post("/loyalty")
        .json(&json!({ "loyaltyNumber": "L2", "balance": -3 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let errors = response.json::<Value>()["errors"].clone();
    // Missing name and negative balance, both reported
    assert_eq!(errors.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn loyalty_balance_read() {
    let server = server();

    let response = server.get("/loyalty/123456789").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<Value>(), json!({ "balance": 10.0 }));

    let response = server.get("/loyalty/9999999999").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.json::<Value>()["message"],
        "Loyalty account not found"
    );
}

#[tokio::test]
async fn loyalty_balance_update_overwrites_the_balance() {
    let server = server();

    let response = server
        .put("/loyalty/123456789")
        .json(&json!({ "balance": 100 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let body: Value = response.json();
    assert_eq!(body["message"], "Loyalty account balance updated");
    assert_eq!(body["loyaltyAccount"]["balance"], 100.0);

    let response = server.put("/loyalty/9999999999").json(&json!({ "balance": 100 })).await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn negative_balance_update_is_rejected_and_nothing_changes() {
    let server = server();

    let response = server
        .put("/loyalty/123456789")
        .json(&json!({ "balance": -5 }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["errors"].is_array());

    let response = server.get("/loyalty/123456789").await;
    assert_eq!(response.json::<Value>(), json!({ "balance": 10.0 }));
}
