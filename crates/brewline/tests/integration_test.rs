use brewline::lifecycle::CafeSystem;
use brewline::loyalty_actor::LoyaltyError;
use brewline::model::{
    LoyaltyCreate, LoyaltyNumber, MenuItemId, OrderCreate, OrderFilter, OrderStatus, OrderUpdate,
};
use brewline::order_actor::OrderError;
use brewline::seed::SeedData;
use ledger_actor::EntryClient;

/// Full end-to-end integration tests with the real system: catalog, both
/// ledgers, and the demo seed, as a process boot would wire them.

fn demo_system() -> CafeSystem {
    CafeSystem::new(SeedData::demo())
}

#[tokio::test]
async fn placing_and_retrieving_an_order_through_the_full_system() {
    let system = demo_system();

    let placed = system
        .orders
        .place(OrderCreate {
            items: vec!["1".into(), "2".into()],
            loyalty_number: LoyaltyNumber::from("555"),
            name: "Ravi".to_string(),
            status: OrderStatus::Pending,
        })
        .await
        .expect("Failed to place order");

    // The demo seed holds orders 1 and 2, so the fresh order continues at 3
    assert_eq!(placed.id.to_string(), "3");
    assert_eq!(placed.total_price, 7.0);

    let fetched = system
        .orders
        .get(placed.id)
        .await
        .expect("Failed to get order")
        .expect("Order not found");
    assert_eq!(fetched, placed);

    let found = system
        .orders
        .search(OrderFilter {
            name: Some("Ravi".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to search");
    assert_eq!(found, vec![placed]);

    system.shutdown().await.expect("Failed to shutdown system");
}

#[tokio::test]
async fn search_is_a_logical_and_over_supplied_filters() {
    let system = demo_system();

    // Seeded: order 1 (John / 123456789), order 2 (Jane / 987654321).
    // Add a second order for Jane under John's loyalty number.
    system
        .orders
        .place(OrderCreate {
            items: vec!["3".into()],
            loyalty_number: LoyaltyNumber::from("123456789"),
            name: "Jane".to_string(),
            status: OrderStatus::Pending,
        })
        .await
        .unwrap();

    let janes = system
        .orders
        .search(OrderFilter {
            name: Some("Jane".to_string()),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(janes.len(), 2);

    let janes_on_johns_account = system
        .orders
        .search(OrderFilter {
            name: Some("Jane".to_string()),
            loyalty_number: Some(LoyaltyNumber::from("123456789")),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(janes_on_johns_account.len(), 1);
    assert_eq!(janes_on_johns_account[0].id.to_string(), "3");

    // No filters at all matches every order
    let everyone = system.orders.search(OrderFilter::default()).await.unwrap();
    assert_eq!(everyone.len(), 3);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn search_with_no_matches_is_an_error() {
    let system = demo_system();

    let result = system
        .orders
        .search(OrderFilter {
            name: Some("Nonexistent".to_string()),
            ..Default::default()
        })
        .await;
    assert_eq!(result, Err(OrderError::NoMatches));

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn updating_a_seeded_order_keeps_the_rest_of_it() {
    let system = demo_system();

    let updated = system
        .orders
        .update_order(
            brewline::model::OrderId(1),
            OrderUpdate {
                status: Some(OrderStatus::Completed),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Completed);
    assert_eq!(updated.name, "John");
    assert_eq!(updated.items, vec![MenuItemId::from("1")]);
    assert_eq!(updated.total_price, 3.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn placing_an_order_does_not_touch_the_loyalty_balance() {
    let system = demo_system();

    system
        .orders
        .place(OrderCreate {
            items: vec!["2".into()],
            loyalty_number: LoyaltyNumber::from("123456789"),
            name: "John".to_string(),
            status: OrderStatus::Pending,
        })
        .await
        .unwrap();

    let balance = system
        .loyalty
        .balance_of(LoyaltyNumber::from("123456789"))
        .await
        .unwrap();
    assert_eq!(balance, 10.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn orders_may_reference_loyalty_numbers_that_do_not_exist_yet() {
    let system = demo_system();

    let placed = system
        .orders
        .place(OrderCreate {
            items: vec!["1".into()],
            loyalty_number: LoyaltyNumber::from("not-registered"),
            name: "Walk-in".to_string(),
            status: OrderStatus::Pending,
        })
        .await;
    assert!(placed.is_ok());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn duplicate_loyalty_registration_leaves_the_existing_account_unmodified() {
    let system = demo_system();

    let result = system
        .loyalty
        .create_account(LoyaltyCreate {
            name: "Impostor".to_string(),
            loyalty_number: LoyaltyNumber::from("123456789"),
            balance: 9999.0,
        })
        .await;
    assert_eq!(
        result,
        Err(LoyaltyError::AlreadyExists("123456789".to_string()))
    );

    let balance = system
        .loyalty
        .balance_of(LoyaltyNumber::from("123456789"))
        .await
        .unwrap();
    assert_eq!(balance, 10.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn balance_lifecycle_register_read_overwrite() {
    let system = demo_system();

    let account = system
        .loyalty
        .create_account(LoyaltyCreate {
            name: "Ravi".to_string(),
            loyalty_number: LoyaltyNumber::from("555"),
            balance: 50.0,
        })
        .await
        .unwrap();
    assert_eq!(account.balance, 50.0);

    let updated = system
        .loyalty
        .set_balance(LoyaltyNumber::from("555"), 100.0)
        .await
        .unwrap();
    assert_eq!(updated.balance, 100.0);

    let balance = system
        .loyalty
        .balance_of(LoyaltyNumber::from("555"))
        .await
        .unwrap();
    assert_eq!(balance, 100.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn negative_set_balance_fails_and_leaves_the_balance_unchanged() {
    let system = demo_system();

    let result = system
        .loyalty
        .set_balance(LoyaltyNumber::from("987654321"), -5.0)
        .await;
    assert_eq!(result, Err(LoyaltyError::InvalidBalance(-5.0)));

    let balance = system
        .loyalty
        .balance_of(LoyaltyNumber::from("987654321"))
        .await
        .unwrap();
    assert_eq!(balance, 20.0);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn reading_an_unregistered_account_is_not_found() {
    let system = demo_system();

    let result = system
        .loyalty
        .balance_of(LoyaltyNumber::from("0000000000"))
        .await;
    assert_eq!(result, Err(LoyaltyError::NotFound("0000000000".to_string())));

    let result = system
        .loyalty
        .set_balance(LoyaltyNumber::from("0000000000"), 10.0)
        .await;
    assert_eq!(result, Err(LoyaltyError::NotFound("0000000000".to_string())));

    system.shutdown().await.unwrap();
}

/// Concurrent placements against one ledger still produce distinct ids,
/// since the ledger processes its mailbox sequentially.
#[tokio::test]
async fn concurrent_placements_get_distinct_ids() {
    let system = CafeSystem::new(SeedData {
        menu_items: SeedData::demo().menu_items,
        ..Default::default()
    });

    let mut handles = Vec::new();
    for i in 0..10 {
        let orders = system.orders.clone();
        handles.push(tokio::spawn(async move {
            orders
                .place(OrderCreate {
                    items: vec!["1".into()],
                    loyalty_number: LoyaltyNumber::from("555"),
                    name: format!("Customer {}", i),
                    status: OrderStatus::Pending,
                })
                .await
        }));
    }

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap().unwrap().id);
    }
    ids.sort();
    ids.dedup();
    assert_eq!(ids.len(), 10, "Expected every order to get a distinct id");

    system.shutdown().await.unwrap();
}
