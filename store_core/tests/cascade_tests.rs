mod common;

use chrono::NaiveDate;
use store_core::forms::NewSupplier;
use store_core::storage::ItemRemoval;

use common::{count_where, seed_customer, seed_product, setup_store};

async fn mark_in_process(store: &store_core::storage::Store, order_no: i64) {
    sqlx::query("INSERT INTO process (order_no) VALUES (?)")
        .bind(order_no)
        .execute(store.pool())
        .await
        .expect("failed to insert process marker");
}

#[tokio::test]
async fn deleting_a_product_unwinds_lines_and_emptied_orders() {
    let ts = setup_store().await;
    let store = &ts.store;

    seed_product(store, "SKU-1", "Widget", 10.0).await;
    seed_product(store, "SKU-2", "Gadget", 5.0).await;
    let cust_no = seed_customer(store, "Alice").await;

    // one order holding only the doomed product, one mixed order
    let only_widget = store.create_order(cust_no, "SKU-1").await.unwrap();
    let mixed = store.create_order(cust_no, "SKU-1").await.unwrap();
    store.add_item(mixed, "SKU-2", 2).await.unwrap();

    store.pay_order(only_widget, cust_no).await.unwrap();
    mark_in_process(store, only_widget).await;

    store
        .insert_supplier(&NewSupplier {
            tin: "500100200".to_string(),
            name: "Acme".to_string(),
            address: "Dock 4".to_string(),
            sku: Some("SKU-1".to_string()),
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        })
        .await
        .unwrap();

    store.delete_product("SKU-1").await.unwrap();

    assert!(store.get_product("SKU-1").await.unwrap().is_none());

    // the order that only held the product is fully gone, markers included
    assert!(store.get_order(only_widget).await.unwrap().is_none());
    assert_eq!(count_where(store, "pay", "order_no", only_widget).await, 0);
    assert_eq!(count_where(store, "process", "order_no", only_widget).await, 0);
    assert_eq!(count_where(store, "contains", "order_no", only_widget).await, 0);

    // the mixed order survives with its remaining line
    let items = store.order_items(mixed).await.unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].sku, "SKU-2");

    // the supplier lost its link but not its row
    let acme = store.get_supplier("500100200").await.unwrap().unwrap();
    assert_eq!(acme.sku, None);
}

#[tokio::test]
async fn deleting_a_customer_leaves_no_referencing_rows() {
    let ts = setup_store().await;
    let store = &ts.store;

    seed_product(store, "SKU-1", "Widget", 10.0).await;
    let alice = seed_customer(store, "Alice").await;
    let bob = seed_customer(store, "Bob").await;

    let first = store.create_order(alice, "SKU-1").await.unwrap();
    let second = store.create_order(alice, "SKU-1").await.unwrap();
    let bobs = store.create_order(bob, "SKU-1").await.unwrap();

    store.pay_order(first, alice).await.unwrap();
    mark_in_process(store, second).await;

    store.delete_customer(alice).await.unwrap();

    assert!(store.get_customer(alice).await.unwrap().is_none());
    assert_eq!(count_where(store, "pay", "cust_no", alice).await, 0);
    assert_eq!(count_where(store, "orders", "cust_no", alice).await, 0);
    for order_no in [first, second] {
        assert_eq!(count_where(store, "process", "order_no", order_no).await, 0);
        assert_eq!(count_where(store, "contains", "order_no", order_no).await, 0);
    }

    // the other customer's order is untouched
    assert!(store.get_order(bobs).await.unwrap().is_some());
}

#[tokio::test]
async fn removing_the_last_line_deletes_the_order() {
    let ts = setup_store().await;
    let store = &ts.store;

    seed_product(store, "SKU-A", "Widget", 10.0).await;
    seed_product(store, "SKU-B", "Gadget", 5.0).await;
    let cust_no = seed_customer(store, "Alice").await;

    let order_no = store.create_order(cust_no, "SKU-A").await.unwrap();
    store.add_item(order_no, "SKU-B", 2).await.unwrap();
    store.pay_order(order_no, cust_no).await.unwrap();
    mark_in_process(store, order_no).await;

    // first line out: the order survives with one line
    let outcome = store.remove_item(order_no, "SKU-A").await.unwrap();
    assert_eq!(outcome, ItemRemoval::ItemRemoved);
    assert!(store.get_order(order_no).await.unwrap().is_some());
    assert_eq!(store.order_items(order_no).await.unwrap().len(), 1);

    // last line out: the order and its markers go with it
    let outcome = store.remove_item(order_no, "SKU-B").await.unwrap();
    assert_eq!(outcome, ItemRemoval::OrderDeleted);
    assert!(store.get_order(order_no).await.unwrap().is_none());
    assert_eq!(count_where(store, "pay", "order_no", order_no).await, 0);
    assert_eq!(count_where(store, "process", "order_no", order_no).await, 0);
}

#[tokio::test]
async fn deleting_a_supplier_removes_its_delivery_rows() {
    let ts = setup_store().await;
    let store = &ts.store;

    store
        .insert_supplier(&NewSupplier {
            tin: "500100200".to_string(),
            name: "Acme".to_string(),
            address: "Dock 4".to_string(),
            sku: None,
            date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        })
        .await
        .unwrap();

    for address in ["Warehouse 1", "Warehouse 2"] {
        sqlx::query("INSERT INTO delivery (address, tin) VALUES (?, ?)")
            .bind(address)
            .bind("500100200")
            .execute(store.pool())
            .await
            .unwrap();
    }

    store.delete_supplier("500100200").await.unwrap();

    assert!(store.get_supplier("500100200").await.unwrap().is_none());
    let deliveries: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM delivery")
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(deliveries, 0);
}
