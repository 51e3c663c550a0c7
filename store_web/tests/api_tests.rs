use actix_web::{http::header, test, web, App};
use store_core::forms::NewProduct;
use store_core::model::Product;
use store_core::storage::Store;
use tempfile::TempDir;

async fn setup_store() -> (web::Data<Store>, TempDir) {
    let dir = TempDir::new().expect("failed to create temp dir");
    let url = format!("sqlite://{}/store.db", dir.path().display());
    let store = Store::connect(&url).await.expect("failed to open store");
    store
        .initialize_schema()
        .await
        .expect("failed to initialize schema");
    (web::Data::new(store), dir)
}

async fn seed_product(store: &Store, sku: &str, name: &str, price: f64) {
    store
        .insert_product(&NewProduct {
            sku: sku.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            ean: None,
        })
        .await
        .expect("failed to seed product");
}

async fn seed_customer(store: &Store) -> i64 {
    store
        .create_customer(&store_core::forms::NewCustomer {
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            phone: "911222333".to_string(),
            address: "1 Main St".to_string(),
        })
        .await
        .expect("failed to seed customer")
}

macro_rules! app {
    ($store:expr) => {
        test::init_service(
            App::new()
                .app_data($store.clone())
                .configure(store_web::configure),
        )
        .await
    };
}

#[actix_web::test]
async fn ping_returns_pong() {
    let (store, _dir) = setup_store().await;
    let app = app!(store);

    let req = test::TestRequest::get().uri("/ping").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "pong!");
    assert_eq!(body["status"], "success");
}

#[actix_web::test]
async fn creates_a_product_and_lists_it_as_json() {
    let (store, _dir) = setup_store().await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/products/create")
        .set_form([
            ("sku", "SKU-1"),
            ("name", "Widget"),
            ("price", "10.0"),
            ("description", "a widget"),
            ("ean", ""),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/products"
    );

    let req = test::TestRequest::get()
        .uri("/products")
        .insert_header((header::ACCEPT, "application/json"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let products: Vec<Product> = test::read_body_json(resp).await;
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].sku, "SKU-1");
    assert_eq!(products[0].price, 10.0);
}

#[actix_web::test]
async fn listing_defaults_to_html() {
    let (store, _dir) = setup_store().await;
    seed_product(store.get_ref(), "SKU-1", "Widget", 10.0).await;
    let app = app!(store);

    let req = test::TestRequest::get()
        .uri("/products")
        .insert_header((header::ACCEPT, "text/html,application/xhtml+xml"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let content_type = resp
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Widget"));
}

#[actix_web::test]
async fn validation_failure_skips_the_insert() {
    let (store, _dir) = setup_store().await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/products/create")
        .set_form([("sku", "SKU-1"), ("name", ""), ("price", "10.0")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("Name is required."));
    assert!(store.list_products().await.unwrap().is_empty());
}

#[actix_web::test]
async fn duplicate_sku_rerenders_the_form_with_an_error() {
    let (store, _dir) = setup_store().await;
    seed_product(store.get_ref(), "SKU-1", "Widget", 10.0).await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/products/create")
        .set_form([("sku", "SKU-1"), ("name", "Impostor"), ("price", "1.0")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = String::from_utf8(test::read_body(resp).await.to_vec()).unwrap();
    assert!(body.contains("SKU already exists."));
    assert_eq!(store.list_products().await.unwrap().len(), 1);
}

#[actix_web::test]
async fn deleting_a_product_redirects_to_the_listing() {
    let (store, _dir) = setup_store().await;
    seed_product(store.get_ref(), "SKU-1", "Widget", 10.0).await;
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri("/products/SKU-1/delete")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/products"
    );
    assert!(store.get_product("SKU-1").await.unwrap().is_none());
}

#[actix_web::test]
async fn removing_items_redirects_to_order_then_customer_list() {
    let (store, _dir) = setup_store().await;
    seed_product(store.get_ref(), "SKU-A", "Widget", 10.0).await;
    seed_product(store.get_ref(), "SKU-B", "Gadget", 5.0).await;
    let cust_no = seed_customer(store.get_ref()).await;
    let order_no = store.create_order(cust_no, "SKU-A").await.unwrap();
    store.add_item(order_no, "SKU-B", 2).await.unwrap();
    let app = app!(store);

    // the order still has a line, so back to the order view
    let req = test::TestRequest::post()
        .uri(&format!("/orders/{order_no}/items/SKU-A/delete"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        format!("/orders/{order_no}").as_str()
    );

    // last line: the order is gone, back to the customer list
    let req = test::TestRequest::post()
        .uri(&format!("/orders/{order_no}/items/SKU-B/delete"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        "/customers"
    );
    assert!(store.get_order(order_no).await.unwrap().is_none());
}

#[actix_web::test]
async fn payment_marks_the_order_paid() {
    let (store, _dir) = setup_store().await;
    seed_product(store.get_ref(), "SKU-1", "Widget", 10.0).await;
    let cust_no = seed_customer(store.get_ref()).await;
    let order_no = store.create_order(cust_no, "SKU-1").await.unwrap();
    let app = app!(store);

    let req = test::TestRequest::post()
        .uri(&format!("/orders/{order_no}/payment"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 302);
    assert_eq!(
        resp.headers().get(header::LOCATION).unwrap(),
        format!("/customers/{cust_no}").as_str()
    );

    let order = store.get_order(order_no).await.unwrap().unwrap();
    assert!(order.paid);
}
