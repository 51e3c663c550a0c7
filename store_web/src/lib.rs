pub mod handlers;
pub mod negotiate;
pub mod pages;

use actix_web::web;

/// Registers every route of the store application. Shared between the
/// server binary and the API tests.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(handlers::home))
        .route("/ping", web::get().to(handlers::ping))
        .route("/products", web::get().to(handlers::products::index))
        .route("/products/create", web::get().to(handlers::products::create_form))
        .route("/products/create", web::post().to(handlers::products::create))
        .route("/products/{sku}", web::get().to(handlers::products::view))
        .route("/products/{sku}/update", web::get().to(handlers::products::update_form))
        .route("/products/{sku}/update", web::post().to(handlers::products::update))
        .route("/products/{sku}/delete", web::post().to(handlers::products::delete))
        .route("/suppliers", web::get().to(handlers::suppliers::index))
        .route("/suppliers/create", web::get().to(handlers::suppliers::create_form))
        .route("/suppliers/create", web::post().to(handlers::suppliers::create))
        .route("/suppliers/{tin}/update", web::get().to(handlers::suppliers::update_form))
        .route("/suppliers/{tin}/update", web::post().to(handlers::suppliers::update))
        .route("/suppliers/{tin}/delete", web::post().to(handlers::suppliers::delete))
        .route("/customers", web::get().to(handlers::customers::index))
        .route("/customers/create", web::get().to(handlers::customers::create_form))
        .route("/customers/create", web::post().to(handlers::customers::create))
        .route("/customers/{cust_no}", web::get().to(handlers::customers::view))
        .route("/customers/{cust_no}/update", web::get().to(handlers::customers::update_form))
        .route("/customers/{cust_no}/update", web::post().to(handlers::customers::update))
        .route("/customers/{cust_no}/delete", web::post().to(handlers::customers::delete))
        .route("/customers/{cust_no}/orders/create", web::post().to(handlers::orders::create))
        .route("/orders/{order_no}", web::get().to(handlers::orders::view))
        .route("/orders/{order_no}/items", web::post().to(handlers::orders::add_item))
        .route(
            "/orders/{order_no}/items/{sku}/delete",
            web::post().to(handlers::orders::remove_item),
        )
        .route("/orders/{order_no}/payment", web::get().to(handlers::orders::payment_form))
        .route("/orders/{order_no}/payment", web::post().to(handlers::orders::pay))
        .route("/employees/create", web::get().to(handlers::employees::create_form))
        .route("/employees/create", web::post().to(handlers::employees::create));
}
