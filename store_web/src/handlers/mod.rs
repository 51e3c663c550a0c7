use actix_web::{http::header, HttpResponse};
use serde_json::json;
use store_core::error::StoreError;

use crate::pages;

pub mod customers;
pub mod employees;
pub mod orders;
pub mod products;
pub mod suppliers;

pub(crate) fn html(body: String) -> HttpResponse {
    HttpResponse::Ok()
        .content_type(header::ContentType::html())
        .body(body)
}

pub(crate) fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

pub(crate) fn server_error(err: StoreError) -> HttpResponse {
    log::error!("request failed: {err}");
    HttpResponse::InternalServerError().body(err.to_string())
}

pub async fn home() -> HttpResponse {
    html(pages::home())
}

pub async fn ping() -> HttpResponse {
    log::debug!("ping!");
    HttpResponse::Ok().json(json!({"message": "pong!", "status": "success"}))
}
