use actix_web::{web, HttpRequest, HttpResponse};
use store_core::error::StoreError;
use store_core::forms::{ProductForm, ProductUpdateForm};
use store_core::storage::Store;

use super::{html, redirect, server_error};
use crate::{negotiate, pages};

pub async fn index(store: web::Data<Store>, req: HttpRequest) -> HttpResponse {
    match store.list_products().await {
        Ok(products) if negotiate::wants_json(&req) => HttpResponse::Ok().json(products),
        Ok(products) => html(pages::products_index(&products)),
        Err(err) => server_error(err),
    }
}

pub async fn view(store: web::Data<Store>, sku: web::Path<String>) -> HttpResponse {
    match store.get_product(&sku).await {
        Ok(Some(product)) => html(pages::product_view(&product)),
        Ok(None) => HttpResponse::NotFound().body("no such product"),
        Err(err) => server_error(err),
    }
}

pub async fn create_form() -> HttpResponse {
    html(pages::product_form(None, None))
}

pub async fn create(store: web::Data<Store>, form: web::Form<ProductForm>) -> HttpResponse {
    let product = match form.validate() {
        Ok(product) => product,
        Err(message) => return html(pages::product_form(None, Some(&message))),
    };
    match store.insert_product(&product).await {
        Ok(()) => redirect("/products"),
        Err(err @ StoreError::Duplicate(_)) => {
            html(pages::product_form(None, Some(&err.to_string())))
        }
        Err(err) => server_error(err),
    }
}

pub async fn update_form(store: web::Data<Store>, sku: web::Path<String>) -> HttpResponse {
    match store.get_product(&sku).await {
        Ok(Some(product)) => html(pages::product_form(Some(&product), None)),
        Ok(None) => HttpResponse::NotFound().body("no such product"),
        Err(err) => server_error(err),
    }
}

pub async fn update(
    store: web::Data<Store>,
    sku: web::Path<String>,
    form: web::Form<ProductUpdateForm>,
) -> HttpResponse {
    let update = match form.validate() {
        Ok(update) => update,
        Err(message) => {
            return match store.get_product(&sku).await {
                Ok(Some(product)) => html(pages::product_form(Some(&product), Some(&message))),
                Ok(None) => HttpResponse::NotFound().body("no such product"),
                Err(err) => server_error(err),
            };
        }
    };
    match store.update_product(&sku, &update).await {
        Ok(()) => redirect("/products"),
        Err(err) => server_error(err),
    }
}

pub async fn delete(store: web::Data<Store>, sku: web::Path<String>) -> HttpResponse {
    match store.delete_product(&sku).await {
        Ok(()) => redirect("/products"),
        Err(err) => server_error(err),
    }
}
