use actix_web::{web, HttpRequest, HttpResponse};
use store_core::error::StoreError;
use store_core::forms::SupplierForm;
use store_core::storage::Store;

use super::{html, redirect, server_error};
use crate::{negotiate, pages};

pub async fn index(store: web::Data<Store>, req: HttpRequest) -> HttpResponse {
    match store.list_suppliers().await {
        Ok(suppliers) if negotiate::wants_json(&req) => HttpResponse::Ok().json(suppliers),
        Ok(suppliers) => html(pages::suppliers_index(&suppliers)),
        Err(err) => server_error(err),
    }
}

pub async fn create_form(store: web::Data<Store>) -> HttpResponse {
    match store.available_products(None).await {
        Ok(choices) => html(pages::supplier_form(None, &choices, None)),
        Err(err) => server_error(err),
    }
}

pub async fn create(store: web::Data<Store>, form: web::Form<SupplierForm>) -> HttpResponse {
    let supplier = match form.validate() {
        Ok(supplier) => supplier,
        Err(message) => return supplier_form_again(&store, None, message).await,
    };
    match store.insert_supplier(&supplier).await {
        Ok(()) => redirect("/suppliers"),
        Err(err @ StoreError::Duplicate(_)) => {
            supplier_form_again(&store, None, err.to_string()).await
        }
        Err(err) => server_error(err),
    }
}

pub async fn update_form(store: web::Data<Store>, tin: web::Path<String>) -> HttpResponse {
    let supplier = match store.get_supplier(&tin).await {
        Ok(Some(supplier)) => supplier,
        Ok(None) => return HttpResponse::NotFound().body("no such supplier"),
        Err(err) => return server_error(err),
    };
    match store.available_products(Some(&supplier.tin)).await {
        Ok(choices) => html(pages::supplier_form(Some(&supplier), &choices, None)),
        Err(err) => server_error(err),
    }
}

pub async fn update(
    store: web::Data<Store>,
    tin: web::Path<String>,
    form: web::Form<SupplierForm>,
) -> HttpResponse {
    let supplier = match form.validate() {
        Ok(supplier) => supplier,
        Err(message) => return supplier_form_again(&store, Some(&tin), message).await,
    };
    match store.update_supplier(&tin, &supplier).await {
        Ok(()) => redirect("/suppliers"),
        Err(err) => server_error(err),
    }
}

pub async fn delete(store: web::Data<Store>, tin: web::Path<String>) -> HttpResponse {
    match store.delete_supplier(&tin).await {
        Ok(()) => redirect("/suppliers"),
        Err(err) => server_error(err),
    }
}

/// Re-renders the supplier form with an error, re-querying the product
/// choices the select needs.
async fn supplier_form_again(store: &Store, tin: Option<&str>, message: String) -> HttpResponse {
    let supplier = match tin {
        Some(tin) => match store.get_supplier(tin).await {
            Ok(supplier) => supplier,
            Err(err) => return server_error(err),
        },
        None => None,
    };
    match store.available_products(tin).await {
        Ok(choices) => html(pages::supplier_form(supplier.as_ref(), &choices, Some(&message))),
        Err(err) => server_error(err),
    }
}
