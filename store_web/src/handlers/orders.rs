use actix_web::{web, HttpResponse};
use serde::Deserialize;
use store_core::forms::QuantityForm;
use store_core::storage::{ItemRemoval, Store};

use super::{html, redirect, server_error};
use crate::pages;

#[derive(Debug, Deserialize)]
pub struct SkuForm {
    pub sku: String,
}

/// Opens a new order for the customer with the selected product.
pub async fn create(
    store: web::Data<Store>,
    cust_no: web::Path<i64>,
    form: web::Form<SkuForm>,
) -> HttpResponse {
    if form.sku.trim().is_empty() {
        return HttpResponse::BadRequest().body("Sku is required.");
    }
    match store.create_order(cust_no.into_inner(), form.sku.trim()).await {
        Ok(order_no) => redirect(&format!("/orders/{order_no}")),
        Err(err) => server_error(err),
    }
}

pub async fn view(store: web::Data<Store>, order_no: web::Path<i64>) -> HttpResponse {
    let order_no = order_no.into_inner();
    let order = match store.get_order(order_no).await {
        Ok(Some(order)) => order,
        Ok(None) => return HttpResponse::NotFound().body("no such order"),
        Err(err) => return server_error(err),
    };
    match store.order_items(order_no).await {
        Ok(items) => {
            let total = items.iter().map(|item| item.line_total).sum();
            html(pages::order_view(&order, &items, total))
        }
        Err(err) => server_error(err),
    }
}

pub async fn add_item(
    store: web::Data<Store>,
    order_no: web::Path<i64>,
    form: web::Form<QuantityForm>,
) -> HttpResponse {
    let order_no = order_no.into_inner();
    if let Err(message) = form.validate() {
        return HttpResponse::BadRequest().body(message);
    }
    match store.add_item(order_no, form.sku.trim(), form.qty).await {
        Ok(()) => redirect(&format!("/orders/{order_no}")),
        Err(err) => server_error(err),
    }
}

/// Removes one line from the order. When the last line goes, the order
/// goes with it and the client is sent back to the customer list.
pub async fn remove_item(
    store: web::Data<Store>,
    path: web::Path<(i64, String)>,
) -> HttpResponse {
    let (order_no, sku) = path.into_inner();
    match store.remove_item(order_no, &sku).await {
        Ok(ItemRemoval::OrderDeleted) => redirect("/customers"),
        Ok(ItemRemoval::ItemRemoved) => redirect(&format!("/orders/{order_no}")),
        Err(err) => server_error(err),
    }
}

pub async fn payment_form(store: web::Data<Store>, order_no: web::Path<i64>) -> HttpResponse {
    let order_no = order_no.into_inner();
    let order = match store.get_order(order_no).await {
        Ok(Some(order)) => order,
        Ok(None) => return HttpResponse::NotFound().body("no such order"),
        Err(err) => return server_error(err),
    };
    let customer = match store.get_customer(order.cust_no).await {
        Ok(Some(customer)) => customer,
        Ok(None) => return HttpResponse::NotFound().body("no such customer"),
        Err(err) => return server_error(err),
    };
    match store.order_items(order_no).await {
        Ok(items) => {
            let total = items.iter().map(|item| item.line_total).sum();
            html(pages::payment_page(&order, &customer, &items, total))
        }
        Err(err) => server_error(err),
    }
}

pub async fn pay(store: web::Data<Store>, order_no: web::Path<i64>) -> HttpResponse {
    let order_no = order_no.into_inner();
    let order = match store.get_order(order_no).await {
        Ok(Some(order)) => order,
        Ok(None) => return HttpResponse::NotFound().body("no such order"),
        Err(err) => return server_error(err),
    };
    match store.pay_order(order_no, order.cust_no).await {
        Ok(()) => redirect(&format!("/customers/{}", order.cust_no)),
        Err(err) => server_error(err),
    }
}
