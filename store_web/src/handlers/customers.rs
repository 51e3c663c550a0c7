use actix_web::{web, HttpRequest, HttpResponse};
use store_core::forms::CustomerForm;
use store_core::storage::Store;

use super::{html, redirect, server_error};
use crate::{negotiate, pages};

pub async fn index(store: web::Data<Store>, req: HttpRequest) -> HttpResponse {
    match store.list_customers().await {
        Ok(customers) if negotiate::wants_json(&req) => HttpResponse::Ok().json(customers),
        Ok(customers) => html(pages::customers_index(&customers)),
        Err(err) => server_error(err),
    }
}

pub async fn view(store: web::Data<Store>, cust_no: web::Path<i64>) -> HttpResponse {
    let cust_no = cust_no.into_inner();
    let customer = match store.get_customer(cust_no).await {
        Ok(Some(customer)) => customer,
        Ok(None) => return HttpResponse::NotFound().body("no such customer"),
        Err(err) => return server_error(err),
    };
    match store.customer_orders(cust_no).await {
        Ok(orders) => html(pages::customer_view(&customer, &orders)),
        Err(err) => server_error(err),
    }
}

pub async fn create_form() -> HttpResponse {
    html(pages::customer_form(None, None))
}

pub async fn create(store: web::Data<Store>, form: web::Form<CustomerForm>) -> HttpResponse {
    let customer = match form.validate() {
        Ok(customer) => customer,
        Err(message) => return html(pages::customer_form(None, Some(&message))),
    };
    match store.create_customer(&customer).await {
        Ok(cust_no) => redirect(&format!("/customers/{cust_no}")),
        Err(err) => server_error(err),
    }
}

pub async fn update_form(store: web::Data<Store>, cust_no: web::Path<i64>) -> HttpResponse {
    match store.get_customer(cust_no.into_inner()).await {
        Ok(Some(customer)) => html(pages::customer_form(Some(&customer), None)),
        Ok(None) => HttpResponse::NotFound().body("no such customer"),
        Err(err) => server_error(err),
    }
}

pub async fn update(
    store: web::Data<Store>,
    cust_no: web::Path<i64>,
    form: web::Form<CustomerForm>,
) -> HttpResponse {
    let cust_no = cust_no.into_inner();
    let customer = match form.validate() {
        Ok(customer) => customer,
        Err(message) => {
            return match store.get_customer(cust_no).await {
                Ok(Some(current)) => html(pages::customer_form(Some(&current), Some(&message))),
                Ok(None) => HttpResponse::NotFound().body("no such customer"),
                Err(err) => server_error(err),
            };
        }
    };
    match store.update_customer(cust_no, &customer).await {
        Ok(()) => redirect(&format!("/customers/{cust_no}")),
        Err(err) => server_error(err),
    }
}

pub async fn delete(store: web::Data<Store>, cust_no: web::Path<i64>) -> HttpResponse {
    match store.delete_customer(cust_no.into_inner()).await {
        Ok(()) => redirect("/customers"),
        Err(err) => server_error(err),
    }
}
