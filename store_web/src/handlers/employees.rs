use actix_web::{web, HttpResponse};
use store_core::error::StoreError;
use store_core::forms::EmployeeForm;
use store_core::storage::Store;

use super::{html, redirect, server_error};
use crate::pages;

pub async fn create_form() -> HttpResponse {
    html(pages::employee_form(None))
}

pub async fn create(store: web::Data<Store>, form: web::Form<EmployeeForm>) -> HttpResponse {
    let employee = match form.validate() {
        Ok(employee) => employee,
        Err(message) => return html(pages::employee_form(Some(&message))),
    };
    match store.insert_employee(&employee).await {
        Ok(()) => redirect("/"),
        Err(err @ StoreError::Duplicate(_)) => html(pages::employee_form(Some(&err.to_string()))),
        Err(err) => server_error(err),
    }
}
