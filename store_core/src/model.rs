use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Customer {
    pub cust_no: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub ean: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    pub tin: String,
    pub name: String,
    pub address: String,
    pub sku: Option<String>,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    pub order_no: i64,
    pub cust_no: i64,
    pub date: NaiveDateTime,
}

/// An order joined with its customer, as shown on the order page.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderDetail {
    pub order_no: i64,
    pub cust_no: i64,
    pub cust_name: String,
    pub date: NaiveDateTime,
    pub paid: bool,
}

/// One row of a customer's order history: aggregated item count and
/// total price, plus whether a pay marker exists for the order.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct OrderSummary {
    pub order_no: i64,
    pub date: NaiveDateTime,
    pub num_items: i64,
    pub total_price: f64,
    pub paid: bool,
}

/// One line of an order: a product and the ordered quantity.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct LineItem {
    pub sku: String,
    pub name: String,
    pub price: f64,
    pub qty: i64,
    pub line_total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Employee {
    pub ssn: String,
    pub tin: String,
    pub bdate: Option<NaiveDate>,
    pub name: String,
}

/// A product a supplier can be linked to, for the supplier form's
/// sku selection.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProductChoice {
    pub sku: String,
    pub name: String,
}
