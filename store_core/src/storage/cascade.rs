//! Dependency-ordered deletion of parent rows.
//!
//! The schema declares foreign keys but no automatic cascade, so removing a
//! product, supplier, or customer has to unwind its dependents in an order
//! that keeps every constraint satisfied. All of those sequences live here;
//! callers open the transaction and commit it only after the whole unwind
//! succeeded.

use sqlx::{Sqlite, Transaction};

/// Orders that lost their last line item, as a set difference between all
/// orders and the orders still present in `contains`.
const ORPHANED_ORDERS: &str =
    "(SELECT order_no FROM orders EXCEPT SELECT order_no FROM contains)";

/// Removes a product and everything that references it: its order lines,
/// the process/pay markers and rows of orders left empty, and the
/// supplier links, which are nulled rather than deleted.
pub(crate) async fn delete_product(
    tx: &mut Transaction<'_, Sqlite>,
    sku: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM contains WHERE sku = ?")
        .bind(sku)
        .execute(&mut **tx)
        .await?;

    sqlx::query(&format!(
        "DELETE FROM process WHERE order_no IN {ORPHANED_ORDERS}"
    ))
    .execute(&mut **tx)
    .await?;

    sqlx::query(&format!(
        "DELETE FROM pay WHERE order_no IN {ORPHANED_ORDERS}"
    ))
    .execute(&mut **tx)
    .await?;

    sqlx::query(&format!(
        "DELETE FROM orders WHERE order_no IN {ORPHANED_ORDERS}"
    ))
    .execute(&mut **tx)
    .await?;

    sqlx::query("UPDATE supplier SET sku = NULL WHERE sku = ?")
        .bind(sku)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM product WHERE sku = ?")
        .bind(sku)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

/// Removes a supplier after its delivery rows.
pub(crate) async fn delete_supplier(
    tx: &mut Transaction<'_, Sqlite>,
    tin: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM delivery WHERE tin = ?")
        .bind(tin)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM supplier WHERE tin = ?")
        .bind(tin)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

/// Removes a customer and the full chain hanging off it:
/// pay -> process -> contains -> orders -> customer.
pub(crate) async fn delete_customer(
    tx: &mut Transaction<'_, Sqlite>,
    cust_no: i64,
) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM pay WHERE cust_no = ?")
        .bind(cust_no)
        .execute(&mut **tx)
        .await?;

    sqlx::query(
        "DELETE FROM process \
         WHERE order_no IN (SELECT order_no FROM orders WHERE cust_no = ?)",
    )
    .bind(cust_no)
    .execute(&mut **tx)
    .await?;

    sqlx::query(
        "DELETE FROM contains \
         WHERE order_no IN (SELECT order_no FROM orders WHERE cust_no = ?)",
    )
    .bind(cust_no)
    .execute(&mut **tx)
    .await?;

    sqlx::query("DELETE FROM orders WHERE cust_no = ?")
        .bind(cust_no)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM customer WHERE cust_no = ?")
        .bind(cust_no)
        .execute(&mut **tx)
        .await?;

    Ok(())
}

/// Deletes an order that has no line items left, together with its
/// process and pay markers. Returns whether the order was deleted.
pub(crate) async fn remove_order_if_empty(
    tx: &mut Transaction<'_, Sqlite>,
    order_no: i64,
) -> Result<bool, sqlx::Error> {
    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM contains WHERE order_no = ?")
        .bind(order_no)
        .fetch_one(&mut **tx)
        .await?;
    if remaining > 0 {
        return Ok(false);
    }

    sqlx::query("DELETE FROM process WHERE order_no = ?")
        .bind(order_no)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM pay WHERE order_no = ?")
        .bind(order_no)
        .execute(&mut **tx)
        .await?;

    sqlx::query("DELETE FROM orders WHERE order_no = ?")
        .bind(order_no)
        .execute(&mut **tx)
        .await?;

    Ok(true)
}
