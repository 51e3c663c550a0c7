use log::{debug, info};

use super::{cascade, Store};
use crate::error::StoreResult;
use crate::forms::NewCustomer;
use crate::model::{Customer, OrderSummary};

impl Store {
    pub async fn list_customers(&self) -> StoreResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT cust_no, name, email, phone, address FROM customer ORDER BY cust_no DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!("found {} customers", customers.len());
        Ok(customers)
    }

    pub async fn get_customer(&self, cust_no: i64) -> StoreResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            "SELECT cust_no, name, email, phone, address FROM customer WHERE cust_no = ?",
        )
        .bind(cust_no)
        .fetch_optional(&self.pool)
        .await?;
        Ok(customer)
    }

    /// Inserts a customer and returns its database-generated number.
    pub async fn create_customer(&self, customer: &NewCustomer) -> StoreResult<i64> {
        let cust_no: i64 = sqlx::query_scalar(
            "INSERT INTO customer (name, email, phone, address) VALUES (?, ?, ?, ?) \
             RETURNING cust_no",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .fetch_one(&self.pool)
        .await?;

        info!("created customer {cust_no}");
        Ok(cust_no)
    }

    pub async fn update_customer(&self, cust_no: i64, customer: &NewCustomer) -> StoreResult<()> {
        sqlx::query(
            "UPDATE customer SET name = ?, email = ?, phone = ?, address = ? WHERE cust_no = ?",
        )
        .bind(&customer.name)
        .bind(&customer.email)
        .bind(&customer.phone)
        .bind(&customer.address)
        .bind(cust_no)
        .execute(&self.pool)
        .await?;

        info!("updated customer {cust_no}");
        Ok(())
    }

    /// The customer's orders, newest first, with aggregated item counts,
    /// totals, and whether each order has been paid.
    pub async fn customer_orders(&self, cust_no: i64) -> StoreResult<Vec<OrderSummary>> {
        let orders = sqlx::query_as::<_, OrderSummary>(
            "SELECT order_no, date, SUM(qty) AS num_items, SUM(qty * price) AS total_price, \
                    order_no IN (SELECT order_no FROM pay) AS paid \
             FROM orders JOIN contains USING (order_no) JOIN product USING (sku) \
             WHERE cust_no = ? \
             GROUP BY order_no \
             ORDER BY date DESC, order_no DESC",
        )
        .bind(cust_no)
        .fetch_all(&self.pool)
        .await?;
        debug!("found {} orders for customer {cust_no}", orders.len());
        Ok(orders)
    }

    /// Deletes a customer and the full chain hanging off it, in one
    /// transaction.
    pub async fn delete_customer(&self, cust_no: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        cascade::delete_customer(&mut tx, cust_no).await?;
        tx.commit().await?;

        info!("deleted customer {cust_no}");
        Ok(())
    }
}
