use log::{debug, info};

use super::{cascade, Store};
use crate::error::StoreResult;
use crate::model::{LineItem, OrderDetail};

/// Outcome of removing a line item from an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemRemoval {
    /// The line was removed; the order still has others.
    ItemRemoved,
    /// That was the last line: the order and its process/pay markers
    /// were deleted too.
    OrderDeleted,
}

impl Store {
    /// Opens a new order for a customer with a single line item of
    /// quantity one. The order number is database-generated.
    pub async fn create_order(&self, cust_no: i64, sku: &str) -> StoreResult<i64> {
        let mut tx = self.pool.begin().await?;

        let order_no: i64 =
            sqlx::query_scalar("INSERT INTO orders (cust_no) VALUES (?) RETURNING order_no")
                .bind(cust_no)
                .fetch_one(&mut *tx)
                .await?;

        sqlx::query("INSERT INTO contains (order_no, sku, qty) VALUES (?, ?, 1)")
            .bind(order_no)
            .bind(sku)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        info!("created order {order_no} for customer {cust_no}");
        Ok(order_no)
    }

    /// Adds quantity to an order: increments the existing line for the
    /// sku, or inserts a new one.
    pub async fn add_item(&self, order_no: i64, sku: &str, qty: i64) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;

        let existing: i64 = sqlx::query_scalar(
            "SELECT COUNT(1) FROM contains WHERE order_no = ? AND sku = ?",
        )
        .bind(order_no)
        .bind(sku)
        .fetch_one(&mut *tx)
        .await?;

        if existing > 0 {
            sqlx::query("UPDATE contains SET qty = qty + ? WHERE order_no = ? AND sku = ?")
                .bind(qty)
                .bind(order_no)
                .bind(sku)
                .execute(&mut *tx)
                .await?;
        } else {
            sqlx::query("INSERT INTO contains (order_no, sku, qty) VALUES (?, ?, ?)")
                .bind(order_no)
                .bind(sku)
                .bind(qty)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;

        debug!("added {qty} x {sku} to order {order_no}");
        Ok(())
    }

    pub async fn get_order(&self, order_no: i64) -> StoreResult<Option<OrderDetail>> {
        let order = sqlx::query_as::<_, OrderDetail>(
            "SELECT order_no, cust_no, name AS cust_name, date, \
                    order_no IN (SELECT order_no FROM pay) AS paid \
             FROM orders JOIN customer USING (cust_no) \
             WHERE order_no = ?",
        )
        .bind(order_no)
        .fetch_optional(&self.pool)
        .await?;
        Ok(order)
    }

    pub async fn order_items(&self, order_no: i64) -> StoreResult<Vec<LineItem>> {
        let items = sqlx::query_as::<_, LineItem>(
            "SELECT sku, name, price, qty, price * qty AS line_total \
             FROM product JOIN contains USING (sku) \
             WHERE order_no = ?",
        )
        .bind(order_no)
        .fetch_all(&self.pool)
        .await?;
        Ok(items)
    }

    /// Removes one line from an order. Deleting the last line deletes the
    /// order itself along with its process and pay markers, all in the
    /// same transaction.
    pub async fn remove_item(&self, order_no: i64, sku: &str) -> StoreResult<ItemRemoval> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM contains WHERE order_no = ? AND sku = ?")
            .bind(order_no)
            .bind(sku)
            .execute(&mut *tx)
            .await?;

        let order_deleted = cascade::remove_order_if_empty(&mut tx, order_no).await?;

        tx.commit().await?;

        if order_deleted {
            info!("removed last item {sku}; deleted order {order_no}");
            Ok(ItemRemoval::OrderDeleted)
        } else {
            info!("removed item {sku} from order {order_no}");
            Ok(ItemRemoval::ItemRemoved)
        }
    }

    /// Records a pay marker for the order.
    pub async fn pay_order(&self, order_no: i64, cust_no: i64) -> StoreResult<()> {
        sqlx::query("INSERT INTO pay (order_no, cust_no) VALUES (?, ?)")
            .bind(order_no)
            .bind(cust_no)
            .execute(&self.pool)
            .await?;

        info!("order {order_no} paid by customer {cust_no}");
        Ok(())
    }
}
