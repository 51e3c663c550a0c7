use log::{debug, info};

use super::{cascade, Store};
use crate::error::{StoreError, StoreResult};
use crate::forms::NewSupplier;
use crate::model::{ProductChoice, Supplier};

impl Store {
    pub async fn list_suppliers(&self) -> StoreResult<Vec<Supplier>> {
        let suppliers = sqlx::query_as::<_, Supplier>(
            "SELECT tin, name, address, sku, date FROM supplier ORDER BY date DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!("found {} suppliers", suppliers.len());
        Ok(suppliers)
    }

    pub async fn get_supplier(&self, tin: &str) -> StoreResult<Option<Supplier>> {
        let supplier = sqlx::query_as::<_, Supplier>(
            "SELECT tin, name, address, sku, date FROM supplier WHERE tin = ?",
        )
        .bind(tin)
        .fetch_optional(&self.pool)
        .await?;
        Ok(supplier)
    }

    pub async fn insert_supplier(&self, supplier: &NewSupplier) -> StoreResult<()> {
        sqlx::query("INSERT INTO supplier (tin, name, address, sku, date) VALUES (?, ?, ?, ?, ?)")
            .bind(&supplier.tin)
            .bind(&supplier.name)
            .bind(&supplier.address)
            .bind(supplier.sku.as_deref())
            .bind(supplier.date)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::on_insert(e, "TIN"))?;

        info!("created supplier {}", supplier.tin);
        Ok(())
    }

    pub async fn update_supplier(&self, tin: &str, supplier: &NewSupplier) -> StoreResult<()> {
        sqlx::query("UPDATE supplier SET name = ?, address = ?, sku = ?, date = ? WHERE tin = ?")
            .bind(&supplier.name)
            .bind(&supplier.address)
            .bind(supplier.sku.as_deref())
            .bind(supplier.date)
            .bind(tin)
            .execute(&self.pool)
            .await?;

        info!("updated supplier {tin}");
        Ok(())
    }

    /// Products a supplier may be linked to: those not already claimed by
    /// another supplier. When editing, `current` keeps the supplier's own
    /// product in the list.
    pub async fn available_products(&self, current: Option<&str>) -> StoreResult<Vec<ProductChoice>> {
        let choices = match current {
            Some(tin) => {
                sqlx::query_as::<_, ProductChoice>(
                    "SELECT sku, product.name AS name \
                     FROM product LEFT JOIN supplier USING (sku) \
                     WHERE tin IS NULL OR tin = ?",
                )
                .bind(tin)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, ProductChoice>(
                    "SELECT sku, product.name AS name \
                     FROM product LEFT JOIN supplier USING (sku) \
                     WHERE tin IS NULL",
                )
                .fetch_all(&self.pool)
                .await?
            }
        };
        Ok(choices)
    }

    /// Deletes a supplier after its delivery rows, in one transaction.
    pub async fn delete_supplier(&self, tin: &str) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        cascade::delete_supplier(&mut tx, tin).await?;
        tx.commit().await?;

        info!("deleted supplier {tin}");
        Ok(())
    }
}
