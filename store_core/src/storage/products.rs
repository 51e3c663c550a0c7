use log::{debug, info};

use super::{cascade, Store};
use crate::error::{StoreError, StoreResult};
use crate::forms::{NewProduct, ProductUpdate};
use crate::model::Product;

impl Store {
    pub async fn list_products(&self) -> StoreResult<Vec<Product>> {
        let products = sqlx::query_as::<_, Product>(
            "SELECT sku, name, description, price, ean FROM product",
        )
        .fetch_all(&self.pool)
        .await?;
        debug!("found {} products", products.len());
        Ok(products)
    }

    pub async fn get_product(&self, sku: &str) -> StoreResult<Option<Product>> {
        let product = sqlx::query_as::<_, Product>(
            "SELECT sku, name, description, price, ean FROM product WHERE sku = ?",
        )
        .bind(sku)
        .fetch_optional(&self.pool)
        .await?;
        Ok(product)
    }

    pub async fn insert_product(&self, product: &NewProduct) -> StoreResult<()> {
        sqlx::query(
            "INSERT INTO product (sku, name, description, price, ean) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&product.sku)
        .bind(&product.name)
        .bind(&product.description)
        .bind(product.price)
        .bind(product.ean)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::on_insert(e, "SKU"))?;

        info!("created product {}", product.sku);
        Ok(())
    }

    pub async fn update_product(&self, sku: &str, update: &ProductUpdate) -> StoreResult<()> {
        sqlx::query(
            "UPDATE product SET name = ?, description = ?, price = ?, ean = ? WHERE sku = ?",
        )
        .bind(&update.name)
        .bind(&update.description)
        .bind(update.price)
        .bind(update.ean)
        .bind(sku)
        .execute(&self.pool)
        .await?;

        info!("updated product {sku}");
        Ok(())
    }

    /// Deletes a product and unwinds everything referencing it, in one
    /// transaction. Orders left without any line item are deleted too,
    /// along with their process and pay markers.
    pub async fn delete_product(&self, sku: &str) -> StoreResult<()> {
        let mut tx = self.pool.begin().await?;
        cascade::delete_product(&mut tx, sku).await?;
        tx.commit().await?;

        info!("deleted product {sku}");
        Ok(())
    }
}
