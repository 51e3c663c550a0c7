//! SQL storage layer. One [`Store`] holds the connection pool; every
//! request-scoped operation that issues more than one statement runs them
//! inside a single transaction, committed only after all steps succeed.

use std::str::FromStr;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::error::StoreResult;

mod cascade;
mod customers;
mod employees;
mod orders;
mod products;
mod suppliers;

pub use orders::ItemRemoval;

const SCHEMA: &str = include_str!("../../resources/init.sql");

pub struct Store {
    pool: SqlitePool,
}

impl Store {
    pub async fn connect(database_url: &str) -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str(database_url)?
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        info!("connected to {database_url}");
        Ok(Self { pool })
    }

    pub async fn initialize_schema(&self) -> StoreResult<()> {
        sqlx::raw_sql(SCHEMA).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
