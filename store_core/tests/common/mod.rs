use store_core::forms::{NewCustomer, NewProduct};
use store_core::storage::Store;
use tempfile::TempDir;

/// A store backed by a file database in a temp directory; the directory
/// handle keeps the database alive for the duration of the test.
pub struct TestStore {
    pub store: Store,
    _dir: TempDir,
}

pub async fn setup_store() -> TestStore {
    let dir = TempDir::new().expect("failed to create temp dir");
    let url = format!("sqlite://{}/store.db", dir.path().display());
    let store = Store::connect(&url).await.expect("failed to open store");
    store
        .initialize_schema()
        .await
        .expect("failed to initialize schema");
    TestStore { store, _dir: dir }
}

#[allow(dead_code)]
pub async fn seed_product(store: &Store, sku: &str, name: &str, price: f64) {
    store
        .insert_product(&NewProduct {
            sku: sku.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            ean: None,
        })
        .await
        .expect("failed to seed product");
}

#[allow(dead_code)]
pub async fn seed_customer(store: &Store, name: &str) -> i64 {
    store
        .create_customer(&NewCustomer {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "911222333".to_string(),
            address: "1 Main St".to_string(),
        })
        .await
        .expect("failed to seed customer")
}

/// Row count of `table` filtered by an integer column, for asserting on
/// tables the public API only deletes from.
#[allow(dead_code)]
pub async fn count_where(store: &Store, table: &str, column: &str, value: i64) -> i64 {
    sqlx::query_scalar(&format!(
        "SELECT COUNT(1) FROM {table} WHERE {column} = ?"
    ))
    .bind(value)
    .fetch_one(store.pool())
    .await
    .expect("count query failed")
}
