use thiserror::Error;

pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Debug, Error)]
pub enum StoreError {
    /// A unique key was reused. The string is the user-facing key name
    /// ("SKU", "TIN", "SSN").
    #[error("{0} already exists.")]
    Duplicate(&'static str),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Maps a unique-constraint violation on `key` to [`StoreError::Duplicate`].
    /// Every other database failure propagates unchanged.
    pub(crate) fn on_insert(err: sqlx::Error, key: &'static str) -> Self {
        match &err {
            sqlx::Error::Database(db) if db.is_unique_violation() => StoreError::Duplicate(key),
            _ => StoreError::Database(err),
        }
    }
}
