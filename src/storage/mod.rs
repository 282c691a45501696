//! Key-value persistence for the storefront records.
//!
//! Both the catalog and the cart are stored as JSON text under a string key.
//! The store itself knows nothing about products; it only moves text around.

use std::future::Future;

use thiserror::Error;

pub mod memory;
pub mod postgres;
pub mod session;

pub use memory::MemoryStore;
pub use postgres::PostgresStore;
pub use session::{Session, SessionStore};

/// Storage key of the catalog record.
pub const PRODUCTS_KEY: &str = "buyit_products_v1";
/// Storage key of the cart record.
pub const CART_KEY: &str = "buyit_cart_v1";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String-keyed store holding serialized text.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl Future<Output = StorageResult<Option<String>>> + Send;

    fn set(&self, key: &str, value: String) -> impl Future<Output = StorageResult<()>> + Send;

    fn delete(&self, key: &str) -> impl Future<Output = StorageResult<()>> + Send;
}

/// The backend picked at startup.
#[derive(Clone)]
pub enum StorageBackend {
    Memory(MemoryStore),
    Postgres(PostgresStore),
}

impl StorageBackend {
    pub fn name(&self) -> &'static str {
        match self {
            StorageBackend::Memory(_) => "memory",
            StorageBackend::Postgres(_) => "postgres",
        }
    }
}

impl KeyValueStore for StorageBackend {
    async fn get(&self, key: &str) -> StorageResult<Option<String>> {
        match self {
            StorageBackend::Memory(store) => store.get(key).await,
            StorageBackend::Postgres(store) => store.get(key).await,
        }
    }

    async fn set(&self, key: &str, value: String) -> StorageResult<()> {
        match self {
            StorageBackend::Memory(store) => store.set(key, value).await,
            StorageBackend::Postgres(store) => store.set(key, value).await,
        }
    }

    async fn delete(&self, key: &str) -> StorageResult<()> {
        match self {
            StorageBackend::Memory(store) => store.delete(key).await,
            StorageBackend::Postgres(store) => store.delete(key).await,
        }
    }
}
