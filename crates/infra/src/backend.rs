//! Backend composition: which store implementation serves requests.

use anyhow::Context;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use catalog_core::EntityStore;
use catalog_products::Product;

use crate::product_store::{InMemoryProductStore, PgProductStore};

/// Hands out request-scoped store handles.
///
/// The composition layer implements this over the real backend; tests
/// substitute scripted providers. A handle must not be cached beyond the
/// request that obtained it.
pub trait StoreProvider: Send + Sync {
    fn request_store(&self) -> Box<dyn EntityStore<Product>>;
}

/// Store backend selected once at startup.
#[derive(Clone)]
pub enum ProductBackend {
    Postgres(PgPool),
    InMemory(InMemoryProductStore),
}

impl ProductBackend {
    /// Postgres when `DATABASE_URL` is set, in-memory otherwise.
    pub async fn from_env() -> anyhow::Result<Self> {
        match std::env::var("DATABASE_URL") {
            Ok(url) => {
                let pool = PgPoolOptions::new()
                    .max_connections(10)
                    .connect(&url)
                    .await
                    .context("failed to connect to DATABASE_URL")?;
                tracing::info!("product store backend: postgres");
                Ok(Self::Postgres(pool))
            }
            Err(_) => {
                tracing::warn!("DATABASE_URL not set; using in-memory product store");
                Ok(Self::in_memory())
            }
        }
    }

    pub fn in_memory() -> Self {
        Self::InMemory(InMemoryProductStore::new())
    }
}

impl StoreProvider for ProductBackend {
    fn request_store(&self) -> Box<dyn EntityStore<Product>> {
        match self {
            Self::Postgres(pool) => Box::new(PgProductStore::new(pool.clone())),
            Self::InMemory(store) => Box::new(store.clone()),
        }
    }
}
