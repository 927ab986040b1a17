//! Postgres-backed product store.
//!
//! One handle is built per request over the shared [`PgPool`]; each query
//! checks its own connection out of the pool, so concurrent requests never
//! share a connection. Row mapping goes through `Row::try_get`, no query
//! macros.
//!
//! The `products.name` column carries a `UNIQUE` constraint. The pre-insert
//! duplicate check covers the ordinary path; the constraint closes the
//! read-then-write race between concurrent creates, and a unique violation on
//! insert is reported as the duplicate-name rejection rather than a store
//! fault.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};

use catalog_core::{EntityStore, Outcome, Predicate, RepoError, RepoResult};
use catalog_products::Product;

use super::messages;

/// Request-scoped product repository over a shared connection pool.
#[derive(Clone)]
pub struct PgProductStore {
    pool: PgPool,
}

impl PgProductStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn product_from_row(row: &PgRow) -> Result<Product, sqlx::Error> {
        Ok(Product {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get("price")?,
        })
    }

    async fn fetch_all(&self) -> Result<Vec<Product>, sqlx::Error> {
        let rows = sqlx::query("SELECT id, name, quantity, price FROM products")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(Self::product_from_row).collect()
    }
}

#[async_trait]
impl EntityStore<Product> for PgProductStore {
    async fn create(&self, entity: Product) -> RepoResult<Outcome> {
        let existing = self
            .get_by(&|p: &Product| p.name == entity.name)
            .await
            .map_err(|_| RepoError::store(messages::ADD_FAULT))?;
        if existing.is_some() {
            return Ok(Outcome::rejected(messages::already_added(&entity.name)));
        }

        let inserted = sqlx::query(
            "INSERT INTO products (name, quantity, price) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&entity.name)
        .bind(entity.quantity)
        .bind(entity.price)
        .fetch_one(&self.pool)
        .await;

        match inserted {
            Ok(row) => {
                let id: i32 = row.try_get("id").map_err(|e| {
                    tracing::error!(error = %e, name = %entity.name, "insert returned an unreadable id");
                    RepoError::store(messages::ADD_FAULT)
                })?;

                if id > 0 {
                    Ok(Outcome::ok(messages::added(&entity.name)))
                } else {
                    Ok(Outcome::rejected(messages::add_failed(&entity.name)))
                }
            }
            // A concurrent create won the race; same rejection as the precheck.
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(Outcome::rejected(messages::already_added(&entity.name)))
            }
            Err(e) => {
                tracing::error!(error = %e, name = %entity.name, "failed to insert product");
                Err(RepoError::store(messages::ADD_FAULT))
            }
        }
    }

    async fn update(&self, entity: Product) -> RepoResult<Outcome> {
        let current = self
            .find_by_id(entity.id)
            .await
            .map_err(|_| RepoError::store(messages::UPDATE_FAULT))?;
        if current.is_none() {
            return Ok(Outcome::rejected(messages::not_found(&entity.name)));
        }

        let result = sqlx::query("UPDATE products SET name = $2, quantity = $3, price = $4 WHERE id = $1")
            .bind(entity.id)
            .bind(&entity.name)
            .bind(entity.quantity)
            .bind(entity.price)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(Outcome::ok(messages::updated(&entity.name))),
            Err(e) => {
                tracing::error!(error = %e, id = entity.id, "failed to update product");
                Err(RepoError::store(messages::UPDATE_FAULT))
            }
        }
    }

    async fn delete(&self, entity: Product) -> RepoResult<Outcome> {
        let current = self
            .find_by_id(entity.id)
            .await
            .map_err(|_| RepoError::store(messages::DELETE_FAULT))?;
        if current.is_none() {
            return Ok(Outcome::rejected(messages::not_found(&entity.name)));
        }

        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(entity.id)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(Outcome::ok(messages::deleted(&entity.name))),
            Err(e) => {
                tracing::error!(error = %e, id = entity.id, "failed to delete product");
                Err(RepoError::store(messages::DELETE_FAULT))
            }
        }
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Product>> {
        let row = sqlx::query("SELECT id, name, quantity, price FROM products WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, id, "failed to look up product by id");
                RepoError::store(messages::RETRIEVE_FAULT)
            })?;

        row.as_ref()
            .map(Self::product_from_row)
            .transpose()
            .map_err(|e| {
                tracing::error!(error = %e, id, "failed to map product row");
                RepoError::store(messages::RETRIEVE_FAULT)
            })
    }

    async fn get_all(&self) -> RepoResult<Vec<Product>> {
        self.fetch_all().await.map_err(|e| {
            tracing::error!(error = %e, "failed to list products");
            RepoError::store(messages::RETRIEVE_ALL_FAULT)
        })
    }

    async fn get_by(&self, predicate: Predicate<'_, Product>) -> RepoResult<Option<Product>> {
        // The predicate is a plain Rust closure, so rows are loaded and
        // filtered here rather than translated to SQL.
        let products = self.fetch_all().await.map_err(|e| {
            tracing::error!(error = %e, "failed to scan products");
            RepoError::store(messages::RETRIEVE_FAULT)
        })?;

        Ok(products.into_iter().find(|p| predicate(p)))
    }
}
