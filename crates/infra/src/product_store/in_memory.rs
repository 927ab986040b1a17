//! In-memory product store for development and tests.
//!
//! Behaves like the Postgres store from the caller's side: same duplicate and
//! existence checks, same outcome messages, store-assigned ids starting at 1.
//! Cloning yields another handle over the same shared state, which is what
//! the backend hands out per request.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use catalog_core::{EntityStore, Outcome, Predicate, RepoResult};
use catalog_products::Product;

use super::messages;

#[derive(Default)]
struct Inner {
    rows: Vec<Product>,
    next_id: i32,
}

/// Shared in-memory product table.
#[derive(Clone, Default)]
pub struct InMemoryProductStore {
    inner: Arc<Mutex<Inner>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
impl InMemoryProductStore {
    /// Number of stored products.
    fn len(&self) -> usize {
        self.inner.lock().unwrap().rows.len()
    }
}

#[async_trait]
impl EntityStore<Product> for InMemoryProductStore {
    async fn create(&self, entity: Product) -> RepoResult<Outcome> {
        let mut inner = self.inner.lock().unwrap();

        if inner.rows.iter().any(|p| p.name == entity.name) {
            return Ok(Outcome::rejected(messages::already_added(&entity.name)));
        }

        inner.next_id += 1;
        let id = inner.next_id;
        let name = entity.name.clone();
        inner.rows.push(Product { id, ..entity });

        Ok(Outcome::ok(messages::added(&name)))
    }

    async fn update(&self, entity: Product) -> RepoResult<Outcome> {
        let mut inner = self.inner.lock().unwrap();

        match inner.rows.iter_mut().find(|p| p.id == entity.id) {
            Some(stored) => {
                let name = entity.name.clone();
                *stored = entity;
                Ok(Outcome::ok(messages::updated(&name)))
            }
            None => Ok(Outcome::rejected(messages::not_found(&entity.name))),
        }
    }

    async fn delete(&self, entity: Product) -> RepoResult<Outcome> {
        let mut inner = self.inner.lock().unwrap();

        match inner.rows.iter().position(|p| p.id == entity.id) {
            Some(index) => {
                inner.rows.remove(index);
                Ok(Outcome::ok(messages::deleted(&entity.name)))
            }
            None => Ok(Outcome::rejected(messages::not_found(&entity.name))),
        }
    }

    async fn find_by_id(&self, id: i32) -> RepoResult<Option<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|p| p.id == id).cloned())
    }

    async fn get_all(&self) -> RepoResult<Vec<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.clone())
    }

    async fn get_by(&self, predicate: Predicate<'_, Product>) -> RepoResult<Option<Product>> {
        let inner = self.inner.lock().unwrap();
        Ok(inner.rows.iter().find(|p| predicate(p)).cloned())
    }
}
