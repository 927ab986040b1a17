//! Generic data-access trait.

use async_trait::async_trait;

use crate::{Outcome, RepoResult};

/// Boolean filter over entity fields.
///
/// Deliberately a plain callback rather than anything resembling a query
/// expression, so implementations are free to evaluate it however they load
/// rows.
pub type Predicate<'a, T> = &'a (dyn Fn(&T) -> bool + Send + Sync);

/// CRUD surface every entity repository exposes.
///
/// All six operations report failure through their return value alone:
/// `Err` is an infrastructure fault, a `flag: false` outcome is a
/// business-rule rejection, and `Ok(None)` / an empty vec is an ordinary
/// read miss.
#[async_trait]
pub trait EntityStore<T>: Send + Sync {
    /// Insert `entity` unless one with the same business key already exists.
    async fn create(&self, entity: T) -> RepoResult<Outcome>;

    /// Replace the stored record identified by `entity`'s id wholesale.
    async fn update(&self, entity: T) -> RepoResult<Outcome>;

    /// Remove the stored record identified by `entity`'s id.
    async fn delete(&self, entity: T) -> RepoResult<Outcome>;

    /// Look up a single record by id.
    async fn find_by_id(&self, id: i32) -> RepoResult<Option<T>>;

    /// Detached snapshot of every record. Order is not meaningful.
    async fn get_all(&self) -> RepoResult<Vec<T>>;

    /// First record matching `predicate`, if any.
    async fn get_by(&self, predicate: Predicate<'_, T>) -> RepoResult<Option<T>>;
}
