//! Infrastructure layer: product store implementations and backend wiring.

pub mod backend;
pub mod product_store;

pub use backend::{ProductBackend, StoreProvider};
pub use product_store::{InMemoryProductStore, PgProductStore};
