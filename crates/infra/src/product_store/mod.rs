//! Product repositories.
//!
//! Two implementations of [`EntityStore<Product>`](catalog_core::EntityStore):
//! [`PgProductStore`] against Postgres and [`InMemoryProductStore`] for
//! development and tests. Both enforce the duplicate-name rule on create and
//! the existence check on update/delete, and both hold the boundary contract:
//! store faults are logged here and leave only as sanitized `RepoError`s.

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryProductStore;
pub use postgres::PgProductStore;

/// Outcome and fault messages shared by every store implementation.
pub(crate) mod messages {
    pub const ADD_FAULT: &str = "Error occurred adding new product";
    pub const UPDATE_FAULT: &str = "Error occurred updating product";
    pub const DELETE_FAULT: &str = "Error occurred deleting product";
    pub const RETRIEVE_FAULT: &str = "Error occurred retrieving product";
    pub const RETRIEVE_ALL_FAULT: &str = "Error occurred retrieving products";

    pub fn added(name: &str) -> String {
        format!("{name} added to database successfully")
    }

    pub fn already_added(name: &str) -> String {
        format!("{name} already added")
    }

    pub fn add_failed(name: &str) -> String {
        format!("Error occurred while adding {name}")
    }

    pub fn not_found(name: &str) -> String {
        format!("{name} not found")
    }

    pub fn updated(name: &str) -> String {
        format!("{name} is updated successfully")
    }

    pub fn deleted(name: &str) -> String {
        format!("{name} deleted successfully")
    }
}
