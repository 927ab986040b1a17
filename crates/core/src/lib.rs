//! `catalog-core` — shared data-access building blocks.
//!
//! This crate contains the pieces every layer agrees on (no infrastructure
//! concerns): the mutation outcome envelope, the classified repository
//! failure, and the generic store trait the repositories implement.

pub mod error;
pub mod outcome;
pub mod store;

pub use error::{RepoError, RepoResult};
pub use outcome::Outcome;
pub use store::{EntityStore, Predicate};
