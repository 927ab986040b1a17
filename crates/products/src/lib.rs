//! Products domain module.
//!
//! This crate contains the catalog's data shapes and the pure mapping between
//! them (no IO, no HTTP, no storage): the persisted `Product` entity, the
//! boundary `ProductDto`, the conversions, and structural validation of
//! inbound transfer objects.

pub mod conversions;
pub mod product;
pub mod validate;

pub use conversions::{to_dto, to_dto_list, to_entity};
pub use product::{Product, ProductDto};
pub use validate::{validate, validate_delete};
