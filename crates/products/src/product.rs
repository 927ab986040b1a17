use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Persisted catalog product.
///
/// `name` is the business key: no two persisted products share one. `id` is
/// store-assigned — zero before the first successful insert, positive and
/// immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}

impl Product {
    /// Whether this entity has been persisted (store assigned an id).
    pub fn is_persisted(&self) -> bool {
        self.id > 0
    }
}

/// Boundary representation of a [`Product`].
///
/// Carries no identity of its own beyond what is copied from/to the entity.
/// `id` defaults to zero so create requests may omit it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductDto {
    #[serde(default)]
    pub id: i32,
    pub name: String,
    pub quantity: i32,
    pub price: Decimal,
}
