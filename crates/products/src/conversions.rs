//! Entity ↔ transfer-object mapping.
//!
//! Two unambiguous directions instead of one dual-purpose function: callers
//! converting a single entity use [`to_dto`], callers converting a sequence
//! use [`to_dto_list`]. Both are direct field copies.

use crate::product::{Product, ProductDto};

/// Transfer object → entity, direct field copy.
pub fn to_entity(dto: ProductDto) -> Product {
    Product {
        id: dto.id,
        name: dto.name,
        quantity: dto.quantity,
        price: dto.price,
    }
}

/// Entity → transfer object.
pub fn to_dto(product: &Product) -> ProductDto {
    ProductDto {
        id: product.id,
        name: product.name.clone(),
        quantity: product.quantity,
        price: product.price,
    }
}

/// Entity sequence → transfer-object sequence.
pub fn to_dto_list(products: &[Product]) -> Vec<ProductDto> {
    products.iter().map(to_dto).collect()
}
