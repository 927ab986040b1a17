//! Structural validation of inbound transfer objects.
//!
//! Only "required / non-empty" checks live here; richer field rules belong to
//! upstream layers.

use crate::product::ProductDto;

/// Validate a create/update request body.
pub fn validate(dto: &ProductDto) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if dto.name.trim().is_empty() {
        errors.push("name is required".to_string());
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}

/// Validate a delete request body.
///
/// Delete carries no full structural validation, only the one thing the
/// operation cannot work without: a positive id.
pub fn validate_delete(dto: &ProductDto) -> Result<(), Vec<String>> {
    if dto.id > 0 {
        Ok(())
    } else {
        Err(vec!["id must be a positive integer".to_string()])
    }
}
