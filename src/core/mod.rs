//! Core business logic - framework-agnostic catalog operations.
//!
//! One module per store (organizations, group companies, projects, shared and
//! project products) plus [`propagation`], which moves products between the
//! shared and project scopes. Functions that the engine calls are generic over
//! [`sea_orm::ConnectionTrait`] so they run equally against a plain connection
//! or inside a caller-owned transaction.

pub mod group_company;
pub mod organization;
pub mod project;
pub mod project_product;
pub mod propagation;
pub mod shared_product;
pub mod sku;

use crate::errors::{Error, Result};

/// Trims a caller-supplied name and rejects it if nothing is left.
pub(crate) fn validate_name(what: &str, name: &str) -> Result<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::validation(format!("{what} name cannot be empty")));
    }
    Ok(trimmed.to_string())
}

/// Prices must be finite and non-negative.
pub(crate) fn validate_price(price: f64) -> Result<f64> {
    if !price.is_finite() || price < 0.0 {
        return Err(Error::validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(price)
}

/// Current time in the naive UTC form stored by every entity.
pub(crate) fn now() -> sea_orm::prelude::DateTime {
    chrono::Utc::now().naive_utc()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::float_cmp)]
    use super::*;

    #[test]
    fn test_validate_name_trims() {
        assert_eq!(validate_name("project", "  Alpha ").unwrap(), "Alpha");
        assert!(matches!(
            validate_name("project", "   ").unwrap_err(),
            Error::Validation { message: _ }
        ));
    }

    #[test]
    fn test_validate_price() {
        assert_eq!(validate_price(0.0).unwrap(), 0.0);
        assert_eq!(validate_price(9.99).unwrap(), 9.99);
        assert!(validate_price(-0.01).is_err());
        assert!(validate_price(f64::NAN).is_err());
        assert!(validate_price(f64::INFINITY).is_err());
    }
}
