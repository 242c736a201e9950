//! # Validation Module
//!
//! Business rule validation for the storefront model.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Constructors (Brand::new, Product::new)                      │
//! │  ├── Call these validators before storing anything                     │
//! │  └── A failed constructor produces no half-built entity                │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Mutating operations (Discountable::apply_discount)           │
//! │  └── Validate first, mutate second: on error the receiver is           │
//! │      left exactly as it was                                            │
//! │                                                                         │
//! │  Errors are raised eagerly and never retried                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use glowmart_core::validation::{validate_brand_name, validate_discount_bps};
//!
//! assert!(validate_brand_name("Golden Apple").is_ok());
//! assert!(validate_brand_name("   ").is_err());
//!
//! // Discounts are basis points, open interval (0, 10000)
//! assert!(validate_discount_bps(1500).is_ok());
//! assert!(validate_discount_bps(10000).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::BPS_SCALE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a brand name.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_brand_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "brand name".to_string(),
        });
    }

    Ok(())
}

/// Validates a brand country.
///
/// ## Rules
/// - Must not be empty or whitespace-only
pub fn validate_brand_country(country: &str) -> ValidationResult<()> {
    if country.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "brand country".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a product price.
///
/// ## Rules
/// - Must be strictly positive (> 0)
/// - Zero is NOT a valid price (free items are not part of this catalog)
///
/// ## Example
/// ```rust
/// use glowmart_core::money::Money;
/// use glowmart_core::validation::validate_price;
///
/// assert!(validate_price(Money::from_cents(1099)).is_ok());
/// assert!(validate_price(Money::zero()).is_err());
/// assert!(validate_price(Money::from_cents(-100)).is_err());
/// ```
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if !price.is_positive() {
        return Err(ValidationError::MustBePositive {
            field: "price".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount rate in basis points.
///
/// ## Rules
/// - Open interval: strictly greater than 0, strictly less than 10000
/// - 0 bps (no-op discount) and 10000 bps (everything free) are both rejected
///
/// This is checked on every `apply_discount` call BEFORE the stored price
/// is touched, so a rejected discount leaves the price unchanged.
pub fn validate_discount_bps(bps: u32) -> ValidationResult<()> {
    if bps == 0 || bps >= BPS_SCALE {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 1,
            max: (BPS_SCALE - 1) as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_brand_name() {
        assert!(validate_brand_name("Golden Apple").is_ok());
        assert!(validate_brand_name("G").is_ok());

        assert!(validate_brand_name("").is_err());
        assert!(validate_brand_name("   ").is_err());
    }

    #[test]
    fn test_validate_brand_country() {
        assert!(validate_brand_country("Kazakhstan").is_ok());
        assert!(validate_brand_country("").is_err());
        assert!(validate_brand_country("\t ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::from_cents(1)).is_ok());
        assert!(validate_price(Money::from_major_minor(4500, 0)).is_ok());

        assert!(validate_price(Money::zero()).is_err());
        assert!(validate_price(Money::from_cents(-100)).is_err());
    }

    #[test]
    fn test_validate_discount_bps_open_interval() {
        assert!(validate_discount_bps(1).is_ok());
        assert!(validate_discount_bps(1500).is_ok());
        assert!(validate_discount_bps(9999).is_ok());

        assert!(validate_discount_bps(0).is_err());
        assert!(validate_discount_bps(10000).is_err());
        assert!(validate_discount_bps(20000).is_err());
    }
}
