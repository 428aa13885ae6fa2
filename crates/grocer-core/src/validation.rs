//! # Validation Module
//!
//! Input validation for items and calculator arguments.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  └── Text fields → ItemDraft / raw numbers                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── parse_decimal: text → f64 (empty field reads as 0)                │
//! │  ├── validate_item_name: non-blank                                     │
//! │  └── validate_positive: finite and > 0                                 │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Store                                                        │
//! │  └── Items read back from disk are re-checked (DataCorruption)         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use grocer_core::validation::{parse_decimal, validate_positive};
//!
//! let price = parse_decimal("price_per_kg", "42.5").unwrap();
//! validate_positive("price_per_kg", price).unwrap();
//!
//! // Empty numeric fields read as zero, which is then rejected.
//! let qty = parse_decimal("quantity", "").unwrap();
//! assert!(validate_positive("quantity", qty).is_err());
//! ```

use crate::error::ValidationError;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates an item name.
///
/// ## Rules
/// - Must contain at least one non-whitespace character
///
/// ## Example
/// ```rust
/// use grocer_core::validation::validate_item_name;
///
/// assert!(validate_item_name("Basmati Rice").is_ok());
/// assert!(validate_item_name("   ").is_err());
/// ```
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates that a decimal is finite and strictly positive.
///
/// ## Rules
/// - NaN and ±infinity are rejected
/// - Zero and negatives are rejected
pub fn validate_positive(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    if value <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Parses a decimal typed into a numeric text field.
///
/// A blank field reads as `0.0`; callers run [`validate_positive`]
/// afterwards so a blank field still ends in an error.
pub fn parse_decimal(field: &str, text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Ok(0.0);
    }

    text.parse::<f64>()
        .map_err(|e| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: e.to_string(),
        })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_item_name() {
        assert!(validate_item_name("Onion").is_ok());
        assert!(validate_item_name(" Onion ").is_ok());

        assert!(validate_item_name("").is_err());
        assert!(validate_item_name(" \t").is_err());
    }

    #[test]
    fn test_validate_positive() {
        assert!(validate_positive("price_per_kg", 0.01).is_ok());
        assert!(validate_positive("price_per_kg", 1e9).is_ok());

        assert_eq!(
            validate_positive("price_per_kg", 0.0),
            Err(ValidationError::MustBePositive {
                field: "price_per_kg".to_string()
            })
        );
        assert!(validate_positive("quantity", -2.0).is_err());
        assert_eq!(
            validate_positive("amount", f64::NAN),
            Err(ValidationError::NotFinite {
                field: "amount".to_string()
            })
        );
        assert!(validate_positive("amount", f64::INFINITY).is_err());
    }

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("quantity", "2.5"), Ok(2.5));
        assert_eq!(parse_decimal("quantity", " 3 "), Ok(3.0));
        assert_eq!(parse_decimal("quantity", ""), Ok(0.0));

        let err = parse_decimal("quantity", "two kilos").unwrap_err();
        assert!(matches!(err, ValidationError::InvalidFormat { .. }));
    }
}
