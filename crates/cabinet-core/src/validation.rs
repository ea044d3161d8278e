//! # Validation Module
//!
//! Boundary checks run before values reach the pricing engine.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Shell (cabinet-cli)                                           │
//! │  ├── Argument parsing (clap)                                            │
//! │  └── Order spec format "TYPE|ITEM|QTY"                                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── quantity >= 1                                                      │
//! │  ├── markup 0..=100%                                                    │
//! │  └── fees from the fixed option set                                     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Pricing engine (assumes valid input)                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::types::MarkupRate;
use crate::{FEE_OPTIONS_DOLLARS, MAX_MARKUP_BPS};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a quantity value.
///
/// ## Rules
/// - Must be positive (> 0). There is no upper limit.
///
/// ## Example
/// ```rust
/// use cabinet_core::validation::validate_quantity;
///
/// assert!(validate_quantity(1).is_ok());
/// assert!(validate_quantity(0).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty <= 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a markup in basis points (0% to 100%).
pub fn validate_markup_bps(bps: u32) -> ValidationResult<MarkupRate> {
    if bps > MAX_MARKUP_BPS {
        return Err(ValidationError::OutOfRange {
            field: "markup".to_string(),
            min: 0,
            max: i64::from(MAX_MARKUP_BPS / 100),
        });
    }

    Ok(MarkupRate::from_bps(bps))
}

/// Validates a markup typed as a percentage and converts it.
///
/// ## Example
/// ```rust
/// use cabinet_core::validation::validate_markup_percentage;
///
/// assert_eq!(validate_markup_percentage(30.0).unwrap().bps(), 3000);
/// assert!(validate_markup_percentage(-1.0).is_err());
/// assert!(validate_markup_percentage(150.0).is_err());
/// ```
pub fn validate_markup_percentage(pct: f64) -> ValidationResult<MarkupRate> {
    if !pct.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "markup".to_string(),
            reason: "must be a number".to_string(),
        });
    }

    if pct < 0.0 || pct > f64::from(MAX_MARKUP_BPS) / 100.0 {
        return Err(ValidationError::OutOfRange {
            field: "markup".to_string(),
            min: 0,
            max: i64::from(MAX_MARKUP_BPS / 100),
        });
    }

    validate_markup_bps(MarkupRate::from_percentage(pct).bps())
}

/// Validates a catalog price (non-negative, zero allowed).
pub fn validate_price(price: Money, field: &str) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::OutOfRange {
            field: field.to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

/// Validates a shipping or delivery fee against the offered options.
///
/// ## Rules
/// - Must be one of $0, $100, $200, $300, $400
///
/// ## Example
/// ```rust
/// use cabinet_core::money::Money;
/// use cabinet_core::validation::validate_fee;
///
/// assert!(validate_fee(Money::from_dollars(200), "shipping fee").is_ok());
/// assert!(validate_fee(Money::from_dollars(150), "shipping fee").is_err());
/// ```
pub fn validate_fee(fee: Money, field: &str) -> ValidationResult<Money> {
    let allowed = FEE_OPTIONS_DOLLARS
        .iter()
        .any(|dollars| Money::from_dollars(*dollars) == fee);

    if !allowed {
        return Err(ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: FEE_OPTIONS_DOLLARS
                .iter()
                .map(|dollars| Money::from_dollars(*dollars).to_string())
                .collect(),
        });
    }

    Ok(fee)
}

/// Validates a fee given in whole dollars and converts it.
///
/// The dollar amount is checked against the option set before any
/// conversion, so out-of-range input is rejected rather than overflowing.
pub fn validate_fee_dollars(dollars: i64, field: &str) -> ValidationResult<Money> {
    if !FEE_OPTIONS_DOLLARS.contains(&dollars) {
        return Err(ValidationError::NotAllowed {
            field: field.to_string(),
            allowed: FEE_OPTIONS_DOLLARS
                .iter()
                .map(|dollars| Money::from_dollars(*dollars).to_string())
                .collect(),
        });
    }

    Ok(Money::from_dollars(dollars))
}

// =============================================================================
// String Validators
// =============================================================================

/// Validates a required text field, returning it trimmed.
pub fn validate_required(value: &str, field: &str) -> ValidationResult<String> {
    let value = value.trim();

    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(value.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(100).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(250_000).is_ok());

        assert!(validate_quantity(0).is_err());
        assert!(validate_quantity(-1).is_err());
    }

    #[test]
    fn test_validate_markup() {
        assert_eq!(validate_markup_bps(0).unwrap(), MarkupRate::zero());
        assert_eq!(validate_markup_bps(10_000).unwrap().bps(), 10_000);
        assert!(validate_markup_bps(10_001).is_err());

        assert_eq!(validate_markup_percentage(0.0).unwrap().bps(), 0);
        assert_eq!(validate_markup_percentage(100.0).unwrap().bps(), 10_000);
        assert!(validate_markup_percentage(100.5).is_err());
        assert!(validate_markup_percentage(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price(Money::zero(), "price").is_ok());
        assert!(validate_price(Money::from_cents(1099), "price").is_ok());
        assert!(validate_price(Money::from_cents(-1), "price").is_err());
    }

    #[test]
    fn test_validate_fee() {
        for dollars in FEE_OPTIONS_DOLLARS {
            assert!(validate_fee(Money::from_dollars(dollars), "delivery fee").is_ok());
        }
        assert!(validate_fee(Money::from_dollars(500), "delivery fee").is_err());
        assert!(validate_fee(Money::from_cents(10_001), "delivery fee").is_err());
    }

    #[test]
    fn test_validate_fee_dollars() {
        assert_eq!(
            validate_fee_dollars(300, "shipping fee").unwrap(),
            Money::from_dollars(300)
        );
        assert!(validate_fee_dollars(250, "shipping fee").is_err());
        assert!(validate_fee_dollars(-100, "shipping fee").is_err());

        let err = validate_fee_dollars(100_000_000_000_000_000, "shipping fee").unwrap_err();
        assert!(matches!(err, ValidationError::NotAllowed { .. }));
        assert!(validate_fee_dollars(i64::MAX, "delivery fee").is_err());
    }

    #[test]
    fn test_validate_required() {
        assert_eq!(validate_required("  B12 ", "item").unwrap(), "B12");
        assert!(validate_required("   ", "item").is_err());
    }
}
