//! # Validation Module
//!
//! Input parsing and validation utilities for Quotegen.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Frontend (form fields / CLI flags)                           │
//! │  ├── Basic presence checks                                             │
//! │  └── Immediate user feedback                                           │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Text → typed value parsing (quantity, unit price)                 │
//! │  └── Business rule validation                                          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Database (SQLite)                                            │
//! │  ├── NOT NULL constraints                                              │
//! │  ├── UNIQUE constraint on quotation_number                             │
//! │  └── CHECK constraint on item quantity                                 │
//! │                                                                         │
//! │  Defense in depth: Multiple layers catch different errors              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Item fields arrive as raw text from the form input provider, so parsing
//! and validation are the same step here: a successful parse IS the
//! validation, and no ledger state changes on failure.

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a product/service description.
///
/// ## Rules
/// - Must not be empty
/// - Must be at most 200 characters
///
/// ## Example
/// ```rust
/// use quotegen_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Network cabling").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "product".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "product".to_string(),
            max: 200,
        });
    }

    Ok(name.to_string())
}

/// Validates a client name.
///
/// ## Rules
/// - Must not be empty (the only required client field)
/// - Must be at most 200 characters
pub fn validate_client_name(name: &str) -> ValidationResult<String> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "client name".to_string(),
        });
    }

    if name.len() > 200 {
        return Err(ValidationError::TooLong {
            field: "client name".to_string(),
            max: 200,
        });
    }

    Ok(name.to_string())
}

// =============================================================================
// Numeric Parsers
// =============================================================================

/// Parses a quantity entered as text.
///
/// ## Rules
/// - Must not be empty
/// - Must parse as a decimal number
/// - Must be strictly positive and finite
///
/// ## Example
/// ```rust
/// use quotegen_core::validation::parse_quantity;
///
/// assert_eq!(parse_quantity("2").unwrap(), 2.0);
/// assert_eq!(parse_quantity("1.5").unwrap(), 1.5);
/// assert!(parse_quantity("").is_err());
/// assert!(parse_quantity("-1").is_err());
/// assert!(parse_quantity("abc").is_err());
/// ```
pub fn parse_quantity(text: &str) -> ValidationResult<f64> {
    let text = text.trim();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: "quantity".to_string(),
        });
    }

    let qty: f64 = text.parse().map_err(|_| ValidationError::InvalidFormat {
        field: "quantity".to_string(),
        reason: "not a number".to_string(),
    })?;

    if !qty.is_finite() {
        return Err(ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "not a finite number".to_string(),
        });
    }

    if qty <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(qty)
}

/// Parses a unit price entered as text into integer-cent [`Money`].
///
/// ## Rules
/// - Must not be empty
/// - Thousands separators (`,`) are accepted and ignored
/// - At most two decimal places
/// - Must not be negative (zero is allowed: free-of-charge lines)
///
/// ## Why Not `f64::parse`?
/// Prices go straight into integer-cent money; parsing digits directly
/// avoids a float round-trip on the one path where user text becomes
/// stored currency.
///
/// ## Example
/// ```rust
/// use quotegen_core::validation::parse_unit_price;
///
/// assert_eq!(parse_unit_price("500").unwrap().cents(), 50_000);
/// assert_eq!(parse_unit_price("1,200.50").unwrap().cents(), 120_050);
/// assert_eq!(parse_unit_price("0.5").unwrap().cents(), 50);
/// assert!(parse_unit_price("").is_err());
/// assert!(parse_unit_price("-10").is_err());
/// assert!(parse_unit_price("10.999").is_err());
/// ```
pub fn parse_unit_price(text: &str) -> ValidationResult<Money> {
    let raw = text.trim();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: "unit price".to_string(),
        });
    }

    if raw.starts_with('-') {
        return Err(ValidationError::MustBeNonNegative {
            field: "unit price".to_string(),
        });
    }

    let cleaned: String = raw.chars().filter(|c| *c != ',').collect();

    let invalid = |reason: &str| ValidationError::InvalidFormat {
        field: "unit price".to_string(),
        reason: reason.to_string(),
    };

    let (major_text, minor_text) = match cleaned.split_once('.') {
        Some((major, minor)) => (major, minor),
        None => (cleaned.as_str(), ""),
    };

    if minor_text.len() > 2 {
        return Err(invalid("more than two decimal places"));
    }

    let major: i64 = if major_text.is_empty() {
        0
    } else {
        major_text.parse().map_err(|_| invalid("not a number"))?
    };

    let minor: i64 = if minor_text.is_empty() {
        0
    } else {
        // i64::parse accepts a leading sign; cents must be bare digits
        // so "5.-1" and "5.+1" cannot sneak through as money
        if !minor_text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid("not a number"));
        }
        let parsed: i64 = minor_text.parse().map_err(|_| invalid("not a number"))?;
        // "5" after the point means 50 cents, not 5
        if minor_text.len() == 1 {
            parsed * 10
        } else {
            parsed
        }
    };

    major
        .checked_mul(100)
        .and_then(|cents| cents.checked_add(minor))
        .map(Money::from_cents)
        .ok_or_else(|| invalid("amount too large"))
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_product_name() {
        assert_eq!(validate_product_name("  Widget ").unwrap(), "Widget");
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name("   ").is_err());
        assert!(validate_product_name(&"A".repeat(300)).is_err());
    }

    #[test]
    fn test_validate_client_name() {
        assert_eq!(validate_client_name("Acme Ltd").unwrap(), "Acme Ltd");
        assert!(validate_client_name("").is_err());
        assert!(validate_client_name(" \t ").is_err());
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("2").unwrap(), 2.0);
        assert_eq!(parse_quantity(" 1.5 ").unwrap(), 1.5);

        assert!(parse_quantity("").is_err());
        assert!(parse_quantity("0").is_err());
        assert!(parse_quantity("-2").is_err());
        assert!(parse_quantity("two").is_err());
        assert!(parse_quantity("inf").is_err());
        assert!(parse_quantity("NaN").is_err());
    }

    #[test]
    fn test_parse_unit_price() {
        assert_eq!(parse_unit_price("500").unwrap().cents(), 50_000);
        assert_eq!(parse_unit_price("500.00").unwrap().cents(), 50_000);
        assert_eq!(parse_unit_price("1200.5").unwrap().cents(), 120_050);
        assert_eq!(parse_unit_price("1,200.50").unwrap().cents(), 120_050);
        assert_eq!(parse_unit_price("0").unwrap().cents(), 0);
        assert_eq!(parse_unit_price(".75").unwrap().cents(), 75);
    }

    #[test]
    fn test_parse_unit_price_rejections() {
        assert!(parse_unit_price("").is_err());
        assert!(parse_unit_price("  ").is_err());
        assert!(parse_unit_price("-10").is_err());
        assert!(parse_unit_price("10.999").is_err());
        assert!(parse_unit_price("ten").is_err());
        assert!(parse_unit_price("10.x").is_err());
    }

    #[test]
    fn test_parse_unit_price_rejects_signed_minor_part() {
        // A sign after the decimal point is malformed, not arithmetic
        assert!(parse_unit_price("5.-1").is_err());
        assert!(parse_unit_price("5.+1").is_err());
    }
}
