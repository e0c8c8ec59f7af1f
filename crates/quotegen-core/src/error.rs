//! # Error Types
//!
//! Domain-specific error types for quotegen-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  quotegen-core errors (this file)                                      │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  quotegen-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  quotegen-pdf errors (separate crate)                                  │
//! │  └── RenderError      - PDF layout/write failures                      │
//! │                                                                         │
//! │  Nothing here is fatal: every failure returns control to the           │
//! │  interactive editing state with the in-memory ledger intact.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, index, etc.)
//! 3. Errors are enum variants, never String
//! 4. Each error variant maps to a user-facing message

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// These errors represent business rule violations or domain logic failures.
/// They should be caught and translated to user-friendly messages.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A document was assembled from a ledger with no items.
    ///
    /// ## When This Occurs
    /// - "Save" or "Generate PDF" pressed before any item was added
    ///
    /// A document with no line items is invalid for both persistence
    /// and export, so the assembler rejects it up front.
    #[error("Document has no line items")]
    EmptyLedger,

    /// A ledger index does not point at an existing item.
    ///
    /// ## When This Occurs
    /// - Removing an item when nothing is selected
    /// - Removing with a stale index after another removal
    #[error("No item at index {index} (ledger has {len} items)")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when user input doesn't meet requirements.
/// Used for early validation before business logic runs. No state is
/// mutated when one of these is returned.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be strictly positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    MustBeNonNegative { field: String },

    /// Invalid format (e.g., non-numeric quantity or price).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::IndexOutOfBounds { index: 4, len: 2 };
        assert_eq!(err.to_string(), "No item at index 4 (ledger has 2 items)");

        let err = CoreError::EmptyLedger;
        assert_eq!(err.to_string(), "Document has no line items");
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "client name".to_string(),
        };
        assert_eq!(err.to_string(), "client name is required");

        let err = ValidationError::InvalidFormat {
            field: "quantity".to_string(),
            reason: "not a number".to_string(),
        };
        assert_eq!(err.to_string(), "quantity has invalid format: not a number");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "client name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
