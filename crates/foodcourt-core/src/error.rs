//! # Error Types
//!
//! Domain-specific error types for foodcourt-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  foodcourt-core errors (this file)                                      │
//! │  ├── CoreError        - Order/billing rule violations                   │
//! │  └── ValidationError  - Malformed or out-of-range tokens                │
//! │                                                                         │
//! │  foodcourt-cli errors (separate crate)                                  │
//! │  └── AppError         - Console, config and receipt file failures       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → OrderSession (re-prompt / default) │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, value, item)
//! 3. Errors are enum variants, never String
//! 4. None of these errors is fatal: the session recovers from all of them

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// Every variant is recoverable: the session shows a message and stays in
/// its current state without touching the order.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Menu index does not resolve to a catalog entry.
    #[error("Menu item not found: {index}")]
    ItemNotFound { index: usize },

    /// Accumulated quantity for one item would overflow.
    ///
    /// ## When This Occurs
    /// ```text
    /// Cheeseburger already ordered: 4294967290
    ///      │
    ///      ▼
    /// select_item(Cheeseburger, 10)
    ///      │
    ///      ▼
    /// QuantityTooLarge { item: "Cheeseburger", current: 4294967290, requested: 10 }
    ///      │
    ///      ▼
    /// Terminal shows the invalid quantity message, order unchanged
    /// ```
    #[error("Quantity for {item} cannot grow from {current} by {requested}")]
    QuantityTooLarge {
        item: String,
        current: u32,
        requested: u32,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a typed token doesn't meet requirements.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required token is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Token is not a number (or not the kind of number expected).
    #[error("{field} has invalid format: '{value}'")]
    InvalidFormat { field: String, value: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must not be negative.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// Value exceeds the largest representable amount.
    #[error("{field} is too large")]
    TooLarge { field: String },
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
        let err = CoreError::QuantityTooLarge {
            item: "Cheeseburger".to_string(),
            current: 4_294_967_290,
            requested: 10,
        };
        assert_eq!(
            err.to_string(),
            "Quantity for Cheeseburger cannot grow from 4294967290 by 10"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 0,
            max: 5,
        };
        assert_eq!(err.to_string(), "choice must be between 0 and 5");

        let err = ValidationError::InvalidFormat {
            field: "tip".to_string(),
            value: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "tip has invalid format: 'abc'");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Negative {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
