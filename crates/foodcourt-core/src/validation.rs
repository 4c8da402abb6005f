//! # Validation Module
//!
//! Parsing and validation of the whitespace-delimited tokens typed at the
//! terminal.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Token Handling                                     │
//! │                                                                         │
//! │  Layer 1: TokenReader (foodcourt-cli)                                   │
//! │  └── Splits stdin into tokens, discards the rest of a rejected line     │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── Numeric format checks                                              │
//! │  └── Range checks against the catalog                                   │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Order / Billing                                               │
//! │  └── Overflow checks while accumulating                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use foodcourt_core::order::MenuChoice;
//! use foodcourt_core::validation::{parse_choice, parse_quantity};
//!
//! assert_eq!(parse_choice("0", 5).unwrap(), MenuChoice::Done);
//! assert_eq!(parse_choice("3", 5).unwrap(), MenuChoice::Item(2));
//! assert!(parse_choice("6", 5).is_err());
//! assert_eq!(parse_quantity("4").unwrap(), 4);
//! ```

use std::num::IntErrorKind;

use crate::error::ValidationError;
use crate::order::MenuChoice;
use crate::DONE_SENTINEL;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Parses a menu choice token.
///
/// ## Rules
/// - Must be an integer
/// - `0` ends collection ([`MenuChoice::Done`])
/// - `1..=catalog_len` selects an item (converted to a 0-based index)
/// - Anything else is [`ValidationError::OutOfRange`]
pub fn parse_choice(token: &str, catalog_len: usize) -> ValidationResult<MenuChoice> {
    let choice = parse_integer("choice", token)?;
    let max = catalog_len as i64;

    if choice == DONE_SENTINEL {
        return Ok(MenuChoice::Done);
    }

    if choice < 0 || choice > max {
        return Err(ValidationError::OutOfRange {
            field: "choice".to_string(),
            min: 0,
            max,
        });
    }

    Ok(MenuChoice::Item((choice - 1) as usize))
}

/// Parses a quantity token.
///
/// ## Rules
/// - Must be an integer
/// - Must be non-negative (zero is accepted and changes nothing)
/// - Must fit in `u32`
pub fn parse_quantity(token: &str) -> ValidationResult<u32> {
    let qty = parse_integer("quantity", token)?;

    if qty < 0 {
        return Err(ValidationError::Negative {
            field: "quantity".to_string(),
        });
    }

    u32::try_from(qty).map_err(|_| ValidationError::TooLarge {
        field: "quantity".to_string(),
    })
}

/// Interprets a yes/no answer.
///
/// Only the first character matters: `y` or `Y` means yes, anything else
/// (including an empty token) means no.
pub fn parse_yes_no(token: &str) -> bool {
    matches!(token.trim_start().chars().next(), Some('y' | 'Y'))
}

fn parse_integer(field: &str, token: &str) -> ValidationResult<i64> {
    let token = token.trim();
    if token.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    token.parse::<i64>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => ValidationError::TooLarge {
            field: field.to_string(),
        },
        IntErrorKind::NegOverflow => ValidationError::Negative {
            field: field.to_string(),
        },
        _ => ValidationError::InvalidFormat {
            field: field.to_string(),
            value: token.to_string(),
        },
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
