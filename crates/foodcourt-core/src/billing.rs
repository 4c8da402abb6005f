//! # Billing Module
//!
//! Subtotal, tax, tip and total.
//!
//! ## Calculation Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Order ──► compute_subtotal ──► Σ price × qty                           │
//! │                  │                                                      │
//! │                  ▼                                                      │
//! │  CustomerStatus ──► compute_tax ──► Student: $0.00                      │
//! │                  │                  General: subtotal × 9% (to the cent)│
//! │                  ▼                                                      │
//! │  TipResponse ──► resolve_tip ──► Declined / bad input: $0.00            │
//! │                  │               Amount: parsed amount                  │
//! │                  ▼                                                      │
//! │  Bill.total = subtotal + tax + tip                                      │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Bills are never stored; they are recomputed from the order whenever the
//! billing logic runs.

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::money::Money;
use crate::order::Order;
use crate::types::{CustomerStatus, TaxRate};

/// Largest tip a customer can add ($10,000.00).
pub const MAX_TIP: Money = Money::from_cents(1_000_000);

/// Sum of `price × quantity` over the catalog.
#[inline]
pub fn compute_subtotal(order: &Order, catalog: &Catalog) -> Money {
    order.subtotal(catalog)
}

/// Tax owed on `subtotal`.
///
/// Students pay no tax regardless of the subtotal; everyone else pays
/// `subtotal × rate`, rounded half-up to the cent.
pub fn compute_tax(subtotal: Money, status: CustomerStatus, rate: TaxRate) -> Money {
    if status.is_tax_exempt() {
        Money::zero()
    } else {
        subtotal.calculate_tax(rate)
    }
}

// =============================================================================
// Tip
// =============================================================================

/// What the customer answered to the tip questions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TipResponse {
    /// Answered "no" to "Would you like to add a tip?".
    Declined,
    /// Answered "yes" and then typed this text (None if input ended).
    Amount(Option<String>),
}

/// Result of [`resolve_tip`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipOutcome {
    pub tip: Money,
    /// Set when the typed amount was rejected and the tip fell back to zero.
    pub rejected: Option<ValidationError>,
}

/// Turns a tip response into an amount.
///
/// ## Single-Shot Fallback
/// ```text
/// "Would you like to add a tip?" ── n ──► tip = $0.00
///          │
///          y
///          ▼
/// "Enter the tip amount: $" ── "2.00" ──► tip = $2.00
///          │
///          └── "-1" / "abc" / over MAX_TIP ──► tip = $0.00 (rejected, NOT re-prompted)
/// ```
pub fn resolve_tip(response: &TipResponse) -> TipOutcome {
    let text = match response {
        TipResponse::Declined => {
            return TipOutcome {
                tip: Money::zero(),
                rejected: None,
            }
        }
        TipResponse::Amount(text) => text.as_deref().unwrap_or(""),
    };

    match Money::parse_amount(text) {
        Ok(tip) if tip > MAX_TIP => TipOutcome {
            tip: Money::zero(),
            rejected: Some(ValidationError::TooLarge {
                field: "tip".to_string(),
            }),
        },
        Ok(tip) => TipOutcome {
            tip,
            rejected: None,
        },
        Err(err) => TipOutcome {
            tip: Money::zero(),
            rejected: Some(err),
        },
    }
}

// =============================================================================
// Bill
// =============================================================================

/// Derived totals for one order.
///
/// ## Invariants
/// - `tax == 0` for students
/// - `tip >= 0`
/// - `total == subtotal + tax + tip`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bill {
    pub subtotal: Money,
    pub tax: Money,
    pub tip: Money,
    pub total: Money,
}

impl Bill {
    /// Computes the bill for the current order state.
    ///
    /// A `tip` outside `0..=MAX_TIP` is treated as no tip.
    pub fn compute(
        order: &Order,
        catalog: &Catalog,
        status: CustomerStatus,
        rate: TaxRate,
        tip: Money,
    ) -> Self {
        let subtotal = compute_subtotal(order, catalog);
        let tax = compute_tax(subtotal, status, rate);
        let tip = if tip.is_negative() || tip > MAX_TIP {
            Money::zero()
        } else {
            tip
        };

        Bill {
            subtotal,
            tax,
            tip,
            total: subtotal + tax + tip,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
