//! # Receipt Module
//!
//! Structured receipt model and its one canonical text layout.
//!
//! ## One Model, Two Destinations
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Order + Catalog + Bill + BillNumber                                    │
//! │              │                                                          │
//! │              ▼                                                          │
//! │       Receipt::new()  ──► Receipt { lines, bill, ... }                  │
//! │              │                                                          │
//! │              ▼                                                          │
//! │       Receipt::render() ──► String                                      │
//! │              │                                                          │
//! │        ┌─────┴──────┐                                                   │
//! │        ▼            ▼                                                   │
//! │     stdout       bill.txt      (byte-identical text)                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Layout
//! ```text
//! =====================================================
//!                         BILL
//! =====================================================
//!
//! Bill Number: 1234
//! Date: 2026-10-18 12:30
//!
//! Ohlone College Food Court
//! Address: 43600 Mission Blvd, Fremont, CA 94539
//! Phone: (510) 659-6000
//! -----------------------------------------------------
//! Item                     Quantity               Price
//! -----------------------------------------------------
//! Cheeseburger             2                     $16.50
//! Bacon Cheeseburger       1                      $9.25
//! -----------------------------------------------------
//!                                Subtotal:       $25.75
//!                                     Tax:        $2.32
//!                                     Tip:        $0.00
//!                                   Total:       $28.07
//! =====================================================
//!             Thank you for dining with us!
//! =====================================================
//! ```
//! The tip row is always printed, even when the tip is zero.

use std::fmt;
use std::ops::RangeInclusive;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::billing::Bill;
use crate::catalog::Catalog;
use crate::error::ValidationError;
use crate::money::Money;
use crate::order::Order;
use crate::types::StoreInfo;
use crate::LINE_WIDTH;

/// Valid bill numbers.
pub const BILL_NUMBER_RANGE: RangeInclusive<u16> = 1000..=2000;

const CLOSING_MESSAGE: &str = "Thank you for dining with us!";

// =============================================================================
// Bill Number
// =============================================================================

/// Decorative receipt number in [`BILL_NUMBER_RANGE`].
///
/// Never used for lookup or reconciliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillNumber(u16);

impl BillNumber {
    pub fn new(value: u16) -> Result<Self, ValidationError> {
        if !BILL_NUMBER_RANGE.contains(&value) {
            return Err(ValidationError::OutOfRange {
                field: "bill number".to_string(),
                min: i64::from(*BILL_NUMBER_RANGE.start()),
                max: i64::from(*BILL_NUMBER_RANGE.end()),
            });
        }
        Ok(BillNumber(value))
    }

    /// Clamps `value` into [`BILL_NUMBER_RANGE`].
    pub fn saturating(value: u16) -> Self {
        BillNumber(value.clamp(*BILL_NUMBER_RANGE.start(), *BILL_NUMBER_RANGE.end()))
    }

    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }
}

impl fmt::Display for BillNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Receipt
// =============================================================================

/// One printed item row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiptLine {
    pub name: String,
    pub quantity: u32,
    /// `unit price × quantity`
    pub extended: Money,
}

/// Everything that appears on a printed bill.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    pub bill_number: BillNumber,
    pub issued_at: NaiveDateTime,
    pub store: StoreInfo,
    /// Only entries with a positive quantity, in catalog order.
    pub lines: Vec<ReceiptLine>,
    pub bill: Bill,
}

impl Receipt {
    /// Snapshots the order into a receipt.
    pub fn new(
        bill_number: BillNumber,
        issued_at: NaiveDateTime,
        store: StoreInfo,
        order: &Order,
        catalog: &Catalog,
        bill: Bill,
    ) -> Self {
        let lines = order
            .lines(catalog)
            .into_iter()
            .map(|line| ReceiptLine {
                name: line.entry.name.clone(),
                quantity: line.quantity,
                extended: line.extended,
            })
            .collect();

        Receipt {
            bill_number,
            issued_at,
            store,
            lines,
            bill,
        }
    }

    /// Renders the canonical receipt text (console and file alike).
    pub fn render(&self) -> String {
        let double_rule = "=".repeat(LINE_WIDTH);
        let rule = "-".repeat(LINE_WIDTH);

        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("{double_rule}\n"));
        out.push_str(&format!("{}\n", centered("BILL")));
        out.push_str(&format!("{double_rule}\n\n"));
        out.push_str(&format!("Bill Number: {}\n", self.bill_number));
        out.push_str(&format!("Date: {}\n\n", self.issued_at.format("%Y-%m-%d %H:%M")));
        out.push_str(&format!("{}\n", self.store.name));
        out.push_str(&format!("Address: {}\n", self.store.address));
        out.push_str(&format!("Phone: {}\n", self.store.phone));
        out.push_str(&format!("{rule}\n"));
        out.push_str(&format!("{:<25}{:<8}{:>20}\n", "Item", "Quantity", "Price"));
        out.push_str(&format!("{rule}\n"));
        for line in &self.lines {
            out.push_str(&format!(
                "{:<25}{:<8}{:>20}\n",
                line.name, line.quantity, line.extended
            ));
        }
        out.push_str(&format!("{rule}\n"));
        out.push_str(&total_row("Subtotal:", self.bill.subtotal));
        out.push_str(&total_row("Tax:", self.bill.tax));
        out.push_str(&total_row("Tip:", self.bill.tip));
        out.push_str(&total_row("Total:", self.bill.total));
        out.push_str(&format!("{double_rule}\n"));
        out.push_str(&format!("{}\n", centered(CLOSING_MESSAGE)));
        out.push_str(&format!("{double_rule}\n"));
        out
    }
}

fn centered(text: &str) -> String {
    format!("{text:^width$}", width = LINE_WIDTH)
        .trim_end()
        .to_string()
}

fn total_row(label: &str, amount: Money) -> String {
    format!("{:>40}{:>13}\n", label, amount)
}

// =============================================================================
// Unit Tests
// =============================================================================
