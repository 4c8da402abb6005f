//! # Domain Types
//!
//! Core domain types used throughout the food court terminal.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  CatalogEntry   │   │    StoreInfo    │   │    TaxRate      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  name           │   │  name           │   │  bps (u32)      │       │
//! │  │  price (Money)  │   │  address        │   │  900 = 9%       │       │
//! │  └─────────────────┘   │  phone          │   └─────────────────┘       │
//! │                        └─────────────────┘                              │
//! │  ┌─────────────────┐                                                    │
//! │  │ CustomerStatus  │                                                    │
//! │  │  ─────────────  │                                                    │
//! │  │  Student        │  (tax exempt)                                      │
//! │  │  General        │                                                    │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 900 bps = 9% (the food court's sales tax)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        SALES_TAX_RATE
    }
}

/// Sales tax charged to non-students (9%).
pub const SALES_TAX_RATE: TaxRate = TaxRate::from_bps(900);

// =============================================================================
// Catalog Entry
// =============================================================================

/// One item on the menu.
///
/// Entries are fixed at startup and never change for the session's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogEntry {
    /// Display name shown on the menu and on the receipt.
    pub name: String,

    /// Unit price (non-negative).
    pub price: Money,
}

impl CatalogEntry {
    pub fn new(name: impl Into<String>, price: Money) -> Self {
        CatalogEntry {
            name: name.into(),
            price,
        }
    }
}

// =============================================================================
// Store Info
// =============================================================================

/// Vendor details printed on the menu banner and the receipt header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreInfo {
    pub name: String,
    pub address: String,
    pub phone: String,
}

impl Default for StoreInfo {
    fn default() -> Self {
        StoreInfo {
            name: "Ohlone College Food Court".to_string(),
            address: "43600 Mission Blvd, Fremont, CA 94539".to_string(),
            phone: "(510) 659-6000".to_string(),
        }
    }
}

// =============================================================================
// Customer Status
// =============================================================================

/// Whether the customer pays sales tax.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerStatus {
    /// Students are tax exempt.
    Student,
    /// Everyone else pays [`SALES_TAX_RATE`].
    General,
}

impl CustomerStatus {
    pub fn from_is_student(is_student: bool) -> Self {
        if is_student {
            CustomerStatus::Student
        } else {
            CustomerStatus::General
        }
    }

    #[inline]
    pub const fn is_tax_exempt(&self) -> bool {
        matches!(self, CustomerStatus::Student)
    }
}

impl Default for CustomerStatus {
    fn default() -> Self {
        CustomerStatus::General
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tax_rate_from_bps() {
        let rate = TaxRate::from_bps(900);
        assert_eq!(rate.bps(), 900);
    }

    #[test]
    fn test_default_tax_rate_is_sales_tax() {
        assert_eq!(TaxRate::default(), SALES_TAX_RATE);
        assert_eq!(SALES_TAX_RATE.bps(), 900);
    }

    #[test]
    fn test_customer_status() {
        assert_eq!(CustomerStatus::from_is_student(true), CustomerStatus::Student);
        assert!(CustomerStatus::Student.is_tax_exempt());
        assert!(!CustomerStatus::default().is_tax_exempt());
    }
}
