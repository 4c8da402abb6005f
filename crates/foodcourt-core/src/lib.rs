//! # foodcourt-core: Pure Business Logic for the Food Court
//!
//! This crate is the **heart** of the food court ordering terminal. It contains
//! all ordering and billing logic as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Food Court Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Terminal (stdin / stdout)                       │   │
//! │  │    Menu ──► Choice/Quantity loop ──► Student? ──► Tip? ──► Bill │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ tokens                                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 foodcourt-cli (OrderSession)                    │   │
//! │  │    prompts, activity log, receipt file, bill numbers            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ foodcourt-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │  ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌──────────┐  │   │
//! │  │  │ catalog │ │  order  │ │ billing │ │ receipt │ │validation│  │   │
//! │  │  │ Catalog │ │  Order  │ │  Bill   │ │ Receipt │ │  tokens  │  │   │
//! │  │  └─────────┘ └─────────┘ └─────────┘ └─────────┘ └──────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO CLOCK • NO RANDOMNESS • PURE FUNCTIONS           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (CatalogEntry, TaxRate, StoreInfo, ...)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed menu and its table layout
//! - [`order`] - Quantity accumulation per menu entry
//! - [`billing`] - Subtotal, tax, tip and total
//! - [`receipt`] - Structured receipt model and its canonical layout
//! - [`validation`] - Parsing and validation of typed tokens
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use foodcourt_core::billing::Bill;
//! use foodcourt_core::catalog::Catalog;
//! use foodcourt_core::order::{MenuChoice, Order};
//! use foodcourt_core::types::{CustomerStatus, SALES_TAX_RATE};
//! use foodcourt_core::Money;
//!
//! let catalog = Catalog::food_court();
//! let mut order = Order::new(&catalog);
//! order.select_item(MenuChoice::Item(0), 2).unwrap(); // 2x Cheeseburger
//! order.select_item(MenuChoice::Item(2), 1).unwrap(); // 1x Bacon Cheeseburger
//!
//! let bill = Bill::compute(&order, &catalog, CustomerStatus::General, SALES_TAX_RATE, Money::zero());
//! assert_eq!(bill.subtotal.cents(), 2575);
//! assert_eq!(bill.tax.cents(), 232);
//! assert_eq!(bill.total.cents(), 2807);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod billing;
pub mod catalog;
pub mod error;
pub mod money;
pub mod order;
pub mod receipt;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Width of every rule line on the menu and the receipt.
pub const LINE_WIDTH: usize = 53;

/// Menu number that ends order collection.
pub const DONE_SENTINEL: i64 = 0;
