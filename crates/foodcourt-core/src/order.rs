//! # Order Module
//!
//! Quantity accumulation per menu entry.
//!
//! ## Order Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Accumulation                                   │
//! │                                                                         │
//! │  Terminal Input           Parsed Choice           Order State Change    │
//! │  ──────────────           ─────────────           ──────────────────    │
//! │                                                                         │
//! │  "1" then "2" ──────────► Item(0), qty 2 ───────► quantities[0] += 2    │
//! │                                                                         │
//! │  "1" then "3" ──────────► Item(0), qty 3 ───────► quantities[0] += 3    │
//! │                                                                         │
//! │  "9" / "x" / "-1" ──────► rejected ─────────────► (unchanged)           │
//! │                                                                         │
//! │  "0" ───────────────────► Done ─────────────────► (unchanged, loop ends)│
//! │                                                                         │
//! │  NOTE: quantities only ever grow; there is no remove operation.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::CatalogEntry;

/// A parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    /// The `0` sentinel: stop collecting.
    Done,
    /// 0-based catalog index.
    Item(usize),
}

/// Quantities ordered so far, one slot per catalog entry.
///
/// ## Invariants
/// - `quantities.len()` equals the catalog size
/// - Every slot starts at 0 and never decreases
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    quantities: Vec<u32>,
}

/// An ordered catalog entry with its quantity and extended price.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine<'a> {
    pub entry: &'a CatalogEntry,
    pub quantity: u32,
    pub extended: Money,
}

impl Order {
    /// Creates an empty order sized for `catalog`.
    pub fn new(catalog: &Catalog) -> Self {
        Order {
            quantities: vec![0; catalog.len()],
        }
    }

    /// Adds `quantity` to the selected entry.
    ///
    /// ## Behavior
    /// - `MenuChoice::Done` is a no-op
    /// - Selecting the same item again sums quantities
    /// - On error nothing is changed
    pub fn select_item(&mut self, choice: MenuChoice, quantity: u32) -> CoreResult<()> {
        let index = match choice {
            MenuChoice::Done => return Ok(()),
            MenuChoice::Item(index) => index,
        };

        let slot = self
            .quantities
            .get_mut(index)
            .ok_or(CoreError::ItemNotFound { index })?;

        let current = *slot;
        *slot = current
            .checked_add(quantity)
            .ok_or_else(|| CoreError::QuantityTooLarge {
                item: format!("item #{}", index + 1),
                current,
                requested: quantity,
            })?;

        Ok(())
    }

    /// Quantity ordered for a 0-based index (0 if out of range).
    pub fn quantity(&self, index: usize) -> u32 {
        self.quantities.get(index).copied().unwrap_or(0)
    }

    pub fn quantities(&self) -> &[u32] {
        &self.quantities
    }

    /// Total number of items across all entries.
    pub fn total_quantity(&self) -> u64 {
        self.quantities.iter().map(|&q| u64::from(q)).sum()
    }

    /// Entries with a positive quantity, in catalog order.
    pub fn lines<'a>(&self, catalog: &'a Catalog) -> Vec<OrderLine<'a>> {
        catalog
            .entries()
            .iter()
            .zip(&self.quantities)
            .filter(|&(_, &qty)| qty > 0)
            .map(|(entry, &quantity)| OrderLine {
                entry,
                quantity,
                extended: entry.price * quantity,
            })
            .collect()
    }

    /// `Σ price[i] * quantity[i]` over the whole catalog.
    pub fn subtotal(&self, catalog: &Catalog) -> Money {
        catalog
            .entries()
            .iter()
            .zip(&self.quantities)
            .map(|(entry, &qty)| entry.price * qty)
            .sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
