//! # Catalog Module
//!
//! The fixed menu and its table layout.
//!
//! ## Menu Layout
//! ```text
//! =====================================================
//!         Welcome to Ohlone College Food Court
//! =====================================================
//!
//! Address: 43600 Mission Blvd, Fremont, CA 94539
//! Phone: (510) 659-6000
//!
//! ======================= Menu ========================
//!
//! No  Item                                        Price
//! -----------------------------------------------------
//! 1   Cheeseburger                                $8.25
//! ...
//! -----------------------------------------------------
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::types::{CatalogEntry, StoreInfo};
use crate::LINE_WIDTH;

/// Immutable, ordered list of menu entries.
///
/// Menu numbers shown to the customer are 1-based; indices used internally
/// (by [`crate::order::Order`]) are 0-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<CatalogEntry>) -> Self {
        Catalog { entries }
    }

    /// The food court's five burgers.
    pub fn food_court() -> Self {
        Catalog::new(vec![
            CatalogEntry::new("Cheeseburger", Money::from_major_minor(8, 25)),
            CatalogEntry::new("Veggie Burger", Money::from_major_minor(9, 75)),
            CatalogEntry::new("Bacon Cheeseburger", Money::from_major_minor(9, 25)),
            CatalogEntry::new("Mushroom Burger", Money::from_major_minor(8, 99)),
            CatalogEntry::new("Bean Burger", Money::from_major_minor(9, 95)),
        ])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry at a 0-based index.
    pub fn get(&self, index: usize) -> Option<&CatalogEntry> {
        self.entries.get(index)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Renders the welcome banner and the numbered menu table.
    pub fn render_menu(&self, store: &StoreInfo) -> String {
        let double_rule = "=".repeat(LINE_WIDTH);
        let rule = "-".repeat(LINE_WIDTH);
        let welcome = format!("Welcome to {}", store.name);

        let mut out = String::new();
        out.push('\n');
        out.push_str(&format!("{double_rule}\n"));
        out.push_str(&format!("{welcome:^width$}\n", width = LINE_WIDTH));
        out.push_str(&format!("{double_rule}\n\n"));
        out.push_str(&format!("Address: {}\n", store.address));
        out.push_str(&format!("Phone: {}\n\n", store.phone));
        out.push_str(&format!("{:=^width$}\n\n", " Menu ", width = LINE_WIDTH));
        out.push_str(&format!("{:<4}{:<25}{:>24}\n", "No", "Item", "Price"));
        out.push_str(&format!("{rule}\n"));
        for (i, entry) in self.entries.iter().enumerate() {
            out.push_str(&format!(
                "{:<4}{:<25}{:>24}\n",
                i + 1,
                entry.name,
                entry.price
            ));
        }
        out.push_str(&format!("{rule}\n"));
        out
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::food_court()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_food_court_catalog() {
        let catalog = Catalog::food_court();
        assert_eq!(catalog.len(), 5);
        assert_eq!(catalog.get(0).unwrap().name, "Cheeseburger");
        assert_eq!(catalog.get(1).unwrap().price.cents(), 975);
        assert_eq!(catalog.get(3).unwrap().price.cents(), 899);
        assert!(catalog.get(5).is_none());
    }

    #[test]
    fn test_render_menu_lists_every_entry() {
        let catalog = Catalog::food_court();
        let menu = catalog.render_menu(&StoreInfo::default());

        assert!(menu.contains("Welcome to Ohlone College Food Court"));
        assert!(menu.contains("Phone: (510) 659-6000"));
        assert!(menu.contains("1   Cheeseburger"));
        assert!(menu.contains("5   Bean Burger"));
        assert!(menu.contains("$9.95"));

        let row = menu
            .lines()
            .find(|l| l.starts_with("2   "))
            .unwrap();
        assert_eq!(row.len(), LINE_WIDTH);
        assert!(row.ends_with("$9.75"));
    }
}
