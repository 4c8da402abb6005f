//! # Receipt Persistence
//!
//! Writes the rendered receipt to a text file. The file is created (or
//! truncated), written, flushed and closed within one call; the handle is
//! dropped on every path, including failures.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use foodcourt_core::receipt::Receipt;
use tracing::info;

use crate::error::{AppError, AppResult};

/// Saves `receipt` to `path` using the same layout as the console.
pub fn write_receipt(path: &Path, receipt: &Receipt) -> AppResult<()> {
    write_text(path, &receipt.render()).map_err(|source| AppError::Persist {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), bill_number = %receipt.bill_number, "Bill saved");
    Ok(())
}

fn write_text(path: &Path, text: &str) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(text.as_bytes())?;
    file.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use foodcourt_core::billing::Bill;
    use foodcourt_core::catalog::Catalog;
    use foodcourt_core::order::{MenuChoice, Order};
    use foodcourt_core::receipt::BillNumber;
    use foodcourt_core::{CustomerStatus, Money, StoreInfo, SALES_TAX_RATE};
    use std::fs;

    fn sample_receipt() -> Receipt {
        let catalog = Catalog::food_court();
        let mut order = Order::new(&catalog);
        order.select_item(MenuChoice::Item(1), 1).unwrap();
        let bill = Bill::compute(
            &order,
            &catalog,
            CustomerStatus::General,
            SALES_TAX_RATE,
            Money::from_cents(200),
        );
        let issued_at = NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap();
        Receipt::new(
            BillNumber::new(1500).unwrap(),
            issued_at,
            StoreInfo::default(),
            &order,
            &catalog,
            bill,
        )
    }

    #[test]
    fn test_file_matches_console_layout() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bill.txt");
        let receipt = sample_receipt();

        write_receipt(&path, &receipt).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), receipt.render());
    }

    #[test]
    fn test_overwrites_previous_bill() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("bill.txt");
        fs::write(&path, "stale bill ".repeat(100)).unwrap();

        write_receipt(&path, &sample_receipt()).unwrap();

        assert!(!fs::read_to_string(&path).unwrap().contains("stale"));
    }

    #[test]
    fn test_unwritable_path_reports_persist_error() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("no/such/dir/bill.txt");

        let err = write_receipt(&path, &sample_receipt()).unwrap_err();
        assert!(matches!(err, AppError::Persist { .. }));
    }
}
