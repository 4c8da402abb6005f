//! # Bill Numbers
//!
//! Decorative receipt numbers. The terminal draws a fresh one from a
//! generator seeded with the wall clock each time a bill is printed; tests
//! inject a fixed number instead.

use std::time::{SystemTime, UNIX_EPOCH};

use foodcourt_core::receipt::{BillNumber, BILL_NUMBER_RANGE};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Supplies the number printed on the next bill.
pub trait BillNumberSource {
    fn next_bill_number(&mut self) -> BillNumber;
}

/// Uniform in [`BILL_NUMBER_RANGE`], reseeded from the clock on every call.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClockSeeded;

impl BillNumberSource for ClockSeeded {
    fn next_bill_number(&mut self) -> BillNumber {
        let seed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or_default();
        let mut rng = StdRng::seed_from_u64(seed);
        BillNumber::saturating(rng.gen_range(BILL_NUMBER_RANGE))
    }
}

/// Always the same number.
#[derive(Debug, Clone, Copy)]
pub struct FixedBillNumber(pub BillNumber);

impl BillNumberSource for FixedBillNumber {
    fn next_bill_number(&mut self) -> BillNumber {
        self.0
    }
}
