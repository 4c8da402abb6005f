//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  With binary floats:                                                    │
//! │    8.99 * 3 = 26.969999999999995  ❌ WRONG!                             │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    899 cents * 3 = 2697 cents → "$26.97"                                │
//! │    Tax is rounded once, to the cent, with integer math                  │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use foodcourt_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(825); // $8.25
//!
//! // Arithmetic operations
//! let doubled = price * 2u32;                 // $16.50
//! let total = price + Money::from_cents(500); // $13.25
//!
//! // User-typed amounts go through the parser, never through f64
//! let tip = Money::parse_amount("2.50").unwrap();
//! assert_eq!(tip.cents(), 250);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

use crate::error::ValidationError;
use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Parsing can see negative amounts before rejecting them
/// - **Single field tuple struct**: Zero-cost abstraction over i64
///
/// ## Where Money is Used
/// ```text
/// CatalogEntry.price ──► Order line (price × qty) ──► Bill.subtotal
///                                                         │
///                              Bill.tax ◄── TaxRate ◄─────┤
///                              Bill.tip ◄── parse_amount  │
///                                                         ▼
///                                                    Bill.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// let price = Money::from_cents(975); // Represents $9.75
    /// assert_eq!(price.cents(), 975);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (dollars and cents).
    ///
    /// ## Example
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// let price = Money::from_major_minor(8, 99); // $8.99
    /// assert_eq!(price.cents(), 899);
    /// ```
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax rounded half-up to the cent.
    ///
    /// ## Implementation
    /// We use integer math: `(amount * rate + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5 cent)
    ///
    /// ## Example
    /// ```rust
    /// use foodcourt_core::money::Money;
    /// use foodcourt_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(2575); // $25.75
    /// let rate = TaxRate::from_bps(900);      // 9%
    ///
    /// // $25.75 × 9% = $2.3175 → rounds to $2.32
    /// assert_eq!(subtotal.calculate_tax(rate).cents(), 232);
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // i128 so that huge orders cannot overflow the intermediate product
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by an ordered quantity.
    ///
    /// ## Example
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(825); // $8.25
    /// assert_eq!(unit_price.multiply_quantity(2).cents(), 1650);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0 * qty as i64)
    }

    /// Renders the bare figure with two decimals and no currency symbol.
    ///
    /// Used where the `$` is already part of a label (`Subtotal: $25.75`).
    pub fn amount(&self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        format!("{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }

    /// Parses a user-typed decimal amount into cents.
    ///
    /// ## Rules
    /// - Optional leading `$` and surrounding whitespace are ignored
    /// - Digits with at most one `.`; either side of the dot may be empty,
    ///   but not both (`"2"`, `"2."`, `".75"`, `"2.50"`)
    /// - Digits past the second decimal round half-up (`"1.005"` → 101 cents)
    /// - A leading `-` on a non-zero amount is [`ValidationError::Negative`]
    ///
    /// ## Example
    /// ```rust
    /// use foodcourt_core::money::Money;
    ///
    /// assert_eq!(Money::parse_amount("2").unwrap().cents(), 200);
    /// assert_eq!(Money::parse_amount("$3.5").unwrap().cents(), 350);
    /// assert!(Money::parse_amount("-1").is_err());
    /// assert!(Money::parse_amount("two").is_err());
    /// ```
    pub fn parse_amount(text: &str) -> Result<Money, ValidationError> {
        const FIELD: &str = "amount";

        let invalid = || ValidationError::InvalidFormat {
            field: FIELD.to_string(),
            value: text.to_string(),
        };
        let too_large = || ValidationError::TooLarge {
            field: FIELD.to_string(),
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::Required {
                field: FIELD.to_string(),
            });
        }

        let (negative, unsigned) = match trimmed.as_bytes()[0] {
            b'-' => (true, &trimmed[1..]),
            b'+' => (false, &trimmed[1..]),
            _ => (false, trimmed),
        };
        let unsigned = unsigned.strip_prefix('$').unwrap_or(unsigned);

        let (whole, fraction) = match unsigned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (unsigned, ""),
        };

        let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if (whole.is_empty() && fraction.is_empty()) || !all_digits(whole) || !all_digits(fraction)
        {
            return Err(invalid());
        }

        let mut cents: i64 = 0;
        for digit in whole.bytes() {
            cents = cents
                .checked_mul(10)
                .and_then(|c| c.checked_add(i64::from(digit - b'0')))
                .ok_or_else(too_large)?;
        }
        cents = cents.checked_mul(100).ok_or_else(too_large)?;

        let mut frac_digits = fraction.bytes().map(|b| i64::from(b - b'0'));
        let tenths = frac_digits.next().unwrap_or(0);
        let hundredths = frac_digits.next().unwrap_or(0);
        let round_up = frac_digits.next().is_some_and(|d| d >= 5);

        cents = cents
            .checked_add(tenths * 10 + hundredths + i64::from(round_up))
            .ok_or_else(too_large)?;

        if negative && cents > 0 {
            return Err(ValidationError::Negative {
                field: FIELD.to_string(),
            });
        }

        Ok(Money(cents))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display shows money as `$12.34` / `-$5.50`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let text = format!("{}${}.{:02}", sign, self.dollars().abs(), self.cents_part());
        // pad() so that width/alignment flags work in table layouts
        f.pad(&text)
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by an ordered quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
