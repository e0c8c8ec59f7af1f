//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In many invoicing systems:                                             │
//! │    KES 10.00 / 3 = KES 3.33 (×3 = KES 9.99)  → Lost KES 0.01!          │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents                                            │
//! │    1000 cents / 3 = 333 cents (×3 = 999 cents)                         │
//! │    We KNOW we lost 1 cent, and handle it explicitly                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use quotegen_core::money::Money;
//!
//! // Create from cents (preferred)
//! let price = Money::from_cents(50_000); // KES 500.00
//!
//! // Line totals with a decimal quantity
//! let line = price.multiply_decimal(2.5); // KES 1,250.00
//! assert_eq!(line.cents(), 125_000);
//!
//! // Currency formatting for the table and totals block
//! assert_eq!(line.to_string(), "KES 1,250.00");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

use crate::types::TaxRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: Allows negative values for corrections/credits
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for JSON serialization
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  unit_price text ──► validation::parse_unit_price ──► Money             │
/// │                                                                         │
/// │  LineItem.unit_price ──► LineItem.line_total ──► Ledger.running_total   │
/// │                                                                         │
/// │  Document.total_amount ──► VAT calc ──► grand total on the PDF          │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use quotegen_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents KES 10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units (shillings and cents).
    ///
    /// ## Note
    /// For negative amounts, only the major unit should be negative.
    /// `from_major_minor(-5, 50)` = KES -5.50, not KES -4.50
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

    /// Returns the major unit (whole shillings) portion.
    #[inline]
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn minor(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount.
    ///
    /// ## Implementation
    /// Integer math: `(amount * bps + 5000) / 10000`.
    /// The +5000 rounds the half-cent boundary up instead of truncating.
    /// i128 intermediates prevent overflow on large amounts.
    ///
    /// ## Example
    /// ```rust
    /// use quotegen_core::money::Money;
    /// use quotegen_core::types::TaxRate;
    ///
    /// let subtotal = Money::from_cents(220_000); // KES 2,200.00
    /// let rate = TaxRate::from_bps(1600);        // 16%
    ///
    /// let vat = subtotal.calculate_tax(rate);
    /// assert_eq!(vat.cents(), 35_200); // KES 352.00
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        let tax_cents = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_cents(tax_cents as i64)
    }

    /// Multiplies money by an integer quantity.
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0 * qty)
    }

    /// Multiplies money by a decimal quantity, rounding half-up to a cent.
    ///
    /// ## Why This Exists
    /// Quantities are decimals ("1.5 dzn" is a valid order), so a line total
    /// cannot stay in pure integer math. The product is rounded to the
    /// nearest cent exactly once, here, and the result is integer money
    /// again for all further arithmetic.
    ///
    /// ## Example
    /// ```rust
    /// use quotegen_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(120_000); // KES 1,200.00
    /// let line_total = unit_price.multiply_decimal(1.0);
    /// assert_eq!(line_total.cents(), 120_000);
    ///
    /// let half = Money::from_cents(333).multiply_decimal(0.5);
    /// assert_eq!(half.cents(), 167); // 166.5 rounds up
    /// ```
    pub fn multiply_decimal(&self, qty: f64) -> Self {
        Money((self.0 as f64 * qty).round() as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in the document currency format:
/// thousands-separated, two decimals, `KES` label.
///
/// This is the exact format used in the PDF item table and totals block,
/// e.g. `KES 1,200.00`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "KES {}{}.{:02}",
            sign,
            group_thousands(self.major().abs()),
            self.minor()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by integer (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summing an iterator of Money values (running totals).
impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Formatting Helpers
// =============================================================================

/// Inserts thousands separators into a non-negative integer.
///
/// `1234567` becomes `"1,234,567"`.
fn group_thousands(value: i64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let offset = digits.len() % 3;

    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.major(), 10);
        assert_eq!(money.minor(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        let money = Money::from_major_minor(10, 99);
        assert_eq!(money.cents(), 1099);

        let negative = Money::from_major_minor(-5, 50);
        assert_eq!(negative.cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "KES 10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "KES 5.00");
        assert_eq!(format!("{}", Money::from_cents(0)), "KES 0.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "KES -5.50");
    }

    #[test]
    fn test_display_thousands_grouping() {
        assert_eq!(format!("{}", Money::from_cents(120_000)), "KES 1,200.00");
        assert_eq!(format!("{}", Money::from_cents(220_000)), "KES 2,200.00");
        assert_eq!(
            format!("{}", Money::from_cents(123_456_789)),
            "KES 1,234,567.89"
        );
        assert_eq!(format!("{}", Money::from_cents(99_999)), "KES 999.99");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        let result: Money = a * 3;
        assert_eq!(result.cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300]
            .iter()
            .map(|c| Money::from_cents(*c))
            .sum();
        assert_eq!(total.cents(), 600);
    }

    #[test]
    fn test_vat_calculation() {
        // KES 2,200.00 at 16% = KES 352.00
        let subtotal = Money::from_cents(220_000);
        let rate = TaxRate::from_bps(1600);
        assert_eq!(subtotal.calculate_tax(rate).cents(), 35_200);
    }

    #[test]
    fn test_vat_rounding_at_half_cent() {
        // KES 0.03 at 16% = 0.48 cents → rounds to 0 cents? No: 3*1600=4800,
        // +5000 = 9800, /10000 = 0. One more cent of base tips it over.
        assert_eq!(Money::from_cents(3).calculate_tax(TaxRate::from_bps(1600)).cents(), 0);
        assert_eq!(Money::from_cents(4).calculate_tax(TaxRate::from_bps(1600)).cents(), 1);
    }

    #[test]
    fn test_multiply_decimal() {
        let price = Money::from_cents(50_000); // KES 500.00
        assert_eq!(price.multiply_decimal(2.0).cents(), 100_000);
        assert_eq!(price.multiply_decimal(0.5).cents(), 25_000);
        assert_eq!(price.multiply_decimal(1.5).cents(), 75_000);

        // Half-cent boundary rounds up
        assert_eq!(Money::from_cents(333).multiply_decimal(0.5).cents(), 167);
    }

    #[test]
    fn test_multiply_quantity() {
        let unit_price = Money::from_cents(299);
        let line_total = unit_price.multiply_quantity(3);
        assert_eq!(line_total.cents(), 897);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());
    }
}
