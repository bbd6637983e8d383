//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  Summing a day of sales as floats:                                      │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Dashboard totals drift, profit shows -0.00, margins go NaN.            │
//! │                                                                         │
//! │  OUR SOLUTION: Integer minor units (cents)                              │
//! │    Revenue, expenses and profit are exact sums of i64 values            │
//! │    Only percentages for display are computed as f64                    │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kedai_core::money::Money;
//!
//! let price = Money::from_cents(1500); // 15.00
//! let total = price * 3i64;            // 45.00
//! assert_eq!(total.cents(), 4500);
//!
//! // Form input is parsed from text, never from floats
//! assert_eq!(Money::parse("12.5"), Some(Money::from_cents(1250)));
//! assert_eq!(Money::parse("abc"), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Neg, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents).
///
/// ## Design Decisions
/// - **i64 (signed)**: profit and net figures go negative
/// - **Single field tuple struct**: zero-cost abstraction over i64
/// - **Serialized as a bare integer** in the persisted JSON documents
///
/// ## Where Money Flows
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Product.selling_price ──► Sale.unit_price ──► Sale.total_amount       │
/// │                                                    │                    │
/// │  Expense.amount ───────────────────────────────────┤                    │
/// │                                                    ▼                    │
/// │                      FinancialSummary / Report / Calculators            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// let price = Money::from_cents(1099);
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from major and minor units.
    ///
    /// For negative amounts only the major unit carries the sign:
    /// `from_major_minor(-5, 50)` is -5.50.
    #[inline]
    pub const fn from_major_minor(major: i64, minor: i64) -> Self {
        if major < 0 {
            Money(major * 100 - minor)
        } else {
            Money(major * 100 + minor)
        }
    }

    /// Parses a decimal amount typed into a form field.
    ///
    /// ## Rules
    /// - Surrounding whitespace is ignored
    /// - Optional leading `+` or `-`
    /// - At most one `.`; digits beyond the second decimal are rounded half-up
    /// - Anything else (empty, letters, thousands separators) is `None`
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// assert_eq!(Money::parse("1000"), Some(Money::from_cents(100_000)));
    /// assert_eq!(Money::parse(" 4.005 "), Some(Money::from_cents(401)));
    /// assert_eq!(Money::parse("-2.5"), Some(Money::from_cents(-250)));
    /// assert_eq!(Money::parse(""), None);
    /// ```
    pub fn parse(input: &str) -> Option<Money> {
        parse_scaled(input, 2).map(Money)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
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

    /// Returns the absolute value.
    #[inline]
    pub const fn abs(&self) -> Self {
        Money(self.0.saturating_abs())
    }

    /// Multiplies money by a quantity, saturating at the `i64` bounds.
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(1500);
    /// assert_eq!(unit_price.multiply_quantity(3).cents(), 4500);
    /// assert_eq!(Money::from_cents(i64::MAX).multiply_quantity(2).cents(), i64::MAX);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Multiplies money by a quantity, or `None` if the result does not fit.
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: i64) -> Option<Self> {
        match self.0.checked_mul(qty) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` if the result does not fit.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Expresses `self` as a percentage of `whole`, for display.
    ///
    /// Returns `0.0` when `whole` is zero, so callers never see NaN or
    /// infinity on an empty period.
    ///
    /// ## Example
    /// ```rust
    /// use kedai_core::money::Money;
    ///
    /// let profit = Money::from_cents(500);
    /// let revenue = Money::from_cents(2000);
    /// assert_eq!(profit.percent_of(revenue), 25.0);
    /// assert_eq!(profit.percent_of(Money::zero()), 0.0);
    /// ```
    pub fn percent_of(&self, whole: Money) -> f64 {
        if whole.is_zero() {
            return 0.0;
        }
        self.0 as f64 / whole.0 as f64 * 100.0
    }
}

/// Parses a signed decimal string into an integer scaled by `10^scale`.
///
/// Shared by [`Money::parse`] and [`crate::types::Percentage::parse`].
pub(crate) fn parse_scaled(input: &str, scale: u32) -> Option<i64> {
    let input = input.trim();
    let (negative, body) = match input.as_bytes().first().copied()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let (whole, frac) = match body.split_once('.') {
        Some((whole, frac)) => (whole, frac),
        None => (body, ""),
    };

    if whole.is_empty() && frac.is_empty() {
        return None;
    }
    if !whole.bytes().all(|b| b.is_ascii_digit()) || !frac.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let factor = 10_i128.pow(scale);
    let mut value: i128 = if whole.is_empty() {
        0
    } else {
        whole.parse::<i128>().ok()?.checked_mul(factor)?
    };

    // Keep `scale` fractional digits, round half-up on the next one.
    let mut digits = frac.bytes().map(|b| (b - b'0') as i128);
    let mut place = factor;
    for _ in 0..scale {
        place /= 10;
        value += digits.next().unwrap_or(0) * place;
    }
    if digits.next().is_some_and(|d| d >= 5) {
        value += 1;
    }

    let value = if negative { -value } else { value };
    i64::try_from(value).ok()
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain decimal format.
///
/// ## Note
/// This is for logs and debugging. The UI owns currency formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Money(self.0.saturating_neg())
    }
}

/// Multiplication by i64 (for quantity calculations).
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

/// Summing an iterator of Money (revenue, expense totals).
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
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
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_from_major_minor() {
        assert_eq!(Money::from_major_minor(10, 99).cents(), 1099);
        assert_eq!(Money::from_major_minor(-5, 50).cents(), -550);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "10.99");
        assert_eq!(format!("{}", Money::from_cents(500)), "5.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-5.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((b - a).cents(), -500);
        assert_eq!((-a).cents(), -1000);
        assert_eq!((a * 3i64).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(100), Money::from_cents(250), Money::from_cents(-50)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total.cents(), 300);

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_cents(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().cents(), 100);
    }

    #[test]
    fn test_percent_of_guards_zero() {
        assert_eq!(Money::from_cents(300).percent_of(Money::zero()), 0.0);
        assert_eq!(Money::zero().percent_of(Money::zero()), 0.0);
        assert_eq!(Money::from_cents(-500).percent_of(Money::from_cents(1000)), -50.0);
    }

    #[test]
    fn test_parse_plain_and_decimal() {
        assert_eq!(Money::parse("15"), Some(Money::from_cents(1500)));
        assert_eq!(Money::parse("15.5"), Some(Money::from_cents(1550)));
        assert_eq!(Money::parse("15.55"), Some(Money::from_cents(1555)));
        assert_eq!(Money::parse(".5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse("7."), Some(Money::from_cents(700)));
        assert_eq!(Money::parse("+3"), Some(Money::from_cents(300)));
    }

    #[test]
    fn test_parse_rounds_extra_decimals_half_up() {
        assert_eq!(Money::parse("1.004"), Some(Money::from_cents(100)));
        assert_eq!(Money::parse("1.005"), Some(Money::from_cents(101)));
        assert_eq!(Money::parse("-1.005"), Some(Money::from_cents(-101)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(Money::parse(""), None);
        assert_eq!(Money::parse("   "), None);
        assert_eq!(Money::parse("-"), None);
        assert_eq!(Money::parse("."), None);
        assert_eq!(Money::parse("12abc"), None);
        assert_eq!(Money::parse("1,000"), None);
        assert_eq!(Money::parse("1.2.3"), None);
        assert_eq!(Money::parse("99999999999999999999999"), None);
    }

    #[test]
    fn test_arithmetic_saturates_at_bounds() {
        let max = Money::from_cents(i64::MAX);
        let min = Money::from_cents(i64::MIN);

        assert_eq!(max + Money::from_cents(1), max);
        assert_eq!(min - Money::from_cents(1), min);
        assert_eq!(max * 2, max);
        assert_eq!(max.multiply_quantity(-2), min);
        assert_eq!(-min, max);
        assert_eq!(min.abs(), max);

        let mut total = max;
        total += Money::from_cents(500);
        assert_eq!(total, max);
        total -= max;
        assert!(total.is_zero());

        let sum: Money = [max, max, Money::from_cents(1)].iter().sum();
        assert_eq!(sum, max);
    }

    #[test]
    fn test_checked_arithmetic() {
        let price = Money::from_cents(1500);
        assert_eq!(price.checked_multiply_quantity(3), Some(Money::from_cents(4500)));
        assert_eq!(Money::from_cents(i64::MAX / 2).checked_multiply_quantity(3), None);
        assert_eq!(price.checked_add(price), Some(Money::from_cents(3000)));
        assert_eq!(Money::from_cents(i64::MAX).checked_add(price), None);
    }
}
