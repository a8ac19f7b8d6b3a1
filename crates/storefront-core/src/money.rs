//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  Storefront prices are whole Toman (1,250,000 for a leather bag).      │
//! │  Keeping them as i64 means 1,250,000 × 3 is exactly 3,750,000.          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//!
//! let price = Money::from_amount(1_250_000);
//! let line_total = price.multiply_quantity(3);
//! assert_eq!(line_total.amount(), 3_750_000);
//! assert_eq!(line_total.to_string(), "3,750,000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};
use ts_rs::TS;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (whole Toman).
///
/// ## Design Decisions
/// - **i64 (signed)**: differences such as discounts may be negative
/// - **Single field tuple struct**: serializes as a plain JSON number
/// - **Saturating arithmetic**: totals never panic on overflow, they pin
///   to `i64::MAX`/`i64::MIN` instead
///
/// ## Where Money is Used
/// ```text
/// Product.price ──► CartLine.unit_price ──► CartLine.line_total
///                                               │
///                   Cart.total_price ◄──────────┘
///                         │
///                         ▼
///            CheckoutSummary.subtotal + shipping ──► Order.total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from an amount in the smallest currency unit.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_amount(980_000);
    /// assert_eq!(price.amount(), 980_000);
    /// ```
    #[inline]
    pub const fn from_amount(amount: i64) -> Self {
        Money(amount)
    }

    /// Returns the raw amount in the smallest currency unit.
    #[inline]
    pub const fn amount(&self) -> i64 {
        self.0
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

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_amount(320_000);
    /// assert_eq!(unit_price.multiply_quantity(3).amount(), 960_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: i64) -> Self {
        Money(self.0.saturating_mul(qty))
    }

    /// Percentage saved when selling at `self` instead of `original`,
    /// rounded half-up to a whole percent.
    ///
    /// Returns `None` when `original` is not positive or is below `self`.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_amount(1_250_000);
    /// let original = Money::from_amount(1_500_000);
    /// assert_eq!(price.percent_off(original), Some(17));
    /// ```
    pub fn percent_off(&self, original: Money) -> Option<u8> {
        if !original.is_positive() || original.0 < self.0 {
            return None;
        }

        // (original - price) * 100 / original, rounded half-up
        let saved = (original.0 - self.0) as i128;
        let whole = original.0 as i128;
        let pct = (saved * 200 + whole) / (whole * 2);
        u8::try_from(pct).ok()
    }

    /// Formats the amount followed by a currency label.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_amount(50_000).format_with("Toman"), "50,000 Toman");
    /// ```
    pub fn format_with(&self, currency_label: &str) -> String {
        format!("{} {}", self, currency_label)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Groups thousands with commas: `1250000` → `1,250,000`.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}{}", sign, grouped)
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

/// Multiplication by a quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
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
    fn test_display_groups_thousands() {
        assert_eq!(Money::from_amount(0).to_string(), "0");
        assert_eq!(Money::from_amount(999).to_string(), "999");
        assert_eq!(Money::from_amount(1_000).to_string(), "1,000");
        assert_eq!(Money::from_amount(180_000).to_string(), "180,000");
        assert_eq!(Money::from_amount(3_750_000).to_string(), "3,750,000");
        assert_eq!(Money::from_amount(-50_000).to_string(), "-50,000");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_amount(1_000_000);
        let b = Money::from_amount(500_000);

        assert_eq!((a + b).amount(), 1_500_000);
        assert_eq!((a - b).amount(), 500_000);
        assert_eq!((a * 2).amount(), 2_000_000);
    }

    /// 1.25M × 3 must be exact; a float-based cart would be tempted to
    /// store 1.25 (millions) and round.
    #[test]
    fn test_multiply_quantity_is_exact() {
        let unit_price = Money::from_amount(1_250_000);
        assert_eq!(unit_price.multiply_quantity(3).amount(), 3_750_000);
    }

    #[test]
    fn test_arithmetic_saturates() {
        let huge = Money::from_amount(i64::MAX);
        assert_eq!((huge + Money::from_amount(1)).amount(), i64::MAX);
        assert_eq!(huge.multiply_quantity(2).amount(), i64::MAX);
    }

    #[test]
    fn test_sum() {
        let total: Money = [100, 200, 300].iter().map(|&a| Money::from_amount(a)).sum();
        assert_eq!(total.amount(), 600);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_percent_off() {
        let price = Money::from_amount(2_800_000);
        assert_eq!(price.percent_off(Money::from_amount(3_500_000)), Some(20));

        // 1 - 1450000/1700000 = 14.7% → 15
        let price = Money::from_amount(1_450_000);
        assert_eq!(price.percent_off(Money::from_amount(1_700_000)), Some(15));

        assert_eq!(price.percent_off(price), Some(0));
        assert_eq!(price.percent_off(Money::from_amount(1_000)), None);
        assert_eq!(price.percent_off(Money::zero()), None);
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_positive());
        assert!(!zero.is_negative());

        let negative = Money::from_amount(-100);
        assert!(negative.is_negative());
        assert_eq!(negative.abs().amount(), 100);
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&Money::from_amount(50_000)).unwrap();
        assert_eq!(json, "50000");
    }
}
