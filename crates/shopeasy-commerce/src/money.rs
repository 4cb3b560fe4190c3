//! Money type for representing monetary values.
//!
//! Uses paise-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The storefront
//! quotes everything in a single currency, so no currency code travels
//! with the amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Mul, Sub};

/// Currency symbol used for display.
const RUPEE_SIGN: &str = "\u{20b9}";

/// A monetary value.
///
/// Amounts are stored in paise (hundredths of a rupee).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money {
    /// Amount in paise.
    pub amount_paise: i64,
}

impl Money {
    /// Create a new Money value from paise.
    pub fn new(amount_paise: i64) -> Self {
        Self { amount_paise }
    }

    /// Create a Money value from a decimal rupee amount.
    ///
    /// ```
    /// use shopeasy_commerce::money::Money;
    /// let price = Money::from_rupees(49.99);
    /// assert_eq!(price.amount_paise, 4999);
    /// ```
    pub fn from_rupees(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_paise == 0
    }

    /// Check if this is negative.
    pub fn is_negative(&self) -> bool {
        self.amount_paise < 0
    }

    /// Convert to a decimal rupee value.
    pub fn to_rupees(&self) -> f64 {
        self.amount_paise as f64 / 100.0
    }

    /// Format as a display string (e.g., "\u{20b9}49.99").
    pub fn display(&self) -> String {
        let sign = if self.amount_paise < 0 { "-" } else { "" };
        let abs = self.amount_paise.unsigned_abs();
        format!("{}{}{}.{:02}", sign, RUPEE_SIGN, abs / 100, abs % 100)
    }

    /// Format without the currency symbol (e.g., "49.99").
    pub fn display_amount(&self) -> String {
        let sign = if self.amount_paise < 0 { "-" } else { "" };
        let abs = self.amount_paise.unsigned_abs();
        format!("{}{}.{:02}", sign, abs / 100, abs % 100)
    }

    /// Checked addition.
    pub fn checked_add(&self, other: Money) -> Option<Money> {
        self.amount_paise.checked_add(other.amount_paise).map(Money::new)
    }

    /// Checked multiplication by a scalar.
    pub fn checked_mul(&self, factor: i64) -> Option<Money> {
        self.amount_paise.checked_mul(factor).map(Money::new)
    }

    /// Addition pinned at the representable bounds instead of wrapping.
    pub fn saturating_add(&self, other: Money) -> Money {
        Money::new(self.amount_paise.saturating_add(other.amount_paise))
    }

    /// Multiplication by a scalar, pinned at the representable bounds.
    pub fn saturating_mul(&self, factor: i64) -> Money {
        Money::new(self.amount_paise.saturating_mul(factor))
    }

    /// Sum an iterator of Money values, pinned at the representable bounds.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc.saturating_add(*m))
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_paise + other.amount_paise)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.amount_paise += other.amount_paise;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_paise - other.amount_paise)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        Money::new(self.amount_paise * factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_paise() {
        let m = Money::new(4999);
        assert_eq!(m.amount_paise, 4999);
    }

    #[test]
    fn test_money_from_rupees() {
        let m = Money::from_rupees(49.99);
        assert_eq!(m.amount_paise, 4999);

        let m = Money::from_rupees(100.0);
        assert_eq!(m.amount_paise, 10000);
    }

    #[test]
    fn test_money_to_rupees() {
        let m = Money::new(4999);
        assert!((m.to_rupees() - 49.99).abs() < 0.001);
    }

    #[test]
    fn test_money_display() {
        let m = Money::new(4999);
        assert_eq!(m.display(), "\u{20b9}49.99");

        let m = Money::new(500);
        assert_eq!(m.display_amount(), "5.00");

        let m = Money::new(-150);
        assert_eq!(m.display(), "-\u{20b9}1.50");
    }

    #[test]
    fn test_money_two_digit_fraction() {
        let m = Money::new(1005);
        assert_eq!(m.display_amount(), "10.05");
    }

    #[test]
    fn test_money_addition() {
        let a = Money::new(1000);
        let b = Money::new(500);
        assert_eq!((a + b).amount_paise, 1500);
    }

    #[test]
    fn test_money_subtraction() {
        let a = Money::new(1000);
        let b = Money::new(300);
        assert_eq!((a - b).amount_paise, 700);
    }

    #[test]
    fn test_money_multiply() {
        let m = Money::new(1000);
        assert_eq!((m * 3).amount_paise, 3000);
    }

    #[test]
    fn test_money_checked_ops() {
        let m = Money::new(i64::MAX);
        assert!(m.checked_add(Money::new(1)).is_none());
        assert!(m.checked_mul(2).is_none());
        assert_eq!(Money::new(10).checked_mul(4), Some(Money::new(40)));
    }

    #[test]
    fn test_money_saturating_ops() {
        let m = Money::new(i64::MAX);
        assert_eq!(m.saturating_add(Money::new(1)), Money::new(i64::MAX));
        assert_eq!(m.saturating_mul(2), Money::new(i64::MAX));
        assert_eq!(Money::new(-2).saturating_mul(i64::MAX), Money::new(i64::MIN));
        assert_eq!(Money::new(10).saturating_mul(4), Money::new(40));
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(100), Money::new(250), Money::new(50)];
        assert_eq!(Money::sum(values.iter()), Money::new(400));

        let huge = [Money::new(i64::MAX), Money::new(1)];
        assert_eq!(Money::sum(huge.iter()), Money::new(i64::MAX));
    }
}
