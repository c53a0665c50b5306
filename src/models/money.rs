//! Money type for representing payout amounts
//!
//! Payouts are the product of two decimal inputs (hours and rate), so the
//! amount is carried as an `f64` and only rounded when it is rendered.

use std::fmt;
use std::ops::{Add, AddAssign};

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct Money(f64);

impl Money {
    /// Create a Money amount from a raw value
    ///
    /// # Examples
    /// ```
    /// use payout::models::Money;
    /// let amount = Money::new(10.5);
    /// assert_eq!(amount.to_string(), "$10.50");
    /// ```
    pub const fn new(amount: f64) -> Self {
        Self(amount)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw amount
    pub const fn amount(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Format with a currency symbol and exactly two decimals
    ///
    /// The symbol always comes first, so a negative amount renders as
    /// `$-12.50`.
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{}", symbol, self.amount_text())
    }

    /// Two-decimal amount text; NaN is spelled `nan` like `inf` is
    fn amount_text(&self) -> String {
        if self.0.is_nan() {
            "nan".to_string()
        } else {
            format!("{:.2}", self.0)
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", self.amount_text())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::new(10.5)), "$10.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
        assert_eq!(format!("{}", Money::new(24200.0)), "$24200.00");
        assert_eq!(format!("{}", Money::new(0.05)), "$0.05");
    }

    #[test]
    fn test_negative_keeps_symbol_first() {
        assert_eq!(Money::new(-12.5).to_string(), "$-12.50");
    }

    #[test]
    fn test_rounding() {
        // 2.675 is stored as 2.67499999..., so it rounds down
        assert_eq!(Money::new(2.675).to_string(), "$2.67");
        assert_eq!(Money::new(1.006).to_string(), "$1.01");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(Money::new(f64::NAN).to_string(), "$nan");
        assert_eq!(Money::new(f64::INFINITY).to_string(), "$inf");
        assert_eq!(Money::new(f64::NEG_INFINITY).format_with_symbol("€"), "€-inf");
    }

    #[test]
    fn test_format_with_symbol() {
        assert_eq!(Money::new(8000.0).format_with_symbol("€"), "€8000.00");
        assert_eq!(Money::new(3.0).format_with_symbol(""), "3.00");
    }

    #[test]
    fn test_arithmetic() {
        let mut a = Money::new(1000.0);
        a += Money::new(500.0);
        assert_eq!(a.amount(), 1500.0);
        assert_eq!((a + Money::new(0.5)).amount(), 1500.5);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::new(100.0), Money::new(200.0), Money::new(300.0)];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total.amount(), 600.0);
        assert!(std::iter::empty::<Money>().sum::<Money>().is_zero());
    }
}
