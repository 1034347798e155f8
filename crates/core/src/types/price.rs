//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored at full precision; rounding to two decimal places
//! happens only at display boundaries. The demo store is single-currency
//! (USD), so there is no currency dimension on the type.

use std::iter::Sum;
use std::ops::Add;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A non-negative amount of money in US dollars.
///
/// Serializes as a decimal string (e.g. `"699.99"`) so that persisted
/// carts round-trip without floating-point drift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero dollars.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a price from a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole number of cents.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// Get the underlying decimal amount at full precision.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// The line total for `quantity` units at this price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl std::fmt::Display for Price {
    /// Format for display (e.g. `$19.99`), rounded to 2 decimal places.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${:.2}", self.0.round_dp(2))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(69999).to_string(), "$699.99");
        assert_eq!(Price::from_cents(0).to_string(), "$0.00");
    }

    #[test]
    fn test_times_and_sum() {
        let smartphone = Price::from_cents(69999);
        let headphones = Price::from_cents(19999);

        let total: Price = [smartphone.times(2), headphones.times(1)]
            .into_iter()
            .sum();
        assert_eq!(total, Price::from_cents(159_997));
        assert_eq!(total.to_string(), "$1599.97");
    }

    #[test]
    fn test_display_rounds_but_amount_keeps_precision() {
        let third = Price::new(Decimal::new(12345, 4)); // 1.2345
        assert_eq!(third.to_string(), "$1.23");
        assert_eq!(third.amount(), Decimal::new(12345, 4));
    }

    #[test]
    fn test_serde_decimal_string() {
        let price = Price::from_cents(129_999);
        let json = serde_json::to_string(&price).expect("serialize");
        assert_eq!(json, "\"1299.99\"");
        let back: Price = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, price);
    }
}
