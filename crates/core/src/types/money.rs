//! Type-safe money representation using decimal arithmetic.

use core::fmt;
use core::iter::Sum;
use core::ops::{Add, AddAssign, Mul};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of money in Indian rupees.
///
/// Backed by [`Decimal`] so that price arithmetic is exact; floats never
/// touch an order total. Displays with the rupee sign and two decimal
/// places (`₹150.00`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Zero rupees.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create an amount from a whole number of rupees.
    #[must_use]
    pub fn from_rupees(rupees: i64) -> Self {
        Self(Decimal::from(rupees))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Mul<u32> for Money {
    type Output = Self;

    fn mul(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "₹{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rupees_and_display() {
        assert_eq!(Money::from_rupees(150).to_string(), "₹150.00");
        assert_eq!(Money::ZERO.to_string(), "₹0.00");
    }

    #[test]
    fn test_arithmetic() {
        let unit = Money::from_rupees(2);
        assert_eq!(unit * 2, Money::from_rupees(4));
        assert_eq!(unit + Money::from_rupees(50), Money::from_rupees(52));

        let total: Money = [Money::from_rupees(100), Money::from_rupees(50)]
            .into_iter()
            .sum();
        assert_eq!(total, Money::from_rupees(150));
    }
}
