//! Money type for representing monetary values.
//!
//! Wraps `rust_decimal::Decimal` so pricing arithmetic is exact: a tax
//! product like `16.99 * 0.08` comes out as `1.3592`, not a binary
//! float approximation, and a given line set always produces the same
//! totals regardless of mutation history.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};

/// A monetary value in the store's single currency.
///
/// Serializes as a decimal string (e.g., `"16.99"`), so persisted
/// values round-trip losslessly.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    /// Create a Money value from a decimal amount.
    ///
    /// ```
    /// use tavola_ordering::money::Money;
    /// use rust_decimal_macros::dec;
    /// let price = Money::new(dec!(16.99));
    /// assert_eq!(price.display(), "$16.99");
    /// ```
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// A zero amount.
    pub const fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// The raw decimal amount, at full scale.
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Round to two decimal places (display precision).
    pub fn rounded(&self) -> Self {
        Self(self.0.round_dp(2))
    }

    /// Format as a display string (e.g., "$16.99").
    ///
    /// Display always rounds to two decimal places; the stored value
    /// keeps full scale.
    pub fn display(&self) -> String {
        format!("${}", self.display_amount())
    }

    /// Format as a display string without symbol (e.g., "16.99").
    pub fn display_amount(&self) -> String {
        let rounded = self.0.round_dp(2);
        // Normalize "3.9" / "3" to the usual two-place price formatting.
        format!("{:.2}", rounded)
    }

    /// Parse a decimal string (e.g., "3.99").
    pub fn parse(s: &str) -> Option<Self> {
        s.trim().parse::<Decimal>().ok().map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

/// Multiply a unit price by a quantity.
impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, quantity: i64) -> Money {
        Money(self.0 * Decimal::from(quantity))
    }
}

/// Multiply by a rate (e.g., the tax rate).
impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, rate: Decimal) -> Money {
        Money(self.0 * rate)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        Money(iter.map(|m| m.0).sum())
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Money {
        Money(iter.map(|m| m.0).sum())
    }
}
