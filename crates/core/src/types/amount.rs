//! Opaque monetary amounts using decimal arithmetic.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's currency.
///
/// The cart treats prices as opaque non-negative numbers: it never formats,
/// converts, or rounds them. Whether the unit is Tomans or Rials is decided
/// by the catalog that supplies the price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(Decimal);

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Get the underlying decimal value.
    #[must_use]
    pub const fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// Clamp negative values to zero.
    ///
    /// Prices entering the cart are normalized, never rejected.
    #[must_use]
    pub fn clamp_non_negative(self) -> Self {
        if self.0.is_sign_negative() {
            Self::ZERO
        } else {
            self
        }
    }

    /// Total for `quantity` units at this unit price.
    #[must_use]
    pub fn times(self, quantity: u32) -> Self {
        Self(self.0 * Decimal::from(quantity))
    }
}

impl From<i64> for Amount {
    fn from(amount: i64) -> Self {
        Self(Decimal::from(amount))
    }
}

impl From<Decimal> for Amount {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|amount| amount.0).sum())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_times_multiplies_by_quantity() {
        let unit = Amount::from(100_000);
        assert_eq!(unit.times(3), Amount::from(300_000));
        assert_eq!(unit.times(0), Amount::ZERO);
    }

    #[test]
    fn test_clamp_non_negative() {
        assert_eq!(Amount::from(-5).clamp_non_negative(), Amount::ZERO);
        assert_eq!(Amount::from(5).clamp_non_negative(), Amount::from(5));
        assert_eq!(Amount::ZERO.clamp_non_negative(), Amount::ZERO);
    }

    #[test]
    fn test_sum() {
        let total: Amount = [Amount::from(10), Amount::from(32)].into_iter().sum();
        assert_eq!(total, Amount::from(42));
    }
}
