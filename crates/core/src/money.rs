//! Money value object.

use core::iter::Sum;
use core::ops::Add;

use serde::{Deserialize, Serialize};

/// Non-negative monetary amount in the smallest currency unit (cents).
///
/// Displays with exactly two decimals, e.g. `Money::from_cents(2950)` is `29.50`.
#[derive(
    Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Money {
    cents: u64,
}

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self { cents }
    }

    /// Whole units plus a cents part, e.g. `Money::new(29, 50)`.
    ///
    /// `cents` must be below 100; use [`Money::from_cents`] for raw amounts.
    pub const fn new(units: u64, cents: u64) -> Self {
        debug_assert!(cents < 100, "cents part must be below 100");
        Self {
            cents: units * 100 + cents,
        }
    }

    pub const fn zero() -> Self {
        Self { cents: 0 }
    }

    pub fn cents(&self) -> u64 {
        self.cents
    }

    pub fn is_zero(&self) -> bool {
        self.cents == 0
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// Callers must know the product fits in `u64` cents; see [`Money::checked_times`].
    pub fn times(self, quantity: u64) -> Self {
        Self {
            cents: self.cents * quantity,
        }
    }

    /// `None` when the product does not fit in `u64` cents.
    pub fn checked_times(self, quantity: u64) -> Option<Self> {
        self.cents.checked_mul(quantity).map(Self::from_cents)
    }

    /// `None` when the sum does not fit in `u64` cents.
    pub fn checked_add(self, rhs: Money) -> Option<Self> {
        self.cents.checked_add(rhs.cents).map(Self::from_cents)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, rhs: Money) -> Money {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Money {
        iter.fold(Money::zero(), Add::add)
    }
}

impl core::fmt::Display for Money {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.cents / 100, self.cents % 100)
    }
}
