//! Fixed-point decimal types for prices and quantities
//!
//! Uses rust_decimal for deterministic arithmetic (no floating-point errors).
//! Sizes at or below [`SIZE_EPSILON`] are treated as dust and never rest on
//! the book.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use crate::errors::NumericError;

/// Level sizes at or below this threshold are considered exhausted (1e-8).
pub const SIZE_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 8);

/// Decimal places used for seeded and displayed prices.
pub const PRICE_DP: u32 = 6;

/// Price of one share, in quote currency
///
/// Ordering is by numeric value, so `0.25` and `0.250` compare equal and
/// map to the same book level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Wrap a raw decimal without validation.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a price, returning None unless strictly positive.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value > Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse a price from its decimal string form.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, NumericError> {
        Decimal::from_str_exact(s)
            .map(Self)
            .map_err(|e| NumericError::Parse {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// Round half-away-from-zero to [`PRICE_DP`] decimal places.
    pub fn round6(self) -> Self {
        Self(
            self.0
                .round_dp_with_strategy(PRICE_DP, RoundingStrategy::MidpointAwayFromZero),
        )
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of (fractional) shares
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Quantity(Decimal);

impl Quantity {
    /// Wrap a raw decimal without validation.
    pub fn new(value: Decimal) -> Self {
        Self(value)
    }

    /// Create a quantity, returning None if negative.
    pub fn try_new(value: Decimal) -> Option<Self> {
        if value >= Decimal::ZERO {
            Some(Self(value))
        } else {
            None
        }
    }

    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    pub fn from_u64(value: u64) -> Self {
        Self(Decimal::from(value))
    }

    /// Parse a quantity from its decimal string form.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Result<Self, NumericError> {
        Decimal::from_str_exact(s)
            .map(Self)
            .map_err(|e| NumericError::Parse {
                input: s.to_string(),
                reason: e.to_string(),
            })
    }

    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(&self) -> bool {
        self.0 > Decimal::ZERO
    }

    /// True when the quantity is at or below [`SIZE_EPSILON`].
    pub fn is_dust(&self) -> bool {
        self.0 <= SIZE_EPSILON
    }

    /// Add, capping at the largest representable decimal.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }

    /// Subtract, flooring at zero.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Self::try_new(self.0 - rhs.0).unwrap_or_else(Self::zero)
    }
}

// Sizes accumulate into levels, candles and depth totals; saturate
// rather than panic at the top of the decimal range.
impl Add for Quantity {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl AddAssign for Quantity {
    fn add_assign(&mut self, rhs: Self) {
        *self = self.saturating_add(rhs);
    }
}

impl Sub for Quantity {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl std::iter::Sum for Quantity {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, q| acc + q)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
