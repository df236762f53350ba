//! Aggregated price level
//!
//! A price level is the total resting size at one price on one side of the
//! book. Individual resting orders are not tracked: once an order rests its
//! identity merges into the level, so there is no time priority between
//! orders at the same price.

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};

/// Resting size at a single price
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceLevel {
    pub price: Price,
    pub size: Quantity,
}

impl PriceLevel {
    /// Create a new level with initial size
    pub fn new(price: Price, size: Quantity) -> Self {
        Self { price, size }
    }

    /// Merge more resting size into this level
    pub fn add(&mut self, size: Quantity) {
        self.size += size;
    }

    /// Consume up to `amount` from the level.
    ///
    /// Returns the size actually taken, which is `amount` clamped to the
    /// current level size.
    pub fn take(&mut self, amount: Quantity) -> Quantity {
        let taken = amount.min(self.size);
        self.size = self.size.saturating_sub(taken);
        taken
    }

    /// A level at or below the dust threshold must be removed from the book.
    pub fn is_exhausted(&self) -> bool {
        self.size.is_dust()
    }
}
