//! Bid (buy-side) price levels
//!
//! Maintains buy levels sorted by price descending (best bid first).
//! Uses BTreeMap for deterministic iteration order; a price maps to at
//! most one level, so duplicates cannot occur.

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};

use super::price_level::PriceLevel;

/// Bid (buy) side of the book
#[derive(Debug, Clone, Default)]
pub struct BidBook {
    /// BTreeMap iterates ascending, so the best bid is the last key
    levels: BTreeMap<Price, PriceLevel>,
}

impl BidBook {
    /// Create a new empty bid book
    pub fn new() -> Self {
        Self {
            levels: BTreeMap::new(),
        }
    }

    /// Add size at a price, merging into an existing level if present
    pub fn add(&mut self, price: Price, size: Quantity) {
        self.levels
            .entry(price)
            .and_modify(|level| level.add(size))
            .or_insert_with(|| PriceLevel::new(price, size));
    }

    /// Get the best bid (highest price)
    pub fn best_bid(&self) -> Option<&PriceLevel> {
        self.levels.values().next_back()
    }

    /// Get the best bid price
    pub fn best_bid_price(&self) -> Option<Price> {
        self.levels.keys().next_back().copied()
    }

    /// Consume up to `amount` from the best level.
    ///
    /// Removes the level once it is exhausted. Returns the level price and
    /// the size actually taken, or None if the side is empty.
    pub fn take_from_best(&mut self, amount: Quantity) -> Option<(Price, Quantity)> {
        let mut entry = self.levels.last_entry()?;
        let price = *entry.key();
        let taken = entry.get_mut().take(amount);
        if entry.get().is_exhausted() {
            entry.remove();
        }
        Some((price, taken))
    }

    /// Get depth snapshot (top N price levels, highest first)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<PriceLevel> {
        self.levels.values().rev().take(depth).cloned().collect()
    }

    /// Total resting size across all levels
    pub fn total_size(&self) -> Quantity {
        self.levels.values().map(|level| level.size).sum()
    }

    /// Check if the bid book is empty
    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Get the total number of price levels
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
