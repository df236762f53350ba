//! Ask (sell-side) price levels
//!
//! Maintains sell levels sorted by price ascending (best ask first).

use std::collections::BTreeMap;
use types::numeric::{Price, Quantity};

use super::price_level::PriceLevel;

/// Ask (sell) side of the book
#[derive(Debug, Clone, Default)]
pub struct AskBook {
    /// Ascending iteration puts the best ask first
    levels: BTreeMap<Price, PriceLevel>,
}

impl AskBook {
    /// Create a new empty ask book
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

    /// Get the best ask (lowest price)
    pub fn best_ask(&self) -> Option<&PriceLevel> {
        self.levels.values().next()
    }

    /// Get the best ask price
    pub fn best_ask_price(&self) -> Option<Price> {
        self.levels.keys().next().copied()
    }

    /// Consume up to `amount` from the best level, removing it when exhausted
    pub fn take_from_best(&mut self, amount: Quantity) -> Option<(Price, Quantity)> {
        let mut entry = self.levels.first_entry()?;
        let price = *entry.key();
        let taken = entry.get_mut().take(amount);
        if entry.get().is_exhausted() {
            entry.remove();
        }
        Some((price, taken))
    }

    /// Get depth snapshot (top N price levels, lowest first)
    pub fn depth_snapshot(&self, depth: usize) -> Vec<PriceLevel> {
        self.levels.values().take(depth).cloned().collect()
    }

    pub fn total_size(&self) -> Quantity {
        self.levels.values().map(|level| level.size).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    pub fn level_count(&self) -> usize {
        self.levels.len()
    }
}
