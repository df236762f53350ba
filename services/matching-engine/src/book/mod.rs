//! Price-level order book
//!
//! Two sorted collections of aggregated levels: bids descending, asks
//! ascending. Every resting level has a positive price and a size above
//! the dust threshold.

pub mod price_level;
pub mod bid_book;
pub mod ask_book;
pub mod snapshot;

pub use price_level::PriceLevel;
pub use bid_book::BidBook;
pub use ask_book::AskBook;
pub use snapshot::{BookSnapshot, DEFAULT_BOOK_DEPTH};

use tracing::warn;
use types::errors::OrderError;
use types::numeric::{Price, Quantity};
use types::order::Side;

/// Both sides of the book for a single market
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    bids: BidBook,
    asks: AskBook,
}

impl OrderBook {
    pub fn new() -> Self {
        Self {
            bids: BidBook::new(),
            asks: AskBook::new(),
        }
    }

    /// Rest `size` at `price` on `side`.
    ///
    /// Merges into an existing level at the same price. Sizes at or below
    /// the dust threshold are rejected and leave the book untouched.
    pub fn add_level(&mut self, side: Side, price: Price, size: Quantity) -> Result<(), OrderError> {
        if !price.is_positive() {
            return Err(OrderError::InvalidPrice(price.to_string()));
        }
        if size.is_dust() {
            return Err(OrderError::InvalidSize(size.to_string()));
        }

        match side {
            Side::BUY => self.bids.add(price, size),
            Side::SELL => self.asks.add(price, size),
        }
        Ok(())
    }

    /// Decrement the best level on `side` by `amount`.
    ///
    /// Callers are expected to pass at most the best level's size; larger
    /// amounts are clamped. Returns the best level's price and the size
    /// actually removed, or None when the side is empty.
    pub fn remove_from_best_level(&mut self, side: Side, amount: Quantity) -> Option<(Price, Quantity)> {
        let (price, taken) = match side {
            Side::BUY => self.bids.take_from_best(amount)?,
            Side::SELL => self.asks.take_from_best(amount)?,
        };
        if taken < amount {
            warn!(
                side = %side,
                price = %price,
                requested = %amount,
                removed = %taken,
                "Removal exceeded best level size; clamped"
            );
        }
        Some((price, taken))
    }

    /// Best (first) level on a side
    pub fn best_level(&self, side: Side) -> Option<&PriceLevel> {
        match side {
            Side::BUY => self.bids.best_bid(),
            Side::SELL => self.asks.best_ask(),
        }
    }

    pub fn best_bid(&self) -> Option<Price> {
        self.bids.best_bid_price()
    }

    pub fn best_ask(&self) -> Option<Price> {
        self.asks.best_ask_price()
    }

    pub fn is_side_empty(&self, side: Side) -> bool {
        match side {
            Side::BUY => self.bids.is_empty(),
            Side::SELL => self.asks.is_empty(),
        }
    }

    pub fn level_count(&self, side: Side) -> usize {
        match side {
            Side::BUY => self.bids.level_count(),
            Side::SELL => self.asks.level_count(),
        }
    }

    /// Total resting size on a side
    pub fn depth(&self, side: Side) -> Quantity {
        match side {
            Side::BUY => self.bids.total_size(),
            Side::SELL => self.asks.total_size(),
        }
    }

    /// Up to `depth` levels per side, stamped with `as_of`
    pub fn snapshot(&self, depth: usize, as_of: i64) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.depth_snapshot(depth),
            asks: self.asks.depth_snapshot(depth),
            best_bid: self.best_bid(),
            best_ask: self.best_ask(),
            as_of,
        }
    }
}
