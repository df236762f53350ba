//! Point-in-time view of the book for market data consumers

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};

use super::price_level::PriceLevel;

/// Default number of levels returned per side.
pub const DEFAULT_BOOK_DEPTH: usize = 20;

/// A bounded snapshot of both sides of the book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookSnapshot {
    /// Bid levels in descending price order (best first)
    pub bids: Vec<PriceLevel>,
    /// Ask levels in ascending price order (best first)
    pub asks: Vec<PriceLevel>,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    /// Unix nanoseconds when the snapshot was taken
    pub as_of: i64,
}

impl BookSnapshot {
    /// Best ask minus best bid, if both sides are populated
    pub fn spread(&self) -> Option<Decimal> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => Some(ask.as_decimal() - bid.as_decimal()),
            _ => None,
        }
    }

    /// Average of best bid and best ask
    pub fn mid_price(&self) -> Option<Decimal> {
        match (self.best_bid, self.best_ask) {
            (Some(bid), Some(ask)) => {
                Some((bid.as_decimal() + ask.as_decimal()) / Decimal::from(2))
            }
            _ => None,
        }
    }

    /// Size visible on the bid side of this snapshot
    pub fn bid_volume(&self) -> Quantity {
        self.bids.iter().map(|level| level.size).sum()
    }

    /// Size visible on the ask side of this snapshot
    pub fn ask_volume(&self) -> Quantity {
        self.asks.iter().map(|level| level.size).sum()
    }

    /// Compare everything except `as_of`.
    pub fn same_levels(&self, other: &BookSnapshot) -> bool {
        self.bids == other.bids
            && self.asks == other.asks
            && self.best_bid == other.best_bid
            && self.best_ask == other.best_ask
    }
}
