//! Trade tape
//!
//! Bounded, append-only log of executed trades. The newest trade sits at
//! the front; once the tape is full the oldest trades fall off the back.

use std::collections::VecDeque;

use types::trade::Trade;

/// Default number of trades retained.
pub const DEFAULT_TAPE_CAPACITY: usize = 5000;

/// Most-recent-first trade history for one market.
#[derive(Debug, Clone)]
pub struct TradeTape {
    /// Newest first.
    trades: VecDeque<Trade>,
    capacity: usize,
}

impl TradeTape {
    pub fn new(capacity: usize) -> Self {
        Self {
            trades: VecDeque::with_capacity(capacity.min(DEFAULT_TAPE_CAPACITY)),
            capacity,
        }
    }

    /// Record a trade, evicting the oldest if the tape is full.
    pub fn record(&mut self, trade: Trade) {
        self.trades.push_front(trade);
        self.trades.truncate(self.capacity);
    }

    /// Record trades in execution order.
    pub fn record_all<'a>(&mut self, trades: impl IntoIterator<Item = &'a Trade>) {
        for trade in trades {
            self.record(trade.clone());
        }
    }

    /// Up to `n` trades, newest first.
    pub fn recent(&self, n: usize) -> Vec<Trade> {
        self.trades.iter().take(n).cloned().collect()
    }

    /// Newest-first iterator over every retained trade.
    pub fn iter(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter()
    }

    /// Oldest-first iterator over every retained trade.
    pub fn chronological(&self) -> impl Iterator<Item = &Trade> {
        self.trades.iter().rev()
    }

    /// Oldest-first trades executed at or after `since`.
    pub fn since(&self, since: i64) -> impl Iterator<Item = &Trade> {
        self.chronological().filter(move |t| t.executed_at >= since)
    }

    pub fn latest(&self) -> Option<&Trade> {
        self.trades.front()
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.trades.clear();
    }
}

impl Default for TradeTape {
    fn default() -> Self {
        Self::new(DEFAULT_TAPE_CAPACITY)
    }
}
