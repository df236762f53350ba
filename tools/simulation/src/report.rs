//! Simulation report
//!
//! Counters accumulated while the simulation runs, plus the market's
//! closing statistics.

use market_data::Market;
use matching_engine::PlaceOutcome;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};

/// Aggregated simulation results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimReport {
    pub ticks: u64,
    pub total_orders: u64,
    pub market_orders: u64,
    pub limit_orders: u64,
    pub rejected_orders: u64,
    pub total_trades: u64,
    pub fully_filled: u64,
    pub rested_orders: u64,
    pub discarded_orders: u64,
    pub discarded_size: Quantity,
    pub total_volume: Quantity,
    /// None once the running notional no longer fits a decimal
    pub total_notional: Option<Decimal>,
    pub closing: ClosingStats,
}

/// Market state when the simulation finished
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClosingStats {
    pub last_price: Option<Price>,
    pub best_bid: Option<Price>,
    pub best_ask: Option<Price>,
    pub spread: Option<Decimal>,
    pub bid_depth: Option<Quantity>,
    pub ask_depth: Option<Quantity>,
    pub vwap_24h: Option<Price>,
    pub twap_5m: Option<Price>,
    pub realized_volatility: Option<f64>,
    pub candles: usize,
    pub tape_len: usize,
}

impl SimReport {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            total_orders: 0,
            market_orders: 0,
            limit_orders: 0,
            rejected_orders: 0,
            total_trades: 0,
            fully_filled: 0,
            rested_orders: 0,
            discarded_orders: 0,
            discarded_size: Quantity::zero(),
            total_volume: Quantity::zero(),
            total_notional: Some(Decimal::ZERO),
            closing: ClosingStats::default(),
        }
    }

    /// Record the outcome of one accepted order.
    pub fn record_outcome(&mut self, outcome: &PlaceOutcome) {
        self.total_orders += 1;
        match outcome.order_type {
            types::order::OrderType::Market => self.market_orders += 1,
            types::order::OrderType::Limit => self.limit_orders += 1,
        }

        self.total_trades += outcome.filled.len() as u64;
        for trade in &outcome.filled {
            self.total_volume = self.total_volume.saturating_add(trade.size);
            self.total_notional = self
                .total_notional
                .zip(trade.trade_value())
                .and_then(|(total, value)| total.checked_add(value));
        }

        if outcome.is_fully_filled() {
            self.fully_filled += 1;
        }
        if outcome.rested() {
            self.rested_orders += 1;
        }
        if outcome.was_discarded() {
            self.discarded_orders += 1;
            self.discarded_size += outcome.remaining_size();
        }
    }

    pub fn record_rejection(&mut self) {
        self.total_orders += 1;
        self.rejected_orders += 1;
    }

    /// Capture closing statistics from `market`.
    pub fn close(&mut self, market: &Market) {
        let book = market.book(usize::MAX);
        self.closing = ClosingStats {
            last_price: market.last_price(),
            best_bid: book.best_bid,
            best_ask: book.best_ask,
            spread: book.spread(),
            bid_depth: Some(book.bid_volume()),
            ask_depth: Some(book.ask_volume()),
            vwap_24h: market.vwap(24),
            twap_5m: market.twap(5),
            realized_volatility: market.realized_volatility(),
            candles: market.candles(usize::MAX).len(),
            tape_len: market.tape().len(),
        };
    }

    /// Average execution price across the run
    pub fn average_price(&self) -> Option<Price> {
        if !self.total_volume.is_positive() {
            return None;
        }
        self.total_notional?
            .checked_div(self.total_volume.as_decimal())
            .map(Price::new)
    }
}

impl Default for SimReport {
    fn default() -> Self {
        Self::new()
    }
}
