//! OHLCV candle aggregation
//!
//! Folds trades into fixed-width buckets aligned to the epoch. Bucket
//! starts use Euclidean floor division so timestamps before the epoch
//! still land in the bucket that contains them.
//!
//! Candles are derived state: `CandleSeries::rebuild` recomputes them from
//! the trade tape.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use types::numeric::{Price, Quantity};
use types::trade::Trade;

use crate::trades::TradeTape;

/// Default bucket width (60s) in nanoseconds.
pub const DEFAULT_CANDLE_INTERVAL_NANOS: i64 = 60 * 1_000_000_000;

/// Default number of candles retained.
pub const DEFAULT_CANDLE_CAPACITY: usize = 500;

/// Start of the bucket containing `timestamp_nanos`.
pub fn align_to_bucket(timestamp_nanos: i64, interval_nanos: i64) -> i64 {
    timestamp_nanos.div_euclid(interval_nanos) * interval_nanos
}

/// A single OHLCV candle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub bucket_start: i64,
    pub open: Price,
    pub high: Price,
    pub low: Price,
    pub close: Price,
    pub volume: Quantity,
    pub trade_count: u64,
}

impl Candle {
    /// Create a new candle from the first trade in its bucket.
    fn open_with(trade: &Trade, bucket_start: i64) -> Self {
        Self {
            bucket_start,
            open: trade.price,
            high: trade.price,
            low: trade.price,
            close: trade.price,
            volume: trade.size,
            trade_count: 1,
        }
    }

    /// Fold another trade from the same bucket.
    fn update(&mut self, trade: &Trade) {
        if trade.price > self.high {
            self.high = trade.price;
        }
        if trade.price < self.low {
            self.low = trade.price;
        }
        self.close = trade.price;
        self.volume += trade.size;
        self.trade_count += 1;
    }

    /// Validate OHLC invariants.
    pub fn is_valid(&self) -> bool {
        self.high >= self.open
            && self.high >= self.close
            && self.high >= self.low
            && self.low <= self.open
            && self.low <= self.close
            && self.volume.is_positive()
    }
}

/// Bounded candle history for one market, newest first.
#[derive(Debug, Clone)]
pub struct CandleSeries {
    /// Sorted by bucket_start, descending.
    candles: VecDeque<Candle>,
    interval_nanos: i64,
    capacity: usize,
}

impl CandleSeries {
    pub fn new(interval_nanos: i64, capacity: usize) -> Self {
        Self {
            candles: VecDeque::new(),
            interval_nanos,
            capacity,
        }
    }

    /// Fold `trade` into its bucket.
    ///
    /// A trade in the newest bucket extends it; a later bucket opens a new
    /// candle at the front. Late trades for an older bucket update that
    /// bucket (or open it in place) so the series stays sorted.
    pub fn apply(&mut self, trade: &Trade) {
        let bucket = align_to_bucket(trade.executed_at, self.interval_nanos);

        match self.candles.iter().position(|c| c.bucket_start <= bucket) {
            Some(i) if self.candles[i].bucket_start == bucket => self.candles[i].update(trade),
            Some(i) => self.candles.insert(i, Candle::open_with(trade, bucket)),
            None => self.candles.push_back(Candle::open_with(trade, bucket)),
        }

        self.candles.truncate(self.capacity);
    }

    /// Recompute every candle from the tape's retained trades.
    pub fn rebuild(&mut self, tape: &TradeTape) {
        self.candles.clear();
        for trade in tape.chronological() {
            self.apply(trade);
        }
    }

    /// Up to `limit` candles, newest first.
    pub fn recent(&self, limit: usize) -> Vec<Candle> {
        self.candles.iter().take(limit).cloned().collect()
    }

    pub fn latest(&self) -> Option<&Candle> {
        self.candles.front()
    }

    pub fn interval_nanos(&self) -> i64 {
        self.interval_nanos
    }

    pub fn len(&self) -> usize {
        self.candles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candles.is_empty()
    }

    pub fn clear(&mut self) {
        self.candles.clear();
    }
}

impl Default for CandleSeries {
    fn default() -> Self {
        Self::new(DEFAULT_CANDLE_INTERVAL_NANOS, DEFAULT_CANDLE_CAPACITY)
    }
}
