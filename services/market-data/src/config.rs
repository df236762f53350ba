//! Market data settings
//!
//! Every field has a default, so an empty JSON object is a valid config.

use matching_engine::DEFAULT_BOOK_DEPTH;
use serde::{Deserialize, Serialize};
use types::errors::ConfigError;

use crate::candles::{DEFAULT_CANDLE_CAPACITY, DEFAULT_CANDLE_INTERVAL_NANOS};
use crate::trades::DEFAULT_TAPE_CAPACITY;

/// Bounds and defaults for a market session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketDataConfig {
    /// Trades kept on the tape before the oldest are evicted
    pub trade_capacity: usize,
    /// Candles kept before the oldest are evicted
    pub candle_capacity: usize,
    /// Candle bucket width
    pub candle_interval_secs: u64,
    /// Depth used by `Market::book_default`
    pub default_book_depth: usize,
    /// Hard cap on `Market::trades`
    pub max_trade_limit: usize,
    /// Lookback for realized volatility
    pub volatility_window_minutes: u32,
}

impl Default for MarketDataConfig {
    fn default() -> Self {
        Self {
            trade_capacity: DEFAULT_TAPE_CAPACITY,
            candle_capacity: DEFAULT_CANDLE_CAPACITY,
            candle_interval_secs: (DEFAULT_CANDLE_INTERVAL_NANOS / 1_000_000_000) as u64,
            default_book_depth: DEFAULT_BOOK_DEPTH,
            max_trade_limit: 200,
            volatility_window_minutes: 60,
        }
    }
}

impl MarketDataConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("trade_capacity", self.trade_capacity as u64)?;
        positive("candle_capacity", self.candle_capacity as u64)?;
        positive("candle_interval_secs", self.candle_interval_secs)?;
        positive("max_trade_limit", self.max_trade_limit as u64)?;
        positive("volatility_window_minutes", u64::from(self.volatility_window_minutes))?;
        Ok(())
    }

    /// Candle bucket width in nanoseconds
    pub fn candle_interval_nanos(&self) -> i64 {
        i64::try_from(self.candle_interval_secs)
            .unwrap_or(i64::MAX)
            .saturating_mul(1_000_000_000)
    }
}

/// What the refresh loop publishes and how often
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefreshConfig {
    pub interval_ms: u64,
    pub book_depth: usize,
    pub trade_limit: usize,
    pub candle_limit: usize,
    pub vwap_hours: u32,
    pub twap_minutes: u32,
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            book_depth: DEFAULT_BOOK_DEPTH,
            trade_limit: 50,
            candle_limit: 30,
            vwap_hours: 24,
            twap_minutes: 5,
        }
    }
}

impl RefreshConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("interval_ms", self.interval_ms)?;
        Ok(())
    }
}

fn positive(name: &str, value: u64) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(ConfigError::InvalidSetting {
            name: name.to_string(),
            reason: "must be positive".to_string(),
        });
    }
    Ok(())
}
