//! Simulation settings
//!
//! Loaded from JSON by the `market-sim` binary. Missing fields fall back
//! to the reference market with ten retail traders.

use market_data::MarketDataConfig;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::config::MarketConfig;
use types::errors::ConfigError;
use types::numeric::Price;

use crate::bots::RetailTraderConfig;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub market: MarketConfig,
    pub settings: MarketDataConfig,
    pub trader: RetailTraderConfig,
    /// Number of retail traders; each places one order per tick
    pub traders: u32,
    pub ticks: u64,
    /// Simulated time between ticks
    pub tick_interval_ms: u64,
    /// Base RNG seed; trader `i` uses `seed + i`
    pub seed: u64,
    /// Simulated start time, Unix nanos
    pub start_nanos: i64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            market: MarketConfig::new(10, 3, Price::new(Decimal::new(25, 2))),
            settings: MarketDataConfig::default(),
            trader: RetailTraderConfig::default(),
            traders: 10,
            ticks: 1_000,
            tick_interval_ms: 250,
            seed: 42,
            // 2024-02-16T22:44:00Z
            start_nanos: 1_708_123_440_000_000_000,
        }
    }
}

impl SimConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.market.validate()?;
        self.settings.validate()?;
        self.trader.validate()?;
        if self.traders == 0 {
            return Err(ConfigError::InvalidSetting {
                name: "traders".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Simulated nanoseconds between ticks
    pub fn tick_interval_nanos(&self) -> i64 {
        i64::try_from(self.tick_interval_ms)
            .unwrap_or(i64::MAX)
            .saturating_mul(1_000_000)
    }
}
