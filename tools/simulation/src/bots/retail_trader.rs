//! Retail random trader bot
//!
//! Generates random orders with deterministic seeded RNG for simulation.
//! Produces a mix of market and limit orders around a reference price to
//! simulate retail flow.

use market_data::Market;
use matching_engine::PlaceOutcome;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rust_decimal::prelude::*;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use types::errors::{ConfigError, EngineError};
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};

/// Configuration for the retail random trader.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetailTraderConfig {
    /// Minimum order size (shares)
    pub min_size: Decimal,
    /// Maximum order size (shares)
    pub max_size: Decimal,
    /// Probability of market order (0.0 to 1.0)
    pub market_order_ratio: f64,
    /// Maximum distance from the reference price for limit orders (in bps)
    pub max_limit_distance_bps: u32,
    /// Probability that a limit order is priced through the reference
    /// price instead of behind it
    pub aggressive_limit_ratio: f64,
}

impl Default for RetailTraderConfig {
    fn default() -> Self {
        Self {
            min_size: Decimal::new(1, 2),
            max_size: Decimal::ONE,
            market_order_ratio: 0.3,
            max_limit_distance_bps: 50,
            aggressive_limit_ratio: 0.2,
        }
    }
}

impl RetailTraderConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_size <= Decimal::ZERO || self.max_size < self.min_size {
            return Err(ConfigError::InvalidSetting {
                name: "min_size/max_size".to_string(),
                reason: format!("need 0 < min_size <= max_size, got {} and {}", self.min_size, self.max_size),
            });
        }
        for (name, ratio) in [
            ("market_order_ratio", self.market_order_ratio),
            ("aggressive_limit_ratio", self.aggressive_limit_ratio),
        ] {
            if !(0.0..=1.0).contains(&ratio) {
                return Err(ConfigError::InvalidSetting {
                    name: name.to_string(),
                    reason: format!("must be within [0, 1], got {ratio}"),
                });
            }
        }
        if self.max_limit_distance_bps == 0 || self.max_limit_distance_bps >= 10_000 {
            return Err(ConfigError::InvalidSetting {
                name: "max_limit_distance_bps".to_string(),
                reason: "must be within 1..10000".to_string(),
            });
        }
        Ok(())
    }
}

/// Retail random trader with deterministic seeded RNG.
#[derive(Debug, Clone)]
pub struct RetailTrader {
    pub trader_id: u32,
    pub config: RetailTraderConfig,
    pub orders_submitted: usize,
    rng: ChaCha8Rng,
}

impl RetailTrader {
    /// Create a new retail trader with a deterministic seed.
    pub fn new(trader_id: u32, config: RetailTraderConfig, seed: u64) -> Self {
        Self {
            trader_id,
            config,
            orders_submitted: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generate a random order around `reference`.
    ///
    /// Returns None if the reference price is not positive.
    pub fn generate_order(&mut self, reference: Price, timestamp: i64) -> Option<Order> {
        if !reference.is_positive() {
            return None;
        }
        let reference = reference.as_decimal();

        // Random side
        let side = if self.rng.gen_bool(0.5) { Side::BUY } else { Side::SELL };

        // Random size within range
        let min_f = self.config.min_size.to_f64().unwrap_or(0.01);
        let max_f = self.config.max_size.to_f64().unwrap_or(1.0);
        let size_f: f64 = self.rng.gen_range(min_f..=max_f);
        let size = Decimal::from_f64(size_f)
            .unwrap_or(self.config.min_size)
            .round_dp(8)
            .max(self.config.min_size);
        let size = Quantity::new(size);

        let order = if self.rng.gen_bool(self.config.market_order_ratio) {
            Order::market(side, size, timestamp)
        } else {
            let bps: u32 = self.rng.gen_range(1..=self.config.max_limit_distance_bps);
            let distance = reference * Decimal::from(bps) / Decimal::from(10_000);
            let aggressive = self.rng.gen_bool(self.config.aggressive_limit_ratio);
            let price = match (side, aggressive) {
                (Side::BUY, false) | (Side::SELL, true) => reference - distance,
                (Side::BUY, true) | (Side::SELL, false) => reference + distance,
            };
            let price = Price::new(price).round6();
            if !price.is_positive() {
                return None;
            }
            Order::limit(side, price, size, timestamp)
        };

        self.orders_submitted += 1;
        Some(order)
    }

    /// Generate and place an order on `market`.
    ///
    /// The reference price is the book mid when both sides are populated,
    /// otherwise the last traded price. Returns None when neither exists.
    pub fn tick(
        &mut self,
        market: &mut Market,
        timestamp: i64,
    ) -> Option<Result<PlaceOutcome, EngineError>> {
        let reference = reference_price(market)?;
        let order = self.generate_order(reference, timestamp)?;
        Some(market.place(order))
    }
}

/// Book mid, falling back to the last traded price.
pub fn reference_price(market: &Market) -> Option<Price> {
    market
        .book(1)
        .mid_price()
        .map(Price::new)
        .or_else(|| market.last_price())
}
