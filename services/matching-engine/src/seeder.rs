//! Liquidity seeding
//!
//! Populates a fresh book from a `MarketConfig` with no randomness:
//! - treasury asks: the unissued supply split into `seed_depth` clips,
//!   each 0.5% above the previous, starting at the treasury ask price
//! - holder bids: half of the issued float split into `seed_depth` clips,
//!   stepping down 0.5% at a time below the treasury ask price
//!
//! Prices are rounded to 6 decimal places.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use types::config::MarketConfig;
use types::errors::{ConfigError, EngineError};
use types::numeric::{Price, Quantity};
use types::order::Side;

use crate::book::OrderBook;

/// Relative distance between consecutive seeded levels (0.5%).
const LEVEL_STEP: Decimal = Decimal::from_parts(5, 0, 0, false, 3);
/// Smallest treasury clip per ask level.
const MIN_ASK_CLIP: Decimal = Decimal::from_parts(5, 0, 0, false, 2);
/// Smallest holder clip per bid level.
const MIN_BID_CLIP: Decimal = Decimal::from_parts(3, 0, 0, false, 2);
/// Fraction of issued shares offered as synthetic holder demand.
const HOLDER_BID_FLOAT: Decimal = Decimal::from_parts(5, 0, 0, false, 1);

/// What the seeder placed on the book
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedSummary {
    pub ask_levels: usize,
    pub bid_levels: usize,
    pub ask_clip: Quantity,
    pub bid_clip: Quantity,
}

/// Size of each treasury ask clip
pub fn ask_clip(config: &MarketConfig) -> Quantity {
    let remaining_supply = config.total_shares.saturating_sub(config.issued_shares);
    let per_level = Decimal::from(remaining_supply) / Decimal::from(config.seed_depth);
    Quantity::new(per_level.max(MIN_ASK_CLIP))
}

/// Size of each holder bid clip
pub fn bid_clip(config: &MarketConfig) -> Quantity {
    let bid_float = Decimal::from(config.issued_shares) * HOLDER_BID_FLOAT;
    let per_level = bid_float / Decimal::from(config.seed_depth);
    Quantity::new(per_level.max(MIN_BID_CLIP))
}

/// Multiplier applied to the treasury ask price for the `step`-th level.
fn level_factor(step: i64) -> Decimal {
    Decimal::ONE + Decimal::from(step) * LEVEL_STEP
}

/// Price of the `step`-th level away from the treasury ask price.
///
/// Errors when the price does not fit a decimal.
fn stepped_price(base: Price, step: i64) -> Result<Price, ConfigError> {
    base.as_decimal()
        .checked_mul(level_factor(step))
        .map(|p| Price::new(p).round6())
        .ok_or_else(|| ConfigError::SeedPriceOutOfRange(base.to_string()))
}

/// Seed `book` according to `config`.
///
/// Bid levels whose price would round to zero or below are skipped, which
/// only happens for seed depths of 200 or more. Bids follow
/// `ask * (1 - i * 0.005)` for `i` in `1..=depth`, so `(10, 3, 0.25)` seeds
/// bids at 0.24875, 0.2475, ... and not at 0.249875, 0.24975, which would
/// need a 0.05% step.
///
/// All ask prices are computed before the book is touched, so a treasury
/// price too large to step up leaves `book` unchanged.
pub fn seed_book(book: &mut OrderBook, config: &MarketConfig) -> Result<SeedSummary, EngineError> {
    config.validate()?;
    let base = config.treasury_ask_price;
    let depth = i64::from(config.seed_depth);

    let ask_prices = (0..depth)
        .map(|i| stepped_price(base, i))
        .collect::<Result<Vec<_>, _>>()?;

    let ask_size = ask_clip(config);
    for price in ask_prices {
        book.add_level(Side::SELL, price, ask_size)?;
    }

    let bid_size = bid_clip(config);
    let mut bid_levels = 0;
    for i in 1..=depth {
        if level_factor(-i) <= Decimal::ZERO {
            debug!(step = i, "Skipping non-positive seeded bid level");
            continue;
        }
        let price = stepped_price(base, -i)?;
        if !price.is_positive() {
            debug!(step = i, "Skipping non-positive seeded bid level");
            continue;
        }
        book.add_level(Side::BUY, price, bid_size)?;
        bid_levels += 1;
    }

    let summary = SeedSummary {
        ask_levels: book.level_count(Side::SELL),
        bid_levels,
        ask_clip: ask_size,
        bid_clip: bid_size,
    };

    info!(
        treasury_ask_price = %base,
        ask_levels = summary.ask_levels,
        bid_levels = summary.bid_levels,
        ask_clip = %summary.ask_clip,
        bid_clip = %summary.bid_clip,
        "Seeded initial liquidity"
    );

    Ok(summary)
}
