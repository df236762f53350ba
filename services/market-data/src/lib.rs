//! Market Data Service
//!
//! Wraps a matching engine into a market session and derives public data
//! from its executions:
//! - Bounded trade tape, most recent first
//! - OHLCV candles in fixed buckets
//! - VWAP, TWAP and annualized realized volatility
//! - A polling loop that republishes a `MarketView` on a timer
//!
//! # Architecture
//!
//! ```text
//!       Order
//!         │
//!   ┌─────▼─────┐
//!   │  Market   │
//!   │ ┌───────┐ │
//!   │ │Engine │ │  ← book, seeding, matching
//!   │ └───┬───┘ │
//!   │     │ trades
//!   │ ┌───▼───┐ ┌────────┐
//!   │ │ Tape  │ │Candles │
//!   │ └───┬───┘ └────────┘
//!   └─────┼─────┘
//!         │
//!   ┌─────▼─────┐
//!   │ Analytics │  ← recomputed per query
//!   └───────────┘
//! ```

pub mod analytics;
pub mod candles;
pub mod clock;
pub mod config;
pub mod market;
pub mod refresh;
pub mod trades;

pub use candles::{Candle, CandleSeries};
pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{MarketDataConfig, RefreshConfig};
pub use market::{Market, MarketView};
pub use refresh::{shared, spawn_refresh, RefreshHandle, SharedMarket};
pub use trades::TradeTape;

// Library version
pub const SERVICE_VERSION: &str = "0.1.0";
