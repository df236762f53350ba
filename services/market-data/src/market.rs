//! Market session
//!
//! A `Market` owns one matching engine together with its trade tape and
//! candle history. Every `place` call updates all three atomically with
//! respect to callers holding `&mut Market`.

use std::sync::Arc;

use matching_engine::{BookSnapshot, MatchingEngine, PlaceOutcome};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use types::config::MarketConfig;
use types::errors::EngineError;
use types::numeric::Price;
use types::order::Order;
use types::trade::Trade;

use crate::analytics;
use crate::candles::{Candle, CandleSeries};
use crate::clock::{Clock, SystemClock};
use crate::config::{MarketDataConfig, RefreshConfig};
use crate::trades::TradeTape;

/// Everything a poller needs in one read
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketView {
    pub book: BookSnapshot,
    pub trades: Vec<Trade>,
    pub candles: Vec<Candle>,
    pub last_price: Option<Price>,
    pub vwap: Option<Price>,
    pub twap: Option<Price>,
    pub realized_volatility: Option<f64>,
    pub as_of: i64,
}

/// A single simulated market
#[derive(Debug)]
pub struct Market {
    config: MarketConfig,
    settings: MarketDataConfig,
    engine: MatchingEngine,
    tape: TradeTape,
    candles: CandleSeries,
    clock: Arc<dyn Clock>,
}

impl Market {
    /// Build and seed a market with default settings and the wall clock.
    pub fn new(config: MarketConfig) -> Result<Self, EngineError> {
        Self::with_settings(config, MarketDataConfig::default(), Arc::new(SystemClock))
    }

    pub fn with_settings(
        config: MarketConfig,
        settings: MarketDataConfig,
        clock: Arc<dyn Clock>,
    ) -> Result<Self, EngineError> {
        settings.validate()?;
        let engine = MatchingEngine::new(&config)?;

        info!(
            total_shares = config.total_shares,
            issued_shares = config.issued_shares,
            treasury_ask_price = %config.treasury_ask_price,
            seed_depth = config.seed_depth,
            "Market created"
        );

        Ok(Self {
            tape: TradeTape::new(settings.trade_capacity),
            candles: CandleSeries::new(settings.candle_interval_nanos(), settings.candle_capacity),
            config,
            settings,
            engine,
            clock,
        })
    }

    /// Match an order and record its trades.
    pub fn place(&mut self, order: Order) -> Result<PlaceOutcome, EngineError> {
        let outcome = self.engine.place(order)?;
        for trade in &outcome.filled {
            self.candles.apply(trade);
        }
        self.tape.record_all(&outcome.filled);
        Ok(outcome)
    }

    /// Discard all state and rebuild from `config`.
    ///
    /// An invalid config leaves the current market untouched.
    pub fn reset(&mut self, config: MarketConfig) -> Result<(), EngineError> {
        let engine = match MatchingEngine::new(&config) {
            Ok(engine) => engine,
            Err(e) => {
                warn!(error = %e, "Market reset rejected");
                return Err(e);
            }
        };

        self.engine = engine;
        self.tape.clear();
        self.candles.clear();
        self.config = config;

        info!(
            total_shares = self.config.total_shares,
            issued_shares = self.config.issued_shares,
            treasury_ask_price = %self.config.treasury_ask_price,
            "Market reset"
        );
        Ok(())
    }

    /// Up to `depth` levels per side, stamped with the clock's now
    pub fn book(&self, depth: usize) -> BookSnapshot {
        self.engine.snapshot(depth, self.now())
    }

    pub fn book_default(&self) -> BookSnapshot {
        self.book(self.settings.default_book_depth)
    }

    /// Newest-first trades, capped at `max_trade_limit`
    pub fn trades(&self, limit: usize) -> Vec<Trade> {
        self.tape.recent(limit.min(self.settings.max_trade_limit))
    }

    pub fn trades_default(&self) -> Vec<Trade> {
        self.trades(self.settings.max_trade_limit)
    }

    /// Newest-first candles
    pub fn candles(&self, limit: usize) -> Vec<Candle> {
        self.candles.recent(limit)
    }

    pub fn last_price(&self) -> Option<Price> {
        self.engine.last_price()
    }

    pub fn vwap(&self, window_hours: u32) -> Option<Price> {
        let since = analytics::window_start_hours(self.now(), window_hours);
        analytics::vwap(self.tape.iter(), since, self.last_price())
    }

    pub fn twap(&self, window_minutes: u32) -> Option<Price> {
        let since = analytics::window_start_minutes(self.now(), window_minutes);
        analytics::twap(self.tape.iter(), since, self.last_price())
    }

    pub fn realized_volatility(&self) -> Option<f64> {
        let since =
            analytics::window_start_minutes(self.now(), self.settings.volatility_window_minutes);
        analytics::realized_volatility(self.tape.chronological(), since)
    }

    /// Snapshot of book, tape and statistics for polling
    pub fn view(&self, refresh: &RefreshConfig) -> MarketView {
        MarketView {
            book: self.book(refresh.book_depth),
            trades: self.trades(refresh.trade_limit),
            candles: self.candles(refresh.candle_limit),
            last_price: self.last_price(),
            vwap: self.vwap(refresh.vwap_hours),
            twap: self.twap(refresh.twap_minutes),
            realized_volatility: self.realized_volatility(),
            as_of: self.now(),
        }
    }

    pub fn config(&self) -> &MarketConfig {
        &self.config
    }

    pub fn settings(&self) -> &MarketDataConfig {
        &self.settings
    }

    pub fn engine(&self) -> &MatchingEngine {
        &self.engine
    }

    pub fn tape(&self) -> &TradeTape {
        &self.tape
    }

    pub fn now(&self) -> i64 {
        self.clock.now_nanos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use rust_decimal_macros::dec;
    use types::numeric::Quantity;
    use types::order::Side;

    const T0: i64 = 1708123440000000000;

    fn market_with_clock() -> (Market, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::new(T0));
        let config = MarketConfig::new(10, 3, Price::new(dec!(0.25)));
        let market = Market::with_settings(config, MarketDataConfig::default(), clock.clone()).unwrap();
        (market, clock)
    }

    #[test]
    fn test_new_market_has_seeded_book() {
        let (market, _) = market_with_clock();
        let book = market.book_default();
        assert_eq!(book.asks.len(), 12);
        assert_eq!(book.bids.len(), 12);
        assert_eq!(book.as_of, T0);
        assert!(market.trades_default().is_empty());
        assert_eq!(market.last_price(), Some(Price::new(dec!(0.25))));
    }

    #[test]
    fn test_place_records_trades_and_candles() {
        let (mut market, _) = market_with_clock();
        let outcome = market
            .place(Order::market(Side::BUY, Quantity::new(dec!(1)), T0))
            .unwrap();

        assert_eq!(outcome.filled.len(), 2);
        let trades = market.trades(10);
        assert_eq!(trades.len(), 2);
        assert_eq!(trades[0].sequence, 2);
        assert_eq!(market.last_price(), Some(trades[0].price));

        let candles = market.candles(10);
        assert_eq!(candles.len(), 1);
        assert_eq!(candles[0].trade_count, 2);
        assert_eq!(candles[0].open, Price::new(dec!(0.25)));
        assert_eq!(candles[0].close, Price::new(dec!(0.25125)));
    }

    #[test]
    fn test_rejected_order_leaves_state() {
        let (mut market, _) = market_with_clock();
        let before = market.book_default();
        assert!(market
            .place(Order::market(Side::BUY, Quantity::zero(), T0))
            .is_err());
        assert!(market.book_default().same_levels(&before));
        assert!(market.trades_default().is_empty());
        assert!(market.candles(10).is_empty());
    }

    #[test]
    fn test_trade_limit_is_capped() {
        let clock = Arc::new(ManualClock::new(T0));
        let settings = MarketDataConfig {
            max_trade_limit: 3,
            ..Default::default()
        };
        let config = MarketConfig::new(10, 3, Price::new(dec!(0.25)));
        let mut market = Market::with_settings(config, settings, clock).unwrap();
        market
            .place(Order::market(Side::BUY, Quantity::new(dec!(5)), T0))
            .unwrap();

        assert_eq!(market.trades(1000).len(), 3);
        assert_eq!(market.trades(2).len(), 2);
    }

    #[test]
    fn test_analytics_fall_back_to_treasury_price() {
        let (market, _) = market_with_clock();
        let treasury = Some(Price::new(dec!(0.25)));
        assert_eq!(market.vwap(24), treasury);
        assert_eq!(market.twap(5), treasury);
        assert_eq!(market.realized_volatility(), None);
    }

    #[test]
    fn test_analytics_windows_follow_clock() {
        let (mut market, clock) = market_with_clock();
        market
            .place(Order::limit(Side::BUY, Price::new(dec!(0.25)), Quantity::new(dec!(0.5)), T0))
            .unwrap();
        market
            .place(Order::market(Side::SELL, Quantity::new(dec!(0.125)), T0 + 1))
            .unwrap();
        market
            .place(Order::market(Side::BUY, Quantity::new(dec!(0.05)), T0 + 2))
            .unwrap();

        assert!(market.realized_volatility().unwrap() > 0.0);
        let twap = market.twap(5).unwrap();
        assert!(twap < Price::new(dec!(0.25)));

        // Ten minutes later the 5 minute window is empty
        clock.advance_secs(600);
        assert_eq!(market.twap(5), market.last_price());
        assert!(market.vwap(24).is_some());
        assert!(market.realized_volatility().is_some());

        // After the volatility hour nothing is left
        clock.advance_secs(3600);
        assert_eq!(market.realized_volatility(), None);
    }

    #[test]
    fn test_reset_discards_state() {
        let (mut market, _) = market_with_clock();
        market
            .place(Order::market(Side::BUY, Quantity::new(dec!(2)), T0))
            .unwrap();

        let config = MarketConfig::new(100, 50, Price::new(dec!(1))).with_seed_depth(4);
        market.reset(config.clone()).unwrap();

        assert_eq!(market.config(), &config);
        assert!(market.trades_default().is_empty());
        assert!(market.candles(10).is_empty());
        assert_eq!(market.last_price(), Some(Price::new(dec!(1))));
        assert_eq!(market.book_default().asks.len(), 4);
        assert_eq!(market.engine().next_sequence(), 1);
    }

    #[test]
    fn test_failed_reset_keeps_market() {
        let (mut market, _) = market_with_clock();
        market
            .place(Order::market(Side::BUY, Quantity::new(dec!(1)), T0))
            .unwrap();
        let before = market.book_default();

        let bad = MarketConfig::new(10, 20, Price::new(dec!(1)));
        assert!(matches!(market.reset(bad), Err(EngineError::Config(_))));
        assert!(market.book_default().same_levels(&before));
        assert_eq!(market.trades_default().len(), 2);
        assert_eq!(market.config().total_shares, 10);
    }

    #[test]
    fn test_reset_to_oversized_price_keeps_market() {
        let (mut market, _) = market_with_clock();
        let before = market.book_default();

        let huge = MarketConfig::new(10, 3, Price::new(rust_decimal::Decimal::MAX));
        assert!(matches!(market.reset(huge), Err(EngineError::Config(_))));
        assert!(market.book_default().same_levels(&before));
        assert_eq!(market.last_price(), Some(Price::new(dec!(0.25))));
    }

    #[test]
    fn test_unrepresentable_notional_keeps_analytics_alive() {
        let (mut market, _) = market_with_clock();
        market
            .place(Order::limit(
                Side::SELL,
                Price::new(dec!(1000000000000000)),
                Quantity::new(dec!(100000000000000)),
                T0,
            ))
            .unwrap();
        // sweeps the seeded asks, then the huge level
        market
            .place(Order::market(Side::BUY, Quantity::new(dec!(100000000000000)), T0))
            .unwrap();

        assert_eq!(market.last_price(), Some(Price::new(dec!(1000000000000000))));
        assert_eq!(market.vwap(24), market.last_price());
        assert!(market.twap(5).is_some());
        let view = market.view(&RefreshConfig::default());
        assert_eq!(view.vwap, market.last_price());
    }

    #[test]
    fn test_view_bundles_everything() {
        let (mut market, _) = market_with_clock();
        market
            .place(Order::market(Side::BUY, Quantity::new(dec!(1)), T0))
            .unwrap();

        let refresh = RefreshConfig {
            book_depth: 5,
            trade_limit: 1,
            ..Default::default()
        };
        let view = market.view(&refresh);
        assert_eq!(view.book.asks.len(), 5);
        assert_eq!(view.trades.len(), 1);
        assert_eq!(view.candles.len(), 1);
        assert_eq!(view.last_price, market.last_price());
        assert_eq!(view.as_of, T0);

        let json = serde_json::to_string(&view).unwrap();
        let back: MarketView = serde_json::from_str(&json).unwrap();
        assert_eq!(back, view);
    }
}
