//! Determinism tests for the market session
//!
//! Two markets built from the same config and fed the same orders must
//! publish identical books, tapes, candles and statistics.

use std::sync::Arc;

use market_data::{ManualClock, Market, MarketDataConfig};
use proptest::prelude::*;
use rust_decimal::Decimal;
use types::config::MarketConfig;
use types::numeric::{Price, Quantity};
use types::order::{Order, Side};
use types::trade::Trade;

const T0: i64 = 1708123440000000000;
const SECOND: i64 = 1_000_000_000;

fn market() -> Market {
    let config = MarketConfig::new(1_000, 400, Price::new(Decimal::new(25, 2))).with_seed_depth(20);
    Market::with_settings(config, MarketDataConfig::default(), Arc::new(ManualClock::new(T0 + 3600 * SECOND)))
        .unwrap()
}

fn order(buy: bool, market_order: bool, ticks: i64, cents: i64, ts: i64) -> Order {
    let side = if buy { Side::BUY } else { Side::SELL };
    let size = Quantity::new(Decimal::new(cents, 2));
    if market_order {
        Order::market(side, size, ts)
    } else {
        Order::limit(side, Price::new(Decimal::new(ticks, 4)), size, ts)
    }
}

fn tape(market: &Market) -> Vec<Trade> {
    market.trades(200)
}

#[test]
fn test_dual_replay_identical() {
    let mut a = market();
    let mut b = market();

    for i in 0..200i64 {
        let o = order(i % 3 != 0, i % 5 == 0, 2300 + (i * 37) % 500, 1 + (i * 13) % 400, T0 + i * SECOND);
        a.place(o.clone()).unwrap();
        b.place(o).unwrap();
    }

    assert!(a.book(100).same_levels(&b.book(100)));
    assert_eq!(tape(&a), tape(&b));
    assert_eq!(a.candles(500), b.candles(500));
    assert_eq!(a.vwap(24), b.vwap(24));
    assert_eq!(a.twap(60), b.twap(60));
    assert_eq!(a.realized_volatility(), b.realized_volatility());
    assert_eq!(a.last_price(), b.last_price());
}

#[test]
fn test_high_volatility_scenario() {
    let mut m = market();

    // Alternate sweeping market orders on both sides
    for i in 0..40i64 {
        let side = i % 2 == 0;
        m.place(order(side, true, 0, 2_000, T0 + i * SECOND)).unwrap();
        // refill both sides so the next sweep has something to hit
        m.place(order(true, false, 2400 - i, 500, T0 + i * SECOND)).unwrap();
        m.place(order(false, false, 2600 + i, 500, T0 + i * SECOND)).unwrap();
    }

    let vol = m.realized_volatility().unwrap();
    assert!(vol.is_finite());
    assert!(vol > 0.0);
    for candle in m.candles(500) {
        assert!(candle.is_valid());
    }
}

proptest! {
    #[test]
    fn replay_matches_for_random_flow(
        flow in prop::collection::vec((any::<bool>(), prop::bool::weighted(0.25), 2200i64..2800, 1i64..300), 1..100)
    ) {
        let mut a = market();
        let mut b = market();
        for (i, (buy, mkt, ticks, cents)) in flow.into_iter().enumerate() {
            let o = order(buy, mkt, ticks, cents, T0 + i as i64 * SECOND);
            let oa = a.place(o.clone()).unwrap();
            let ob = b.place(o).unwrap();
            prop_assert_eq!(oa.filled.len(), ob.filled.len());
            prop_assert_eq!(oa.remaining_size(), ob.remaining_size());
        }
        prop_assert!(a.book(200).same_levels(&b.book(200)));
        prop_assert_eq!(tape(&a), tape(&b));
        prop_assert_eq!(a.candles(500), b.candles(500));
    }
}
