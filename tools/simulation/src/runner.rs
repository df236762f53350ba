//! Simulation driver
//!
//! Runs seeded retail traders against a single market on a simulated
//! clock. Identical configs produce identical reports.

use std::sync::Arc;

use market_data::{ManualClock, Market};
use tracing::{debug, info};
use types::errors::EngineError;

use crate::bots::RetailTrader;
use crate::config::SimConfig;
use crate::report::SimReport;

/// Build the market described by `config` on a manual clock.
pub fn build_market(config: &SimConfig) -> Result<(Market, Arc<ManualClock>), EngineError> {
    config.validate()?;
    let clock = Arc::new(ManualClock::new(config.start_nanos));
    let market = Market::with_settings(config.market.clone(), config.settings.clone(), clock.clone())?;
    Ok((market, clock))
}

/// Build the trader population for `config`.
pub fn build_traders(config: &SimConfig) -> Vec<RetailTrader> {
    (0..config.traders)
        .map(|i| RetailTrader::new(i, config.trader.clone(), config.seed.wrapping_add(u64::from(i))))
        .collect()
}

/// Run every tick of the simulation and report the results.
pub fn run_simulation(config: &SimConfig) -> Result<SimReport, EngineError> {
    let (mut market, clock) = build_market(config)?;
    let mut traders = build_traders(config);
    let report = drive(&mut market, &clock, &mut traders, config)?;
    Ok(report)
}

/// Drive an existing market for `config.ticks` ticks.
pub fn drive(
    market: &mut Market,
    clock: &ManualClock,
    traders: &mut [RetailTrader],
    config: &SimConfig,
) -> Result<SimReport, EngineError> {
    let mut report = SimReport::new();
    let step = config.tick_interval_nanos();

    info!(
        traders = traders.len(),
        ticks = config.ticks,
        seed = config.seed,
        "Simulation started"
    );

    for tick in 0..config.ticks {
        let now = clock.advance(step);
        for trader in traders.iter_mut() {
            match trader.tick(market, now) {
                Some(Ok(outcome)) => report.record_outcome(&outcome),
                Some(Err(EngineError::InvalidOrder(e))) => {
                    debug!(trader = trader.trader_id, error = %e, "Order rejected");
                    report.record_rejection();
                }
                Some(Err(e)) => return Err(e),
                None => {}
            }
        }
        report.ticks = tick + 1;
    }

    report.close(market);

    info!(
        orders = report.total_orders,
        trades = report.total_trades,
        volume = %report.total_volume,
        last_price = ?report.closing.last_price,
        "Simulation finished"
    );

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SimConfig {
        SimConfig {
            traders: 4,
            ticks: 100,
            ..Default::default()
        }
    }

    #[test]
    fn test_run_is_deterministic() {
        let a = run_simulation(&small_config()).unwrap();
        let b = run_simulation(&small_config()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.ticks, 100);
    }

    #[test]
    fn test_run_produces_trades() {
        let report = run_simulation(&small_config()).unwrap();
        assert!(report.total_orders > 0);
        assert!(report.total_trades > 0);
        assert_eq!(report.rejected_orders, 0);
        assert_eq!(
            report.total_orders,
            report.market_orders + report.limit_orders + report.rejected_orders
        );
        assert!(report.closing.last_price.is_some());
        assert!(report.closing.candles > 0);
    }

    #[test]
    fn test_different_seed_changes_flow() {
        let a = run_simulation(&small_config()).unwrap();
        let b = run_simulation(&SimConfig {
            seed: 7,
            ..small_config()
        })
        .unwrap();
        assert_ne!(a.total_volume, b.total_volume);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = SimConfig {
            traders: 0,
            ..Default::default()
        };
        assert!(matches!(run_simulation(&config), Err(EngineError::Config(_))));
    }
}
