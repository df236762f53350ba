//! Market statistics
//!
//! Pure functions over trades. Windows are inclusive of their start:
//! a trade executed exactly at `now - window` counts. A statistic whose
//! intermediate sums do not fit a decimal is undefined and falls back the
//! same way an empty window does.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use types::numeric::Price;
use types::trade::Trade;

pub const NANOS_PER_MINUTE: i64 = 60 * 1_000_000_000;
pub const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;

/// Minutes in a 365-day year, used to annualize per-trade returns.
pub const MINUTES_PER_YEAR: f64 = 525_600.0;

/// Earliest timestamp inside a window of `minutes` ending at `now`.
pub fn window_start_minutes(now: i64, minutes: u32) -> i64 {
    now.saturating_sub(i64::from(minutes).saturating_mul(NANOS_PER_MINUTE))
}

/// Earliest timestamp inside a window of `hours` ending at `now`.
pub fn window_start_hours(now: i64, hours: u32) -> i64 {
    now.saturating_sub(i64::from(hours).saturating_mul(NANOS_PER_HOUR))
}

/// Volume-weighted average price of trades executed at or after `since`.
///
/// Falls back to `fallback` when no trade falls in the window.
pub fn vwap<'a>(
    trades: impl IntoIterator<Item = &'a Trade>,
    since: i64,
    fallback: Option<Price>,
) -> Option<Price> {
    let totals = trades
        .into_iter()
        .filter(|t| t.executed_at >= since)
        .try_fold((Decimal::ZERO, Decimal::ZERO), |(notional, volume), trade| {
            Some((
                notional.checked_add(trade.trade_value()?)?,
                volume.checked_add(trade.size.as_decimal())?,
            ))
        });

    match totals {
        Some((notional, volume)) if volume > Decimal::ZERO => {
            notional.checked_div(volume).map(Price::new).or(fallback)
        }
        _ => fallback,
    }
}

/// Simple mean price of trades executed at or after `since`.
///
/// Falls back to `fallback` when no trade falls in the window.
pub fn twap<'a>(
    trades: impl IntoIterator<Item = &'a Trade>,
    since: i64,
    fallback: Option<Price>,
) -> Option<Price> {
    let totals = trades
        .into_iter()
        .filter(|t| t.executed_at >= since)
        .try_fold((Decimal::ZERO, 0u64), |(sum, count), trade| {
            Some((sum.checked_add(trade.price.as_decimal())?, count + 1))
        });

    match totals {
        Some((sum, count)) if count > 0 => Some(Price::new(sum / Decimal::from(count))),
        _ => fallback,
    }
}

/// Annualized realized volatility of trades executed at or after `since`.
///
/// `trades` must be in execution order. Returns None with fewer than two
/// trades in the window. The sample variance divisor is `n - 1`, floored at
/// one so a single return still yields a value.
pub fn realized_volatility<'a>(
    trades: impl IntoIterator<Item = &'a Trade>,
    since: i64,
) -> Option<f64> {
    let prices: Vec<f64> = trades
        .into_iter()
        .filter(|t| t.executed_at >= since)
        .filter_map(|t| t.price.as_decimal().to_f64())
        .collect();

    if prices.len() < 2 {
        return None;
    }

    let returns: Vec<f64> = prices.windows(2).map(|w| (w[1] / w[0]).ln()).collect();
    let n = returns.len() as f64;
    let mean = returns.iter().sum::<f64>() / n;
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0).max(1.0);

    Some(variance.sqrt() * MINUTES_PER_YEAR.sqrt())
}
