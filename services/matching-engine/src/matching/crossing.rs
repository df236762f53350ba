//! Crossing detection logic
//!
//! Determines whether an incoming order may trade against the best
//! resting level on the opposite side.

use types::numeric::Price;
use types::order::Side;

/// Check if a bid and ask can match at given prices
///
/// For a buy order to match with a sell order the bid must be >= the ask.
pub fn can_match(bid_price: Price, ask_price: Price) -> bool {
    bid_price >= ask_price
}

/// Check if an incoming order can trade against a resting level.
///
/// `limit` is None for market orders, which are always marketable while
/// the opposite side has liquidity.
pub fn is_marketable(incoming_side: Side, limit: Option<Price>, resting_price: Price) -> bool {
    match (incoming_side, limit) {
        (_, None) => true,
        (Side::BUY, Some(limit)) => can_match(limit, resting_price),
        (Side::SELL, Some(limit)) => can_match(resting_price, limit),
    }
}
