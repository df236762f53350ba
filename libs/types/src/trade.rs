//! Trade execution types

use crate::ids::TradeId;
use crate::numeric::{Price, Quantity};
use crate::order::Side;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An executed trade
///
/// Immutable once created. Always executes at the resting level's price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub trade_id: TradeId,
    pub sequence: u64, // Per-engine monotonic sequence
    pub price: Price,
    pub size: Quantity,
    pub taker_side: Side,
    pub executed_at: i64, // Unix nanos
}

impl Trade {
    /// Create a new trade
    pub fn new(
        sequence: u64,
        price: Price,
        size: Quantity,
        taker_side: Side,
        executed_at: i64,
    ) -> Self {
        Self {
            trade_id: TradeId::from_sequence(sequence),
            sequence,
            price,
            size,
            taker_side,
            executed_at,
        }
    }

    /// Trade value (price × size), None when it does not fit a decimal
    pub fn trade_value(&self) -> Option<Decimal> {
        self.size.as_decimal().checked_mul(self.price.as_decimal())
    }
}
