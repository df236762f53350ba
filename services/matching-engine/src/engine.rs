//! Matching engine core
//!
//! Owns one market's book and trade sequencing. Incoming orders cross the
//! opposite side best-price-first, executing at the resting level's price.
//! Limit remainders rest at their own price; market remainders are dropped.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use types::config::MarketConfig;
use types::errors::EngineError;
use types::ids::OrderId;
use types::numeric::{Price, Quantity};
use types::order::{Order, OrderType};
use types::trade::Trade;

use crate::book::{BookSnapshot, OrderBook};
use crate::matching::{crossing, MatchExecutor};
use crate::seeder::{self, SeedSummary};

/// Result of placing an order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceOutcome {
    pub order_id: OrderId,
    pub order_type: OrderType,
    /// Executions in the order they happened
    pub filled: Vec<Trade>,
    /// Unfilled part of the order: rested for limit orders, discarded for
    /// market orders. None when the order filled completely.
    pub remaining: Option<Order>,
}

impl PlaceOutcome {
    /// Total size executed
    pub fn filled_size(&self) -> Quantity {
        self.filled.iter().map(|t| t.size).sum()
    }

    pub fn remaining_size(&self) -> Quantity {
        self.remaining.as_ref().map(|o| o.size).unwrap_or_else(Quantity::zero)
    }

    pub fn is_fully_filled(&self) -> bool {
        self.remaining.is_none()
    }

    /// True when a market order ran out of opposite liquidity and its
    /// remainder was dropped.
    pub fn was_discarded(&self) -> bool {
        self.order_type == OrderType::Market && self.remaining.is_some()
    }

    /// True when a limit remainder was added to the book.
    pub fn rested(&self) -> bool {
        self.order_type == OrderType::Limit && self.remaining.is_some()
    }

    /// Volume-weighted execution price across all fills.
    ///
    /// None without fills or when the notional does not fit a decimal.
    pub fn average_price(&self) -> Option<Price> {
        let size = self.filled_size();
        if !size.is_positive() {
            return None;
        }
        let notional = self
            .filled
            .iter()
            .try_fold(Decimal::ZERO, |acc, t| acc.checked_add(t.trade_value()?))?;
        notional.checked_div(size.as_decimal()).map(Price::new)
    }
}

/// Single-market matching engine
#[derive(Debug, Clone)]
pub struct MatchingEngine {
    book: OrderBook,
    executor: MatchExecutor,
    last_price: Option<Price>,
}

impl MatchingEngine {
    /// Build an engine with a book seeded from `config`.
    ///
    /// The last traded price starts at the treasury ask price.
    pub fn new(config: &MarketConfig) -> Result<Self, EngineError> {
        let mut engine = Self::empty();
        engine.seed(config)?;
        engine.last_price = Some(config.treasury_ask_price);
        Ok(engine)
    }

    /// Engine with an empty book and no last price
    pub fn empty() -> Self {
        Self {
            book: OrderBook::new(),
            executor: MatchExecutor::default(),
            last_price: None,
        }
    }

    fn seed(&mut self, config: &MarketConfig) -> Result<SeedSummary, EngineError> {
        seeder::seed_book(&mut self.book, config)
    }

    /// Place an order against the book.
    ///
    /// Invalid orders are rejected before anything is touched.
    pub fn place(&mut self, order: Order) -> Result<PlaceOutcome, EngineError> {
        if let Err(e) = order.validate() {
            warn!(order_id = %order.order_id, error = %e, "Rejected order");
            return Err(e.into());
        }

        let (filled, remaining) = self.cross(&order);

        if let Some(trade) = filled.last() {
            self.last_price = Some(trade.price);
        }

        // Dust left over after fills counts as filled
        let remaining = if remaining.is_dust() {
            None
        } else {
            Some(order.with_size(remaining))
        };

        if let Some(rest) = &remaining {
            match rest.limit_price() {
                Some(price) => {
                    self.book.add_level(rest.side, price, rest.size)?;
                }
                None => {
                    debug!(
                        order_id = %order.order_id,
                        side = %order.side,
                        discarded = %rest.size,
                        "Market order remainder discarded; opposite side exhausted"
                    );
                }
            }
        }

        debug!(
            order_id = %order.order_id,
            side = %order.side,
            order_type = ?order.order_type,
            size = %order.size,
            fills = filled.len(),
            "Order placed"
        );

        Ok(PlaceOutcome {
            order_id: order.order_id,
            order_type: order.order_type,
            filled,
            remaining,
        })
    }

    /// Consume opposite levels while the order stays marketable.
    ///
    /// Returns the trades and the unexecuted size.
    fn cross(&mut self, order: &Order) -> (Vec<Trade>, Quantity) {
        let resting_side = order.side.opposite();
        let limit = order.limit_price();
        let mut remaining = order.size;
        let mut trades = Vec::new();

        while !remaining.is_dust() {
            let (level_price, level_size) = match self.book.best_level(resting_side) {
                Some(level) => (level.price, level.size),
                None => break,
            };
            if !crossing::is_marketable(order.side, limit, level_price) {
                break;
            }

            let amount = remaining.min(level_size);
            let Some((price, taken)) = self.book.remove_from_best_level(resting_side, amount) else {
                break;
            };

            trades.push(
                self.executor
                    .execute_trade(order.side, price, taken, order.submitted_at),
            );
            remaining = remaining.saturating_sub(taken);
        }

        (trades, remaining)
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn snapshot(&self, depth: usize, as_of: i64) -> BookSnapshot {
        self.book.snapshot(depth, as_of)
    }

    /// Price of the most recent trade, or the seed price before any trade
    pub fn last_price(&self) -> Option<Price> {
        self.last_price
    }

    /// Sequence number the next trade will carry
    pub fn next_sequence(&self) -> u64 {
        self.executor.peek_sequence()
    }
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::empty()
    }
}
