//! Incoming order types
//!
//! Orders are transient: each one is consumed entirely by a single call to
//! the matching engine and never persisted once processed.

use crate::errors::OrderError;
use crate::ids::OrderId;
use crate::numeric::{Price, Quantity};
use serde::{Deserialize, Serialize};

/// Order side (buyer or seller)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    /// Buy order (bid)
    BUY,
    /// Sell order (ask)
    SELL,
}

impl Side {
    /// Get the opposite side
    pub fn opposite(&self) -> Self {
        match self {
            Side::BUY => Side::SELL,
            Side::SELL => Side::BUY,
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::BUY => write!(f, "BUY"),
            Side::SELL => write!(f, "SELL"),
        }
    }
}

/// How an order interacts with the book
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Crosses while marketable, then rests the remainder at its price
    Limit,
    /// Takes whatever the opposite side offers; never rests
    Market,
}

/// An order submitted to the market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub order_id: OrderId,
    pub side: Side,
    pub order_type: OrderType,
    /// Required (and positive) for limit orders, ignored for market orders
    pub price: Option<Price>,
    pub size: Quantity,
    pub submitted_at: i64, // Unix nanos
}

impl Order {
    /// Create a limit order
    pub fn limit(side: Side, price: Price, size: Quantity, timestamp: i64) -> Self {
        Self {
            order_id: OrderId::new(),
            side,
            order_type: OrderType::Limit,
            price: Some(price),
            size,
            submitted_at: timestamp,
        }
    }

    /// Create a market order
    pub fn market(side: Side, size: Quantity, timestamp: i64) -> Self {
        Self {
            order_id: OrderId::new(),
            side,
            order_type: OrderType::Market,
            price: None,
            size,
            submitted_at: timestamp,
        }
    }

    pub fn is_market(&self) -> bool {
        self.order_type == OrderType::Market
    }

    /// Limit price, or None for market orders.
    pub fn limit_price(&self) -> Option<Price> {
        match self.order_type {
            OrderType::Limit => self.price,
            OrderType::Market => None,
        }
    }

    /// Check size and price requirements before matching.
    ///
    /// Sizes at or below the dust threshold are rejected: they could neither
    /// rest nor be reported as an unfilled remainder.
    pub fn validate(&self) -> Result<(), OrderError> {
        if self.size.is_dust() {
            return Err(OrderError::InvalidSize(self.size.to_string()));
        }

        if self.order_type == OrderType::Limit {
            match self.price {
                None => return Err(OrderError::MissingLimitPrice),
                Some(price) if !price.is_positive() => {
                    return Err(OrderError::InvalidPrice(price.to_string()));
                }
                Some(_) => {}
            }
        }

        Ok(())
    }

    /// Copy of this order carrying a different size (used for remainders).
    pub fn with_size(&self, size: Quantity) -> Self {
        Self {
            size,
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::BUY.opposite(), Side::SELL);
        assert_eq!(Side::SELL.opposite(), Side::BUY);
    }

    #[test]
    fn test_limit_order_validates() {
        let order = Order::limit(
            Side::BUY,
            Price::from_str("0.25").unwrap(),
            Quantity::from_str("1.0").unwrap(),
            1708123456789000000,
        );
        assert!(order.validate().is_ok());
        assert_eq!(order.limit_price(), Some(Price::from_str("0.25").unwrap()));
    }

    #[test]
    fn test_zero_size_rejected() {
        let order = Order::market(Side::SELL, Quantity::zero(), 1708123456789000000);
        assert!(matches!(order.validate(), Err(OrderError::InvalidSize(_))));
    }

    #[test]
    fn test_dust_size_rejected() {
        let order = Order::market(
            Side::SELL,
            Quantity::from_str("0.000000005").unwrap(),
            1708123456789000000,
        );
        assert!(matches!(order.validate(), Err(OrderError::InvalidSize(_))));

        let smallest = Order::market(
            Side::SELL,
            Quantity::from_str("0.00000002").unwrap(),
            1708123456789000000,
        );
        assert!(smallest.validate().is_ok());
    }

    #[test]
    fn test_negative_size_rejected() {
        let order = Order::market(
            Side::SELL,
            Quantity::from_str("-1").unwrap(),
            1708123456789000000,
        );
        assert!(matches!(order.validate(), Err(OrderError::InvalidSize(_))));
    }

    #[test]
    fn test_limit_without_price_rejected() {
        let mut order = Order::limit(
            Side::BUY,
            Price::from_u64(1),
            Quantity::from_u64(1),
            1708123456789000000,
        );
        order.price = None;
        assert_eq!(order.validate(), Err(OrderError::MissingLimitPrice));
    }

    #[test]
    fn test_limit_with_zero_price_rejected() {
        let order = Order::limit(
            Side::BUY,
            Price::from_u64(0),
            Quantity::from_u64(1),
            1708123456789000000,
        );
        assert!(matches!(order.validate(), Err(OrderError::InvalidPrice(_))));
    }

    #[test]
    fn test_market_order_ignores_price() {
        let mut order = Order::market(Side::BUY, Quantity::from_u64(2), 1708123456789000000);
        order.price = Some(Price::from_u64(0));
        assert!(order.validate().is_ok());
        assert_eq!(order.limit_price(), None);
    }

    #[test]
    fn test_with_size_keeps_identity() {
        let order = Order::market(Side::BUY, Quantity::from_u64(2), 1708123456789000000);
        let rest = order.with_size(Quantity::from_u64(1));
        assert_eq!(rest.order_id, order.order_id);
        assert_eq!(rest.size, Quantity::from_u64(1));
    }

    #[test]
    fn test_order_serialization() {
        let order = Order::limit(
            Side::SELL,
            Price::from_str("0.2525").unwrap(),
            Quantity::from_str("2.5").unwrap(),
            1708123456789000000,
        );

        let json = serde_json::to_string(&order).unwrap();
        assert!(json.contains("\"SELL\""));
        assert!(json.contains("\"limit\""));

        let deserialized: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order, deserialized);
    }
}
