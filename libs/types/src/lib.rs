//! Types library for the fractional-share market simulator
//!
//! Core type definitions shared by the matching engine, the market data
//! layer and the simulation tooling. All prices and sizes are fixed-point
//! decimals so that matching stays deterministic.
//!
//! # Modules
//! - `ids`: Unique identifiers (OrderId, TradeId)
//! - `numeric`: Fixed-point decimal types (Price, Quantity)
//! - `order`: Incoming order types
//! - `trade`: Trade execution records
//! - `config`: Market configuration
//! - `errors`: Error taxonomy

// Public modules
pub mod ids;
pub mod numeric;
pub mod order;
pub mod trade;
pub mod config;
pub mod errors;

// Library version constant
pub const LIB_VERSION: &str = "1.0.0";

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ids::*;
    pub use crate::numeric::*;
    pub use crate::order::*;
    pub use crate::trade::*;
    pub use crate::config::*;
    pub use crate::errors::*;
}
