//! Matching logic module
//!
//! Implements price-priority crossing against aggregated levels

pub mod crossing;
pub mod executor;

pub use crossing::{can_match, is_marketable};
pub use executor::MatchExecutor;
