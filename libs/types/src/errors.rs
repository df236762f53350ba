//! Error types for the market simulator
//!
//! Comprehensive error taxonomy using thiserror. Every error here is
//! recoverable: a rejected call never leaves partial state behind.

use thiserror::Error;

/// Top-level engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("Invalid order: {0}")]
    InvalidOrder(#[from] OrderError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Order-specific errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrderError {
    #[error("Invalid size: {0}")]
    InvalidSize(String),

    #[error("Invalid price: {0}")]
    InvalidPrice(String),

    #[error("Limit order requires a price")]
    MissingLimitPrice,
}

/// Configuration validation errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("total_shares must be positive")]
    ZeroTotalShares,

    #[error("issued_shares {issued} exceeds total_shares {total}")]
    IssuedExceedsTotal { issued: u64, total: u64 },

    #[error("treasury_ask_price must be positive, got {0}")]
    NonPositiveAskPrice(String),

    #[error("seed_depth must be positive")]
    ZeroSeedDepth,

    #[error("treasury_ask_price {0} is too large to seed stepped ask levels")]
    SeedPriceOutOfRange(String),

    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting { name: String, reason: String },
}

/// Decimal parsing errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NumericError {
    #[error("Cannot parse {input:?} as decimal: {reason}")]
    Parse { input: String, reason: String },
}
