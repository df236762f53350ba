//! Market configuration
//!
//! A `MarketConfig` fully determines the seeded starting book. It is
//! immutable once a market is built from it; changing it means rebuilding
//! the market.

use crate::errors::ConfigError;
use crate::numeric::Price;
use serde::{Deserialize, Serialize};

/// Default number of seeded levels per side.
pub const DEFAULT_SEED_DEPTH: u32 = 12;

fn default_seed_depth() -> u32 {
    DEFAULT_SEED_DEPTH
}

/// Parameters of a single simulated market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketConfig {
    /// Total share supply of the asset
    pub total_shares: u64,
    /// Shares already held by investors, in `[0, total_shares]`
    pub issued_shares: u64,
    /// Price of the first treasury ask level
    pub treasury_ask_price: Price,
    /// Seeded levels per side
    #[serde(default = "default_seed_depth")]
    pub seed_depth: u32,
}

impl MarketConfig {
    pub fn new(total_shares: u64, issued_shares: u64, treasury_ask_price: Price) -> Self {
        Self {
            total_shares,
            issued_shares,
            treasury_ask_price,
            seed_depth: DEFAULT_SEED_DEPTH,
        }
    }

    pub fn with_seed_depth(mut self, seed_depth: u32) -> Self {
        self.seed_depth = seed_depth;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.total_shares == 0 {
            return Err(ConfigError::ZeroTotalShares);
        }
        if self.issued_shares > self.total_shares {
            return Err(ConfigError::IssuedExceedsTotal {
                issued: self.issued_shares,
                total: self.total_shares,
            });
        }
        if !self.treasury_ask_price.is_positive() {
            return Err(ConfigError::NonPositiveAskPrice(
                self.treasury_ask_price.to_string(),
            ));
        }
        if self.seed_depth == 0 {
            return Err(ConfigError::ZeroSeedDepth);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> MarketConfig {
        MarketConfig::new(10, 3, Price::from_str("0.25").unwrap())
    }

    #[test]
    fn test_reference_config_is_valid() {
        let config = reference();
        assert_eq!(config.seed_depth, DEFAULT_SEED_DEPTH);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_fully_issued_is_valid() {
        let config = MarketConfig::new(10, 10, Price::from_u64(1));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_configs() {
        assert_eq!(
            MarketConfig::new(0, 0, Price::from_u64(1)).validate(),
            Err(ConfigError::ZeroTotalShares)
        );
        assert_eq!(
            MarketConfig::new(10, 11, Price::from_u64(1)).validate(),
            Err(ConfigError::IssuedExceedsTotal { issued: 11, total: 10 })
        );
        assert!(matches!(
            MarketConfig::new(10, 3, Price::from_u64(0)).validate(),
            Err(ConfigError::NonPositiveAskPrice(_))
        ));
        assert_eq!(
            reference().with_seed_depth(0).validate(),
            Err(ConfigError::ZeroSeedDepth)
        );
    }

    #[test]
    fn test_seed_depth_defaults_when_missing() {
        let json = r#"{"total_shares":10,"issued_shares":3,"treasury_ask_price":"0.25"}"#;
        let config: MarketConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config, reference());
    }
}
