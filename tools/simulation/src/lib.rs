//! Market Simulation
//!
//! Seeded order-flow simulation against a single fractional-share market.
//! Runs are deterministic: the same `SimConfig` always yields the same
//! `SimReport`.
//!
//! # Modules
//! - `bots`: Retail trader bots
//! - `config`: Simulation settings (JSON loadable)
//! - `runner`: Tick loop on a simulated clock
//! - `report`: Counters and closing statistics

pub mod bots;
pub mod config;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use report::SimReport;
pub use runner::run_simulation;

/// Crate version constant
pub const VERSION: &str = "1.0.0";
