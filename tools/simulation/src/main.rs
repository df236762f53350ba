//! `market-sim`: run a simulation and print its report as JSON.
//!
//! Usage: `market-sim [config.json]`. Log level comes from `RUST_LOG`.

use std::time::Instant;

use anyhow::Context;
use simulation::{run_simulation, SimConfig};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("reading config {path}"))?;
            SimConfig::from_json(&json).with_context(|| format!("parsing config {path}"))?
        }
        None => SimConfig::default(),
    };

    let start = Instant::now();
    let report = run_simulation(&config).context("running simulation")?;
    let elapsed = start.elapsed();

    tracing::info!(
        elapsed_ms = elapsed.as_millis() as u64,
        orders_per_sec = report.total_orders as f64 / elapsed.as_secs_f64().max(f64::EPSILON),
        "Throughput"
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
