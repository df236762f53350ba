//! Periodic market view publisher
//!
//! Republishes a `MarketView` on a `watch` channel at a fixed interval.
//! The loop only reads from the market. Dropping the `RefreshHandle`
//! aborts the task.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{watch, Mutex};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};
use types::errors::ConfigError;

use crate::config::RefreshConfig;
use crate::market::{Market, MarketView};

/// A market shared between writers and the refresh loop
pub type SharedMarket = Arc<Mutex<Market>>;

/// Wrap a market for sharing with the refresh loop.
pub fn shared(market: Market) -> SharedMarket {
    Arc::new(Mutex::new(market))
}

/// Owner of a running refresh loop
#[derive(Debug)]
pub struct RefreshHandle {
    task: JoinHandle<()>,
    views: watch::Receiver<MarketView>,
}

impl RefreshHandle {
    /// New receiver for published views
    pub fn subscribe(&self) -> watch::Receiver<MarketView> {
        self.views.clone()
    }

    /// Most recently published view
    pub fn latest(&self) -> MarketView {
        self.views.borrow().clone()
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stop the loop.
    pub fn stop(self) {
        drop(self);
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.task.abort();
        info!("Market refresh loop stopped");
    }
}

/// Start publishing views of `market` every `config.interval_ms`.
///
/// The first view is taken before this returns.
pub async fn spawn_refresh(
    market: SharedMarket,
    config: RefreshConfig,
) -> Result<RefreshHandle, ConfigError> {
    config.validate()?;

    let initial = market.lock().await.view(&config);
    let (tx, views) = watch::channel(initial);
    let period = Duration::from_millis(config.interval_ms);

    info!(interval_ms = config.interval_ms, "Market refresh loop started");

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
        // interval fires immediately; the initial view covers that tick
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let view = market.lock().await.view(&config);
            if tx.send(view).is_err() {
                debug!("All view receivers dropped");
                break;
            }
        }
    });

    Ok(RefreshHandle { task, views })
}
