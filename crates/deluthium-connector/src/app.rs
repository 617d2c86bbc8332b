//! Application wiring and main loop.

use crate::config::AppConfig;
use crate::error::AppResult;
use deluthium_client::VenueClient;
use deluthium_core::BookMessage;
use deluthium_executor::QuoteExecutor;
use deluthium_feed::{PollerConfig, PricePoller, SyntheticBookBuilder};
use deluthium_registry::PairCache;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The assembled connector.
pub struct Application {
    config: AppConfig,
    client: Arc<VenueClient>,
    cache: Arc<PairCache>,
    executor: Arc<QuoteExecutor>,
}

impl Application {
    pub fn new(config: AppConfig) -> AppResult<Self> {
        let client = Arc::new(VenueClient::new(
            config.base_url.clone(),
            config.api_key.clone(),
            Some(config.http_timeout()),
        )?);
        let chain = config.chain()?;
        let executor = Arc::new(QuoteExecutor::new(
            client.clone(),
            chain,
            config.wallet_address.clone(),
        ));
        Ok(Self {
            config,
            client,
            cache: Arc::new(PairCache::new()),
            executor,
        })
    }

    /// Order executor, for a host embedding this connector as a library.
    pub fn executor(&self) -> Arc<QuoteExecutor> {
        self.executor.clone()
    }

    /// Run until Ctrl-C.
    pub async fn run(&self) -> AppResult<()> {
        let chain = self.config.chain()?;
        let pairs = self.config.pairs()?;

        info!(chain = %chain, pairs = ?self.config.trading_pairs, "Starting Deluthium connector");

        // Surface the capability gaps up front so operators see them once
        // at startup rather than on the first order.
        self.executor.update_balances().await;

        let populated = self.cache.populate(&self.client, chain).await;
        info!(populated, "Pair cache warm-up complete");

        let (sink_tx, mut sink_rx) = mpsc::channel::<BookMessage>(self.config.sink_buffer);
        let poller_config = PollerConfig::new(pairs, chain)
            .with_poll_interval(self.config.poll_interval())
            .with_builder(SyntheticBookBuilder::new(self.config.spread_ratio));
        let poller = PricePoller::new(self.client.clone(), poller_config, sink_tx)?;
        let handle = poller.spawn();

        loop {
            tokio::select! {
                msg = sink_rx.recv() => {
                    match msg {
                        Some(BookMessage::Snapshot(snap)) => {
                            debug!(
                                pair = %snap.pair,
                                update_id = snap.update_id,
                                best_bid = ?snap.best_bid(),
                                best_ask = ?snap.best_ask(),
                                "Snapshot"
                            );
                        }
                        Some(other) => {
                            // Diff/trade never occur for this venue.
                            debug!(pair = %other.pair(), "Unexpected non-snapshot message");
                        }
                        None => break,
                    }
                }
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    break;
                }
            }
        }

        handle.stop().await;
        info!("Connector stopped");
        Ok(())
    }
}
