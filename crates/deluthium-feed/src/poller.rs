//! Indicative-price polling scheduler.
//!
//! One logical task per poller: each cycle walks the configured pairs
//! sequentially, fetches an indicative price, builds a synthetic snapshot,
//! and pushes it into the host's sink. A failed fetch costs one cycle for
//! one pair, never the task. Cancellation is the only terminating signal
//! and is observed at every suspension point.

use crate::book_builder::SyntheticBookBuilder;
use crate::error::{FeedError, FeedResult};
use chrono::{DateTime, Utc};
use deluthium_client::PriceSource;
use deluthium_core::{BookMessage, ChainId, IndicativeQuote, TradingPair};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Default pause between poll cycles.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(30);

/// Lifecycle of a poller: Idle until spawned, Stopped is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerState {
    Idle,
    Running,
    Stopped,
}

/// Static configuration for a polling task.
#[derive(Debug, Clone)]
pub struct PollerConfig {
    pub pairs: Vec<TradingPair>,
    pub chain: ChainId,
    pub poll_interval: Duration,
    pub builder: SyntheticBookBuilder,
}

impl PollerConfig {
    pub fn new(pairs: Vec<TradingPair>, chain: ChainId) -> Self {
        Self {
            pairs,
            chain,
            poll_interval: DEFAULT_POLL_INTERVAL,
            builder: SyntheticBookBuilder::default(),
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_builder(mut self, builder: SyntheticBookBuilder) -> Self {
        self.builder = builder;
        self
    }
}

/// Polls indicative prices and emits synthetic book snapshots.
pub struct PricePoller {
    source: Arc<dyn PriceSource>,
    config: PollerConfig,
    sink: mpsc::Sender<BookMessage>,
    last_update_id: u64,
    state_tx: watch::Sender<PollerState>,
    state_rx: watch::Receiver<PollerState>,
}

impl PricePoller {
    /// Create a poller in the Idle state.
    ///
    /// The price source is injected so tests can script fetches; in
    /// production it is the `VenueClient`. Credentials stay inside the
    /// source - the poller never sees them.
    pub fn new(
        source: Arc<dyn PriceSource>,
        config: PollerConfig,
        sink: mpsc::Sender<BookMessage>,
    ) -> FeedResult<Self> {
        if config.pairs.is_empty() {
            return Err(FeedError::InvalidConfig("no pairs configured".to_string()));
        }
        if config.poll_interval.is_zero() {
            return Err(FeedError::InvalidConfig(
                "poll interval must be non-zero".to_string(),
            ));
        }
        let (state_tx, state_rx) = watch::channel(PollerState::Idle);
        Ok(Self {
            source,
            config,
            sink,
            last_update_id: 0,
            state_tx,
            state_rx,
        })
    }

    /// Current lifecycle state.
    pub fn state(&self) -> PollerState {
        *self.state_rx.borrow()
    }

    /// Start the polling task.
    pub fn spawn(self) -> PollerHandle {
        let cancel = CancellationToken::new();
        let state_rx = self.state_rx.clone();
        let token = cancel.clone();
        let join = tokio::spawn(self.run(token));
        PollerHandle {
            cancel,
            state_rx,
            join,
        }
    }

    async fn run(mut self, cancel: CancellationToken) {
        let _ = self.state_tx.send(PollerState::Running);
        info!(
            pairs = self.config.pairs.len(),
            chain = %self.config.chain,
            interval_secs = self.config.poll_interval.as_secs(),
            "Price poller started"
        );

        loop {
            if cancel.is_cancelled() {
                break;
            }

            match self.poll_cycle(&cancel).await {
                Ok(()) => {}
                Err(FeedError::SinkClosed) => {
                    // Receiver dropped: the host is gone, nothing left to
                    // poll for.
                    warn!("Snapshot sink closed, stopping poller");
                    break;
                }
                Err(e) => {
                    warn!(error = %e, "Poll cycle failed, retrying next cycle");
                }
            }

            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }
        }

        let _ = self.state_tx.send(PollerState::Stopped);
        info!("Price poller stopped");
    }

    /// One pass over all configured pairs.
    ///
    /// Returns early (Ok) as soon as cancellation is observed; after that
    /// point no snapshot is emitted, even for a fetch already in flight.
    async fn poll_cycle(&mut self, cancel: &CancellationToken) -> FeedResult<()> {
        let pairs = self.config.pairs.clone();
        for pair in &pairs {
            let mid = tokio::select! {
                _ = cancel.cancelled() => return Ok(()),
                mid = self.source.indicative_price(pair, self.config.chain) => mid,
            };

            let fetched_at = Utc::now();
            let quote = mid.map(|mid| IndicativeQuote {
                pair: pair.clone(),
                mid,
                fetched_at,
            });
            if quote.is_none() {
                debug!(pair = %pair, "No indicative price this cycle, emitting empty book");
            }

            let update_id = self.next_update_id(fetched_at);
            let snapshot =
                self.config
                    .builder
                    .build(pair.clone(), quote.map(|quote| quote.mid), update_id);

            tokio::select! {
                _ = cancel.cancelled() => return Ok(()),
                sent = self.sink.send(BookMessage::Snapshot(snapshot)) => {
                    sent.map_err(|_| FeedError::SinkClosed)?;
                }
            }
        }
        Ok(())
    }

    /// Update id from the quote's fetch timestamp, clamped strictly
    /// monotonic.
    fn next_update_id(&mut self, fetched_at: DateTime<Utc>) -> u64 {
        let fetched_ms = fetched_at.timestamp_millis().max(0) as u64;
        self.last_update_id = fetched_ms.max(self.last_update_id + 1);
        self.last_update_id
    }
}

/// Handle to a spawned poller.
pub struct PollerHandle {
    cancel: CancellationToken,
    state_rx: watch::Receiver<PollerState>,
    join: JoinHandle<()>,
}

impl PollerHandle {
    /// Current lifecycle state.
    pub fn state(&self) -> PollerState {
        *self.state_rx.borrow()
    }

    /// Signal cancellation without waiting for the task to wind down.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel and wait for the task to reach Stopped.
    pub async fn stop(self) {
        self.cancel.cancel();
        let _ = self.join.await;
    }

    /// Token observed by the polling task; lets the host tie this poller
    /// into a wider shutdown tree.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel.clone()
    }
}
