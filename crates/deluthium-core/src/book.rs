//! Synthetic order book data types.
//!
//! Deluthium has no order-book feed; snapshots here are synthesized from a
//! single indicative mid-price. An empty book (no bids, no asks) is a valid
//! state meaning "no quote available this cycle", not an error.

use crate::pair::TradingPair;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One price level of the synthetic ladder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookLevel {
    pub price: Decimal,
    pub size: Decimal,
}

impl BookLevel {
    pub fn new(price: Decimal, size: Decimal) -> Self {
        Self { price, size }
    }
}

/// A full synthetic order book snapshot.
///
/// Bids are ordered best-first (descending price), asks best-first
/// (ascending price). When both sides are present, `best_bid < best_ask`
/// holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSnapshot {
    pub pair: TradingPair,
    /// Monotonic per poller, derived from the fetch timestamp.
    pub update_id: u64,
    pub bids: Vec<BookLevel>,
    pub asks: Vec<BookLevel>,
}

impl BookSnapshot {
    /// An empty snapshot for a cycle where no indicative price was available.
    pub fn empty(pair: TradingPair, update_id: u64) -> Self {
        Self {
            pair,
            update_id,
            bids: Vec::new(),
            asks: Vec::new(),
        }
    }

    /// True when neither side has any level.
    pub fn is_empty(&self) -> bool {
        self.bids.is_empty() && self.asks.is_empty()
    }

    /// Best bid price, if any.
    pub fn best_bid(&self) -> Option<Decimal> {
        self.bids.first().map(|level| level.price)
    }

    /// Best ask price, if any.
    pub fn best_ask(&self) -> Option<Decimal> {
        self.asks.first().map(|level| level.price)
    }
}

/// Message emitted to the host's market-data sink.
///
/// All three variants exist because downstream consumers await snapshot,
/// diff, and trade channels uniformly. For Deluthium only `Snapshot` is
/// ever produced; the diff and trade channels suspend indefinitely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookMessage {
    Snapshot(BookSnapshot),
    Diff(BookSnapshot),
    Trade {
        pair: TradingPair,
        trade_id: u64,
        price: Decimal,
        amount: Decimal,
        is_buy: bool,
    },
}

impl BookMessage {
    /// The pair this message concerns.
    pub fn pair(&self) -> &TradingPair {
        match self {
            Self::Snapshot(snap) | Self::Diff(snap) => &snap.pair,
            Self::Trade { pair, .. } => pair,
        }
    }
}
