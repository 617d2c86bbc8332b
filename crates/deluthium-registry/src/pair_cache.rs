//! Cache of venue pair metadata keyed by (chain, pair).
//!
//! Entries never expire on their own: [`PairCache::populate`] is the
//! explicit refresh trigger, and `refreshed_at` exposes when a chain was
//! last populated so callers can judge staleness instead of trusting a
//! silently ageing map.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use deluthium_client::{PairListing, VenueClient};
use deluthium_core::{ChainId, TradingPair};
use tracing::{info, warn};

/// Cache of venue-side pair metadata.
pub struct PairCache {
    entries: DashMap<(ChainId, TradingPair), PairListing>,
    refreshed: DashMap<ChainId, DateTime<Utc>>,
}

impl PairCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
            refreshed: DashMap::new(),
        }
    }

    /// Fetch the full pair listing and (re)populate entries for `chain`.
    ///
    /// Existing entries for the chain are overwritten. Listing failures
    /// surface as an empty fetch (the client soft-fails), which leaves the
    /// cache untouched apart from the refresh timestamp staying put.
    ///
    /// Returns the number of entries stored.
    pub async fn populate(&self, client: &VenueClient, chain: ChainId) -> usize {
        let listings = client.list_pairs().await;
        if listings.is_empty() {
            warn!(%chain, "Pair listing came back empty, cache not refreshed");
            return 0;
        }
        self.store_listings(chain, listings)
    }

    /// Convert venue symbols to canonical pairs and store the entries.
    ///
    /// Malformed symbols are skipped with a warning rather than poisoning
    /// the whole refresh.
    pub fn store_listings(&self, chain: ChainId, listings: Vec<PairListing>) -> usize {
        let mut stored = 0;
        for listing in listings {
            let pair = match TradingPair::from_venue_symbol(&listing.symbol) {
                Ok(pair) => pair,
                Err(e) => {
                    warn!(symbol = %listing.symbol, error = %e, "Skipping unparseable venue symbol");
                    continue;
                }
            };
            self.entries.insert((chain, pair), listing);
            stored += 1;
        }
        self.refreshed.insert(chain, Utc::now());
        info!(%chain, stored, "Pair cache populated");
        stored
    }

    /// Pure read: metadata for one (chain, pair), no network.
    pub fn lookup(&self, chain: ChainId, pair: &TradingPair) -> Option<PairListing> {
        self.entries
            .get(&(chain, pair.clone()))
            .map(|entry| entry.value().clone())
    }

    /// When the chain's entries were last populated, if ever.
    pub fn refreshed_at(&self, chain: ChainId) -> Option<DateTime<Utc>> {
        self.refreshed.get(&chain).map(|entry| *entry.value())
    }

    /// Number of cached entries across all chains.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drop every entry (all chains).
    pub fn clear(&self) {
        self.entries.clear();
        self.refreshed.clear();
    }
}

impl Default for PairCache {
    fn default() -> Self {
        Self::new()
    }
}
