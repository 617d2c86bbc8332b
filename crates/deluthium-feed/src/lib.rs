//! Synthetic market data for the Deluthium RFQ venue.
//!
//! There is no streaming feed and no real depth: the poller fetches an
//! indicative mid-price per pair on a fixed interval and synthesizes a
//! two-level book around it. Diff and trade streams exist for interface
//! uniformity but never yield.

pub mod book_builder;
pub mod error;
pub mod poller;
pub mod streams;

pub use book_builder::SyntheticBookBuilder;
pub use error::{FeedError, FeedResult};
pub use poller::{PollerConfig, PollerHandle, PollerState, PricePoller};
pub use streams::{pending_stream, PendingStream};
