//! Authenticated REST client for the Deluthium RFQ API.
//!
//! Deluthium has no streaming feed; everything goes over three JSON/HTTPS
//! endpoints (pair listing, indicative quote, firm quote) with bearer-token
//! authentication. This crate normalizes the venue's two error-code schemes
//! (string `errorCode` and numeric `code`) into one failure type.

pub mod client;
pub mod codes;
pub mod endpoints;
pub mod error;

pub use client::{BoxFuture, PairListing, PriceSource, VenueClient};
pub use codes::{normalize_venue_error, VenueFailure};
pub use error::{ClientError, ClientResult};
