//! Core domain types for the Deluthium RFQ connector.
//!
//! This crate provides the fundamental types shared across the connector:
//! - `TradingPair`: validated trading pair with host/venue symbol conversion
//! - `ChainId`: supported-chain validation and wrapped-token lookup
//! - `BookSnapshot`, `BookMessage`: synthetic order book data
//! - `FirmQuoteRequest`, `FirmQuoteResult`: RFQ order placement types

pub mod book;
pub mod chain;
pub mod error;
pub mod pair;
pub mod quote;
pub mod units;

pub use book::{BookLevel, BookMessage, BookSnapshot};
pub use chain::{
    get_wrapped_token, is_native_token, ChainId, DEFAULT_CHAIN_ID, NATIVE_TOKEN_ADDRESS,
};
pub use error::{CoreError, Result};
pub use pair::TradingPair;
pub use quote::{FirmQuoteRequest, FirmQuoteResult, IndicativeQuote, Side};
pub use units::{from_wei, to_wei, MAKER_FEE, TAKER_FEE};
