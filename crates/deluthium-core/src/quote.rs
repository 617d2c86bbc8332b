//! Quote request/result types for the RFQ flow.

use crate::chain::ChainId;
use crate::error::{CoreError, Result};
use crate::pair::TradingPair;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Trade direction, serialized in the venue's wire form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn is_buy(&self) -> bool {
        matches!(self, Self::Buy)
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "buy"),
            Self::Sell => write!(f, "sell"),
        }
    }
}

/// A non-binding indicative price for one pair at one instant.
///
/// Produced per poll cycle and discarded after the snapshot is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicativeQuote {
    pub pair: TradingPair,
    pub mid: Decimal,
    pub fetched_at: DateTime<Utc>,
}

/// A validated firm-quote request.
///
/// Only market orders exist on Deluthium: the fill is an atomic on-chain
/// swap, so a limit price would be meaningless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirmQuoteRequest {
    pub pair: TradingPair,
    pub side: Side,
    pub amount: Decimal,
    pub chain: ChainId,
    pub wallet_address: Option<String>,
}

impl FirmQuoteRequest {
    /// Build a request, rejecting non-positive amounts.
    pub fn new(
        pair: TradingPair,
        side: Side,
        amount: Decimal,
        chain: ChainId,
        wallet_address: Option<String>,
    ) -> Result<Self> {
        if amount <= Decimal::ZERO {
            return Err(CoreError::InvalidAmount(amount.to_string()));
        }
        Ok(Self {
            pair,
            side,
            amount,
            chain,
            wallet_address,
        })
    }
}

/// Outcome of a firm-quote call.
///
/// Created per placement, never cached, never retried automatically. The
/// raw venue payload is kept intact so the host can inspect fields this
/// connector does not model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FirmQuoteResult {
    /// Transaction hash assigned by the venue, when present.
    pub tx_hash: Option<String>,
    /// Encoded transaction payload for external signing and broadcast.
    pub calldata: Option<String>,
    /// The raw venue response body.
    pub raw: serde_json::Value,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn pair() -> TradingPair {
        TradingPair::from_host_symbol("WBNB-USDT").unwrap()
    }

    #[test]
    fn test_request_rejects_zero_amount() {
        let chain = ChainId::new(56).unwrap();
        assert!(matches!(
            FirmQuoteRequest::new(pair(), Side::Buy, dec!(0), chain, None),
            Err(CoreError::InvalidAmount(_))
        ));
        assert!(matches!(
            FirmQuoteRequest::new(pair(), Side::Sell, dec!(-1.5), chain, None),
            Err(CoreError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_request_accepts_positive_amount() {
        let chain = ChainId::new(8453).unwrap();
        let req = FirmQuoteRequest::new(pair(), Side::Sell, dec!(0.25), chain, None).unwrap();
        assert_eq!(req.amount, dec!(0.25));
        assert_eq!(req.side, Side::Sell);
    }

    #[test]
    fn test_side_wire_form() {
        assert_eq!(serde_json::to_string(&Side::Buy).unwrap(), r#""buy""#);
        assert_eq!(serde_json::to_string(&Side::Sell).unwrap(), r#""sell""#);
        assert_eq!(Side::Buy.to_string(), "buy");
    }
}
