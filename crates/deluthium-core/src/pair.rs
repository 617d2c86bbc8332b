//! Trading pair type and symbol conversion.
//!
//! The host engine writes pairs as `BASE-QUOTE`; Deluthium writes them as
//! `BASE/QUOTE`. `TradingPair` holds the validated canonical form and
//! converts in both directions.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator used in the host engine's pair notation.
const HOST_SEPARATOR: char = '-';
/// Separator used in Deluthium's pair notation.
const VENUE_SEPARATOR: char = '/';

/// A validated trading pair in canonical host notation (`BASE-QUOTE`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TradingPair {
    base: String,
    quote: String,
}

impl TradingPair {
    /// Create a pair from its two legs.
    ///
    /// Both legs must be non-empty, contain no separator characters, and
    /// differ from each other.
    pub fn new(base: impl Into<String>, quote: impl Into<String>) -> Result<Self> {
        let base = base.into();
        let quote = quote.into();
        for leg in [&base, &quote] {
            if leg.is_empty() {
                return Err(CoreError::InvalidPair("empty token symbol".to_string()));
            }
            if leg.contains(HOST_SEPARATOR) || leg.contains(VENUE_SEPARATOR) {
                return Err(CoreError::InvalidPair(format!(
                    "token symbol {leg:?} contains a separator"
                )));
            }
        }
        if base == quote {
            return Err(CoreError::InvalidPair(format!(
                "base and quote are identical: {base}"
            )));
        }
        Ok(Self { base, quote })
    }

    /// Parse a pair from host notation (`BNB-USDT`).
    pub fn from_host_symbol(symbol: &str) -> Result<Self> {
        Self::parse_with(symbol, HOST_SEPARATOR)
    }

    /// Parse a pair from Deluthium notation (`BNB/USDT`).
    pub fn from_venue_symbol(symbol: &str) -> Result<Self> {
        Self::parse_with(symbol, VENUE_SEPARATOR)
    }

    fn parse_with(symbol: &str, sep: char) -> Result<Self> {
        let (base, quote) = symbol.split_once(sep).ok_or_else(|| {
            CoreError::InvalidPair(format!("missing {sep:?} separator in {symbol:?}"))
        })?;
        Self::new(base, quote)
    }

    /// Base token symbol.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// Quote token symbol.
    pub fn quote(&self) -> &str {
        &self.quote
    }

    /// Render in host notation (`BNB-USDT`).
    pub fn to_host_symbol(&self) -> String {
        format!("{}{}{}", self.base, HOST_SEPARATOR, self.quote)
    }

    /// Render in Deluthium notation (`BNB/USDT`).
    pub fn to_venue_symbol(&self) -> String {
        format!("{}{}{}", self.base, VENUE_SEPARATOR, self.quote)
    }
}

impl fmt::Display for TradingPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.base, self.quote)
    }
}

impl FromStr for TradingPair {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_host_symbol(s)
    }
}

impl TryFrom<String> for TradingPair {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self> {
        Self::from_host_symbol(&s)
    }
}

impl From<TradingPair> for String {
    fn from(pair: TradingPair) -> Self {
        pair.to_host_symbol()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host_symbol() {
        let pair = TradingPair::from_host_symbol("BNB-USDT").unwrap();
        assert_eq!(pair.base(), "BNB");
        assert_eq!(pair.quote(), "USDT");
    }

    #[test]
    fn test_round_trip_venue() {
        let pair = TradingPair::from_venue_symbol("WBNB/USDT").unwrap();
        assert_eq!(pair.to_venue_symbol(), "WBNB/USDT");
        assert_eq!(pair.to_host_symbol(), "WBNB-USDT");

        let back = TradingPair::from_host_symbol(&pair.to_host_symbol()).unwrap();
        assert_eq!(back, pair);
    }

    #[test]
    fn test_round_trip_host() {
        for symbol in ["ETH-USDC", "BTC-DAI", "WETH-WBTC"] {
            let pair = TradingPair::from_host_symbol(symbol).unwrap();
            assert_eq!(pair.to_host_symbol(), symbol);
            let venue = pair.to_venue_symbol();
            assert_eq!(TradingPair::from_venue_symbol(&venue).unwrap(), pair);
        }
    }

    #[test]
    fn test_rejects_empty_leg() {
        assert!(TradingPair::from_host_symbol("-USDT").is_err());
        assert!(TradingPair::from_host_symbol("BNB-").is_err());
    }

    #[test]
    fn test_rejects_missing_separator() {
        assert!(TradingPair::from_host_symbol("BNBUSDT").is_err());
    }

    #[test]
    fn test_rejects_double_separator() {
        // "BNB-USDT-X" splits into "BNB" and "USDT-X"; the second leg still
        // carries a separator and must be rejected.
        assert!(TradingPair::from_host_symbol("BNB-USDT-X").is_err());
    }

    #[test]
    fn test_rejects_identical_legs() {
        assert!(TradingPair::from_host_symbol("USDT-USDT").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let pair = TradingPair::from_host_symbol("ETH-USDC").unwrap();
        let json = serde_json::to_string(&pair).unwrap();
        assert_eq!(json, r#""ETH-USDC""#);
        let back: TradingPair = serde_json::from_str(&json).unwrap();
        assert_eq!(back, pair);
    }
}
