//! Application configuration.

use crate::error::{AppError, AppResult};
use deluthium_core::{ChainId, TradingPair, DEFAULT_CHAIN_ID};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Env var holding the API key, overriding the config file.
pub const API_KEY_ENV: &str = "DELUTHIUM_API_KEY";

/// Connector configuration, loaded from TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Deluthium API key (bearer token). Prefer setting `DELUTHIUM_API_KEY`
    /// over writing the secret into the file.
    #[serde(default)]
    pub api_key: String,

    /// Venue REST base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Target chain id. Must be one of the supported set.
    #[serde(default = "default_chain_id")]
    pub chain_id: u64,

    /// Wallet receiving the swap, forwarded to firm quotes when set.
    #[serde(default)]
    pub wallet_address: Option<String>,

    /// Pairs to poll, in host notation (`WBNB-USDT`).
    #[serde(default)]
    pub trading_pairs: Vec<String>,

    /// Seconds between poll cycles.
    #[serde(default = "default_poll_interval_secs")]
    pub poll_interval_secs: u64,

    /// Synthetic spread ratio (0.001 = 10 bps).
    #[serde(default = "default_spread_ratio")]
    pub spread_ratio: Decimal,

    /// HTTP transport timeout in seconds.
    #[serde(default = "default_http_timeout_secs")]
    pub http_timeout_secs: u64,

    /// Snapshot sink buffer size.
    #[serde(default = "default_sink_buffer")]
    pub sink_buffer: usize,
}

fn default_base_url() -> String {
    deluthium_client::endpoints::BASE_URL.to_string()
}

fn default_chain_id() -> u64 {
    DEFAULT_CHAIN_ID
}

fn default_poll_interval_secs() -> u64 {
    30
}

fn default_spread_ratio() -> Decimal {
    deluthium_feed::book_builder::DEFAULT_SPREAD_RATIO
}

fn default_http_timeout_secs() -> u64 {
    10
}

fn default_sink_buffer() -> usize {
    256
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    ///
    /// `DELUTHIUM_API_KEY`, when set, overrides the file's `api_key`.
    pub fn from_file(path: impl AsRef<Path>) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;
        if let Ok(key) = std::env::var(API_KEY_ENV) {
            config.api_key = key;
        }
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> AppResult<()> {
        if self.api_key.is_empty() {
            return Err(AppError::Config(format!(
                "api_key is required (set it in the config file or via {API_KEY_ENV})"
            )));
        }
        if self.trading_pairs.is_empty() {
            return Err(AppError::Config(
                "at least one trading pair is required".to_string(),
            ));
        }
        if self.spread_ratio <= Decimal::ZERO {
            return Err(AppError::Config(
                "spread_ratio must be positive".to_string(),
            ));
        }
        if self.poll_interval_secs == 0 {
            return Err(AppError::Config(
                "poll_interval_secs must be non-zero".to_string(),
            ));
        }
        self.chain()?;
        self.pairs()?;
        Ok(())
    }

    /// Validated chain id.
    pub fn chain(&self) -> AppResult<ChainId> {
        Ok(ChainId::new(self.chain_id)?)
    }

    /// Validated trading pairs.
    pub fn pairs(&self) -> AppResult<Vec<TradingPair>> {
        self.trading_pairs
            .iter()
            .map(|symbol| TradingPair::from_host_symbol(symbol).map_err(AppError::from))
            .collect()
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_config() -> AppConfig {
        AppConfig {
            api_key: "test-key".to_string(),
            base_url: default_base_url(),
            chain_id: 56,
            wallet_address: None,
            trading_pairs: vec!["WBNB-USDT".to_string()],
            poll_interval_secs: 30,
            spread_ratio: dec!(0.001),
            http_timeout_secs: 10,
            sink_buffer: 256,
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let config = base_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.chain().unwrap().value(), 56);
        assert_eq!(config.pairs().unwrap().len(), 1);
    }

    #[test]
    fn test_missing_api_key_rejected() {
        let mut config = base_config();
        config.api_key = String::new();
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_unsupported_chain_rejected() {
        let mut config = base_config();
        config.chain_id = 999;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_pair_rejected() {
        let mut config = base_config();
        config.trading_pairs = vec!["WBNBUSDT".to_string()];
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_defaults() {
        let toml_str = r#"
            api_key = "k"
            trading_pairs = ["ETH-USDC"]
        "#;
        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.chain_id, 56);
        assert_eq!(config.poll_interval_secs, 30);
        assert_eq!(config.spread_ratio, dec!(0.001));
        assert_eq!(config.base_url, deluthium_client::endpoints::BASE_URL);
    }
}
