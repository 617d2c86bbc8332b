//! Error types for deluthium-core.

use thiserror::Error;

/// Core error types.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Invalid trading pair: {0}")]
    InvalidPair(String),

    #[error("Chain ID {0} is not supported (supported: 56, 8453, 1)")]
    UnsupportedChain(u64),

    #[error("Invalid amount: {0} (must be strictly positive)")]
    InvalidAmount(String),

    #[error("Amount out of range: {0}")]
    AmountOutOfRange(String),

    #[error("Decimal parse error: {0}")]
    DecimalParse(#[from] rust_decimal::Error),
}

/// Result type alias for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
