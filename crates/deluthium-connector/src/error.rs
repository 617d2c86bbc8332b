//! Application error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Core error: {0}")]
    Core(#[from] deluthium_core::CoreError),

    #[error("Client error: {0}")]
    Client(#[from] deluthium_client::ClientError),

    #[error("Feed error: {0}")]
    Feed(#[from] deluthium_feed::FeedError),

    #[error("Telemetry error: {0}")]
    Telemetry(#[from] deluthium_telemetry::TelemetryError),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
