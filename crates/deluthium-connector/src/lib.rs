//! Deluthium RFQ connector service.
//!
//! Wires the client, pair cache, poller, and executor together behind a
//! TOML configuration. The host engine consumes the snapshot sink; this
//! binary's own loop just logs what it emits.

pub mod app;
pub mod config;
pub mod error;

pub use app::Application;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
