//! Deluthium RFQ connector - entry point.

use anyhow::Result;
use clap::Parser;
use tracing::info;

/// Deluthium RFQ connector: polls indicative prices into synthetic order
/// books and places orders via firm quotes.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Configuration file path (can also be set via DELUTHIUM_CONFIG)
    #[arg(short, long)]
    config: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    deluthium_telemetry::init_logging()?;

    info!("Starting Deluthium connector v{}", env!("CARGO_PKG_VERSION"));

    let config_path = args
        .config
        .or_else(|| std::env::var("DELUTHIUM_CONFIG").ok())
        .unwrap_or_else(|| "config/default.toml".to_string());

    info!(config_path = %config_path, "Loading configuration");
    let config = deluthium_connector::AppConfig::from_file(&config_path)?;

    let app = deluthium_connector::Application::new(config)?;
    app.run().await?;

    Ok(())
}
