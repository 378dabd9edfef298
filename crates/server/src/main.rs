//! Veriscope prediction service binary.

use std::net::SocketAddr;

use anyhow::Context;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use veriscope_server::{AppState, ServerConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::load().context("loading configuration")?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .context("invalid bind address")?;

    tracing::info!(
        "Starting Veriscope server v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = AppState::from_config(&config)?;
    veriscope_server::run_server(addr, state).await?;

    Ok(())
}
