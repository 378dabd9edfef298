//! Veriscope Server - HTTP prediction service
//!
//! Exposes the prediction, explanation, live-news, and autocomplete
//! operations over an axum router. The binary wires real providers;
//! tests build the same router with stubs via [`AppState`].

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::ServerConfig;
pub use error::ApiError;
pub use routes::router;
pub use state::AppState;

use std::net::SocketAddr;

use tokio::net::TcpListener;

/// Binds the address and serves the API until the task is aborted.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn run_server(addr: SocketAddr, state: AppState) -> anyhow::Result<()> {
    let app = router(state);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, "veriscope server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
