//! Prediction API verification binary.
//!
//! Runs the three built-in cases against a running service and exits
//! nonzero unless every case passes, so the run can gate CI.

use std::time::Duration;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use veriscope_harness::{PredictClient, Runner, builtin_cases, client};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let base_url = std::env::var("VERISCOPE_API_URL")
        .unwrap_or_else(|_| client::DEFAULT_BASE_URL.to_string());
    let timeout = std::env::var("VERISCOPE_TIMEOUT_MS")
        .ok()
        .and_then(|raw| raw.parse::<u64>().ok())
        .map_or(client::DEFAULT_TIMEOUT, Duration::from_millis);

    println!("Verifying prediction API at {base_url}");

    let predict_client = PredictClient::with_timeout(base_url, timeout)?;
    let report = Runner::new(builtin_cases()).run(&predict_client).await;
    report.print_summary();

    std::process::exit(report.exit_code());
}
