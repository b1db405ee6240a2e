//! Character API Smoke - main entry point
//!
//! Runs the smoke checks once against the configured endpoint. Result lines go
//! to stdout, diagnostics to stderr. A failed check makes the process exit non-zero.

use anyhow::Result;
use character_api_smoke::{
    AsyncCharacterClient, AsyncCharacterClientImpl, CharacterClient, Config, ConsoleReporter,
    SmokeRunner,
};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => {
            init_tracing(&cfg.log_level);
            info!("Configuration loaded successfully");
            cfg
        }
        Err(e) => {
            init_tracing("error");
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    info!("Running smoke tests against {}", config.api_url);

    let sync_client = CharacterClient::new(&config);
    let metrics = sync_client.metrics().clone();
    let client =
        Arc::new(AsyncCharacterClientImpl::new(sync_client)) as Arc<dyn AsyncCharacterClient>;

    let runner = SmokeRunner::new(client, config.expectations());
    let result = runner.run(&mut ConsoleReporter).await;

    let summary = metrics.summary();
    info!(
        "HTTP requests: {} ({} errors, avg {:.1} ms)",
        summary.http_requests_total, summary.http_errors_total, summary.http_duration_avg_ms
    );

    match result {
        Ok(run) => {
            info!(
                "{} tests passed in {} ms",
                run.passed.len(),
                run.elapsed.as_millis()
            );
            Ok(())
        }
        Err(failure) => {
            error!("{}", failure);
            Err(failure.into())
        }
    }
}

/// Log to stderr; RUST_LOG wins over the configured level.
fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}
