//! # Varasto Web Server
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Init tracing (RUST_LOG, else info)                                 │
//! │  2. Load WebConfig (defaults → web.toml → VARASTO_* env), then switch  │
//! │     to its [logging] filter unless RUST_LOG is set                     │
//! │  3. Serve on bind_addr:port until Ctrl+C / SIGTERM                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use anyhow::Context;
use tracing::{error, info, warn};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, reload, EnvFilter, Registry};

use varasto_web::{serve, AppState, WebConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let log_filter = init_tracing();
    let config = WebConfig::load_or_default(None);
    apply_config_filter(&log_filter, &config);

    info!(
        addr = %config.bind_address(),
        version = env!("CARGO_PKG_VERSION"),
        "Starting Varasto web server"
    );

    serve(&config, AppState::default(), shutdown_signal())
        .await
        .context("web server failed")?;

    Ok(())
}

type FilterHandle = reload::Handle<EnvFilter, Registry>;

/// Initializes the tracing subscriber.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=varasto_web=trace,tower_http=debug` - Request spans
/// - Default: `info` until the config is loaded, then `[logging] filter`
fn init_tracing() -> FilterHandle {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let (filter, handle) = reload::Layer::new(filter);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();

    handle
}

/// Switches to the configured filter unless `RUST_LOG` is set.
fn apply_config_filter(handle: &FilterHandle, config: &WebConfig) {
    if std::env::var_os("RUST_LOG").is_some() {
        return;
    }

    match EnvFilter::try_new(&config.logging.filter) {
        Ok(filter) => {
            if let Err(e) = handle.reload(filter) {
                warn!(error = %e, "Failed to apply log filter");
            }
        }
        Err(e) => warn!(filter = %config.logging.filter, error = %e, "Invalid log filter, keeping info"),
    }
}

/// Graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, starting graceful shutdown...");
}
