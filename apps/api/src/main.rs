use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use advisor::config::Config;
use advisor::recommendation::engine::COVERAGE_CAP;
use advisor::routes::{apply_middleware, build_router};
use advisor::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Advisor API v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Canonical rule set active (coverage cap {COVERAGE_CAP}); legacy rules {}",
        if config.enable_legacy_rules {
            "enabled"
        } else {
            "disabled"
        }
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;

    let state = AppState::new(config.clone());
    let app = apply_middleware(build_router(state), &config)?;
    info!(
        "CORS origin {}, request timeout {}s",
        config.cors_origin,
        config.request_timeout.as_secs()
    );

    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("Shutdown signal received"),
        Err(e) => {
            tracing::error!("Failed to listen for shutdown signal: {e}");
            std::future::pending::<()>().await;
        }
    }
}
