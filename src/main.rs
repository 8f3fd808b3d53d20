//! Commitgen Server - Main entry point
//!
//! This binary creates and runs the HTTP server with all configured routes
//! and middleware. Configuration is loaded from the environment.

use anyhow::Result;
use chrono::Local;
use commitgen_server::{app_router, AppConfig, AppState, CompletionClient};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Custom time formatter that uses local timezone (respects TZ environment variable)
struct LocalTime;

impl tracing_subscriber::fmt::time::FormatTime for LocalTime {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        let now = Local::now();
        write!(w, "{}", now.format("%Y-%m-%d %H:%M:%S"))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (before reading any environment variables)
    dotenvy::dotenv().ok();

    // Default filter: info level overall, debug for this crate. Noisy HTTP
    // library logs are suppressed regardless of the RUST_LOG setting, since a
    // bare "debug"/"trace" would otherwise let hyper chunk logs through.
    let base_filter =
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info,commitgen_server=debug".to_string());
    let filter_str = format!("{},hyper=warn,h2=warn,reqwest=warn", base_filter);
    let filter = tracing_subscriber::EnvFilter::new(filter_str);

    let no_color = std::env::var("NO_COLOR").is_ok();
    if no_color {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_timer(LocalTime)
                    .with_ansi(false),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_timer(LocalTime))
            .init();
    }

    let config = AppConfig::from_env()?;
    let client = CompletionClient::new(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid listen address: {e}"))?;

    let state = Arc::new(AppState { config, client });
    let app = app_router(state);

    tracing::info!("Starting commitgen server on {}", addr);
    tracing::info!("Generation API: /generate/commit-messages, /generate/review-comments");
    tracing::info!("Model catalog: /models");
    tracing::info!("Swagger UI: /swagger-ui");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
