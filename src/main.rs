//! devserve: a local static-file server for manual testing.
//!
//! This is the application entry point. It parses the CLI, loads
//! configuration from a TOML file (or falls back to built-in defaults),
//! initializes tracing, assembles the router, schedules the optional
//! one-shot browser launch, and runs the server until a shutdown signal
//! arrives.

use std::time::Duration;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use devserve::browser;
use devserve::config::{AppConfig, DEFAULT_LOG_FILTER};
use devserve::http::start_server;
use devserve::routes::create_router;

/// Serve a local directory over HTTP or HTTPS for manual testing
#[derive(Parser, Debug)]
#[command(name = "devserve", version, about)]
struct Args {
    /// Path to configuration file; built-in defaults are used when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "devserve=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!(
        root = %config.serve.root,
        cors = config.serve.cors,
        "Serving at {}://{}:{}",
        config.scheme(),
        config.http.host,
        config.http.port
    );
    tracing::info!("Press Ctrl+C to stop");

    if config.browser.open {
        let url = config.open_url();
        tracing::info!(
            %url,
            delay_seconds = config.browser.delay_seconds,
            "Browser will open automatically"
        );
        browser::spawn_browser_open(url, Duration::from_secs(config.browser.delay_seconds));
    }

    let app = create_router(&config);
    start_server(app, &config).await?;

    tracing::info!("Server stopped, goodbye");

    Ok(())
}
