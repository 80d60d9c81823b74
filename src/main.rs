//! Media Downloader Proxy
//!
//! This application serves a small form UI and forwards media URLs or
//! search queries to an upstream scraping API, returning the result as JSON.

mod api;
mod conversion;
mod core;
mod models;

use crate::api::endpoints::{AppState, create_router};
use crate::core::config::Config;
use crate::core::constants::service;
use crate::core::logging::init_logging;
use crate::core::provider::Scraper;
use crate::core::providers::RelayScraper;
use crate::models::platform::Platform;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Check for --help flag
    if std::env::args().any(|arg| arg == "--help") {
        print_help();
        return;
    }

    // Load configuration
    let config = match Config::from_env() {
        Ok(cfg) => Arc::new(cfg),
        Err(e) => {
            eprintln!("Configuration Error: {:#}", e);
            std::process::exit(1);
        }
    };

    // Initialize logging
    init_logging(&config.log_level);

    print_startup_banner(&config);

    let scraper: Arc<dyn Scraper> = match RelayScraper::new(
        config.scraper_base_url.clone(),
        config.scraper_api_key.clone(),
        config.request_timeout,
    ) {
        Ok(scraper) => Arc::new(scraper),
        Err(e) => {
            error!("Failed to create scraper client: {:#}", e);
            std::process::exit(1);
        }
    };

    info!("Using scraper: {}", scraper.scraper_name());

    let app_state = AppState {
        config: config.clone(),
        scraper,
    };

    let app = create_router(app_state);

    // Bind to address
    let addr = format!("{}:{}", config.host, config.port);
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("Failed to bind to {}: {}", addr, e);
            std::process::exit(1);
        }
    };

    info!("Server listening on http://{}", addr);

    if let Err(e) = axum::serve(listener, app).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }
}

/// Print startup banner with configuration
fn print_startup_banner(config: &Config) {
    println!("🚀 {} v{}", service::NAME, service::VERSION);
    println!("✅ Configuration loaded successfully");
    println!("   Scraper URL: {}", config.scraper_base_url);
    println!(
        "   Scraper API Key: {}",
        if config.scraper_api_key.is_some() {
            "Configured"
        } else {
            "None"
        }
    );
    println!("   Request Timeout: {}s", config.request_timeout);
    println!("   Server: {}:{}", config.host, config.port);
    println!(
        "   Platforms: {}",
        Platform::ALL
            .iter()
            .map(|p| p.slug())
            .collect::<Vec<_>>()
            .join(", ")
    );
    println!();
}

/// Print help message
fn print_help() {
    println!("{} v{}", service::NAME, service::VERSION);
    println!();
    println!("Usage: media-downloader-proxy [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --help    Display this help message");
    println!();
    println!("Environment variables:");
    println!("  CONFIG_PATH - Path to the TOML configuration file (default: config.toml)");
    println!("  RUST_LOG    - Overrides the configured log filter");
    println!();
    println!("Configuration keys:");
    println!("  [scraper] base_url        - Upstream scraping API base URL (required)");
    println!("  [scraper] api_key         - Bearer token for the scraping API");
    println!("  [server] host             - Server host (default: 0.0.0.0)");
    println!("  [server] port             - Server port (default: 8080)");
    println!("  [server] log_level        - Logging level (default: info)");
    println!("  [request] request_timeout - Upstream timeout in seconds (default: 60)");
    println!();
    println!("Routes:");
    for platform in Platform::ALL {
        println!(
            "  GET /api/downloader/{}?{}=...  ({})",
            platform.slug(),
            platform.query_param(),
            platform.label()
        );
    }
    println!("  POST /api/format/{{platform}}");
    println!("  GET /health");
}
