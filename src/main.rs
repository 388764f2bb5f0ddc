//! Application entry point. Parses CLI arguments, loads configuration,
//! initializes tracing, resolves the listen address, and runs the HTTP
//! server until shutdown.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulsed::config::{self, AppConfig, ADDR_ENV_VAR, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use pulsed::http::Server;
use pulsed::routes::create_router;

/// pulsed: a minimal HTTP liveness endpoint server
#[derive(Parser, Debug)]
#[command(name = "pulsed", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Listen address, e.g. "0.0.0.0:8080" or ":8080" (overrides PULSED_ADDR and the config file)
    #[arg(short, long)]
    listen: Option<String>,

    /// Log level filter (e.g., "pulsed=debug,tower_http=info")
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    // Load configuration; absence of the default config file means defaults
    let config = AppConfig::load_or_default(&args.config)?;

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

    // Resolve listen address with priority: CLI > env > config file
    let listen_addr = args
        .listen
        .or_else(|| std::env::var(ADDR_ENV_VAR).ok())
        .unwrap_or_else(|| config.http.listen_addr());
    let listen_addr = config::normalize_listen_addr(&listen_addr);

    tracing::info!(addr = %listen_addr, "Loaded configuration");

    // Bind, then serve until SIGTERM/SIGINT
    let server = Server::bind(&listen_addr).await?;
    let app = create_router();
    server.serve(app).await?;

    Ok(())
}
