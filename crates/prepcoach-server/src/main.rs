//! Prepcoach server - interview practice assistant over HTTP or one message at a time.

use anyhow::Result;
use clap::Parser;
use prepcoach_server::{config, logging, routes, state};
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use config::Config;
use logging::{LogConfig, LogFormat, Verbosity};
use state::AppState;

/// Prepcoach - mock interviews, STAR answer review, and company tips.
#[derive(Parser, Debug)]
#[command(name = "prepcoach-server")]
#[command(about = "Interview preparation assistant")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the interview data file from config
    #[arg(long, value_name = "FILE")]
    data: Option<PathBuf>,

    /// Answer a single message on stdout and exit instead of serving HTTP
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Enable verbose logging (INFO level for most targets)
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable trace logging (TRACE level for everything)
    #[arg(long)]
    trace: bool,

    /// Quiet mode (WARN and ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "router=debug").
    /// Can be specified multiple times. Targets are prefixed with "prepcoach::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::new(
        Verbosity::from_flags(cli.verbose, cli.debug, cli.trace, cli.quiet),
        &cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(data) = cli.data {
        config.data_path = data;
    }

    tracing::info!(
        target: "prepcoach::startup",
        "Loaded configuration (data: {})",
        config.data_path.display()
    );

    let state = Arc::new(AppState::new(config.clone()));

    if let Some(message) = cli.message {
        let reply = state.assistant().handle(&message);
        println!("{}", reply);
        return Ok(());
    }

    let app = routes::router(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(target: "prepcoach::startup", "Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
