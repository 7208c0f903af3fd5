//! Server-side rendering service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ http::server ──┬── {public_path}/* ──▶ ServeDir (bundles)
//!                                   │
//!                                   └── everything else ──▶ pipeline::SsrPipeline
//!                                                               │
//!                    per request:  store ─ styles registry ─ render ─ document
//!                                                               │
//!     Client Response ◀──── status (200/302/404) + HTML ◀───────┘
//!
//!     Shared, read-only (built once by lifecycle::startup):
//!         config · asset manifest · theme · CSS modules · component tree
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use ssr_server::config::{resolve_config, validate_config, ConfigError, Environment};
use ssr_server::observability::{init_logging, init_metrics};
use ssr_server::{bootstrap, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "ssr-server")]
#[command(about = "Serve server-rendered pages", long_about = None)]
struct Args {
    /// Config file (defaults to ./ssr.toml when present).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override `styles.environment` (development | production).
    #[arg(short, long)]
    env: Option<Environment>,

    /// Override `listener.bind_address`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = resolve_config(args.config.as_deref())?;
    if let Some(env) = args.env {
        config.styles.environment = env;
    }
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
    }
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability);
    tracing::info!("ssr-server v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        environment = ?config.styles.environment,
        request_timeout_secs = config.timeouts.request_secs,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let pipeline = bootstrap(&config)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, pipeline);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
