//! Employee API server.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ──────────────▶ http::server (request ID, trace, timeout, body limit, metrics)
//!                         │
//!                         ▼
//!                     http::employee ── model::payload (decode + validate)
//!                         │
//!                         ▼
//!                     store::memory (uuid → Employee)
//!                         │
//!     Client Response     ▼
//!     ◀────────────── JSON body + status
//! ```

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;

use employee_api::config::{resolve_config, ConfigOverrides};
use employee_api::observability::{logging, metrics};
use employee_api::store::{EmployeeStore, InMemoryStore};
use employee_api::{HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "employee-api")]
#[command(about = "In-memory employee REST API", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,

    /// Start with an empty store.
    #[arg(long)]
    no_seed: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let overrides = ConfigOverrides {
        bind_address: cli.bind,
        seed: cli.no_seed.then_some(false),
    };
    let config = resolve_config(cli.config.as_deref(), overrides)?;

    logging::init_logging(&config.observability);

    tracing::info!("employee-api v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_size = config.security.max_body_size,
        seed = config.store.seed,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Address already validated.
        if let Ok(addr) = config.observability.metrics_address.parse() {
            metrics::init_metrics(addr);
        }
    }

    let store: Arc<dyn EmployeeStore> = if config.store.seed {
        Arc::new(InMemoryStore::seeded())
    } else {
        Arc::new(InMemoryStore::new())
    };

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
