//! Tender Registry service.
//!
//! # Architecture Overview
//!
//! ```text
//!     Client Request
//!     ─────────────▶ ┌──────────┐   ┌──────────────┐   ┌──────────────────┐   ┌────────┐
//!                    │  http    │──▶│   routing    │──▶│ LedgerController │──▶│ ledger │
//!                    │  server  │   │  registrar   │   │ (TenderHandler)  │   │        │
//!     ◀───────────── └──────────┘   └──────────────┘   └──────────────────┘   └────────┘
//!     Client Response
//!
//!     Cross-cutting: config, observability (tracing + metrics), lifecycle
//! ```
//!
//! Routes:
//! - `GET /get_tender/{id}`
//! - `GET /add_tender/{key-type-size-timestamp-lots}`
//! - `GET /get_all_tenders`

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use tender_registry::config::{load_config, RegistryConfig};
use tender_registry::http::HttpServer;
use tender_registry::lifecycle::{signals, startup, Shutdown};
use tender_registry::observability::{logging, metrics};

#[derive(Parser)]
#[command(name = "tender-registry")]
#[command(about = "HTTP tender registry", long_about = None)]
struct Args {
    /// Path to a TOML config file. Defaults are used when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => RegistryConfig::default(),
    };

    logging::init_logging(&config.observability);

    tracing::info!("tender-registry v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        config_file = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        seed_on_start = config.ledger.seed_on_start,
        snapshot_path = ?config.ledger.snapshot_path,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            ),
        }
    }

    let ledger = startup::prepare_ledger(&config.ledger)?;

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    signals::spawn_signal_listener(shutdown);

    let server = HttpServer::new(config, ledger.clone());
    let served = server.run(listener, server_shutdown).await;
    if let Err(e) = &served {
        tracing::error!(error = %e, "HTTP server failed");
    }

    if let Err(e) = ledger.save_to_file() {
        tracing::error!(error = %e, "Failed to save ledger snapshot");
    }

    served?;
    tracing::info!("Shutdown complete");
    Ok(())
}
