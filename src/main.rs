//! Phonebook service.
//!
//! ```text
//!     Client Request ──▶ tower-http layers ──▶ /api/persons handlers ──▶ PersonStore
//!                        (trace, request id,    /info                    (RwLock)
//!                         timeout, cors)        fallback ──▶ static assets / index.html
//! ```

use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use phonebook::http::HttpServer;
use phonebook::lifecycle::{signals::shutdown_signal, startup};
use phonebook::observability::{logging, metrics};

#[derive(Parser, Debug)]
#[command(name = "phonebook", version, about = "In-memory phonebook web service")]
struct Args {
    /// Path to a TOML config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on (overrides PORT and the config file)
    #[arg(short, long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = startup::bootstrap(args.config.as_deref(), args.port)?;
    logging::init_logging(&config.observability)?;

    tracing::info!("phonebook v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        seed_sample_data = config.store.seed_sample_data,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        // Validation has already checked the address.
        let addr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Server running");

    let store = startup::initial_store(&config);
    let server = HttpServer::new(config, store);
    server.run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
