//! bookstock Server Binary
//!
//! Loads the catalog and serves it over HTTP.

use std::sync::Arc;

use bookstock::{Catalog, Config, Server};
use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

/// bookstock Server
#[derive(Parser, Debug)]
#[command(name = "bookstock-server")]
#[command(about = "Book inventory served over HTTP")]
#[command(version)]
struct Args {
    /// Catalog JSON file (created on shutdown if missing)
    #[arg(short, long, default_value = "./catalog.json")]
    catalog: String,

    /// Listen address (host:port)
    #[arg(short, long, default_value = "127.0.0.1:3000")]
    listen: String,

    /// Do not write the catalog back on shutdown
    #[arg(long)]
    no_sync: bool,
}

#[tokio::main]
async fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,bookstock=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .init();

    let args = Args::parse();

    tracing::info!("bookstock Server v{}", bookstock::VERSION);
    tracing::info!("Catalog file: {}", args.catalog);
    tracing::info!("Listen address: {}", args.listen);

    let config = Config::builder()
        .catalog_path(&args.catalog)
        .listen_addr(&args.listen)
        .sync_on_shutdown(!args.no_sync)
        .build();

    let catalog = match Catalog::open_or_create(&config.catalog_path) {
        Ok(c) => Arc::new(c),
        Err(e) => {
            tracing::error!("Failed to open catalog: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!("Catalog loaded with {} books", catalog.len());

    let server = Server::new(config, catalog);
    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }

    tracing::info!("Server stopped");
}
