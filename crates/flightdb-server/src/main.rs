//! flightdb REST server.
//!
//! Loads the three OpenFlights data files into the in-memory store and
//! serves the query and mutation API over HTTP.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use flightdb::{ingest, FlightStore};

/// REST server for the flightdb flight network store
#[derive(Parser, Debug)]
#[command(name = "flightdb-server")]
#[command(about = "HTTP API server over the in-memory flight network store")]
struct Args {
    /// Path to the airlines data file
    #[arg(default_value = "airlines.dat")]
    airlines: PathBuf,

    /// Path to the airports data file
    #[arg(default_value = "airports.dat")]
    airports: PathBuf,

    /// Path to the routes data file
    #[arg(default_value = "routes.dat")]
    routes: PathBuf,

    /// Port to listen on
    #[arg(short, long, default_value = "8080")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,

    /// Directory with the static frontend
    #[arg(long, default_value = "static")]
    static_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("flightdb_server=info".parse()?),
        )
        .init();

    let args = Args::parse();

    let store = FlightStore::new();
    let stats = ingest::load_airlines_from_path(&store, &args.airlines)?;
    info!(loaded = stats.loaded, skipped = stats.skipped, "loaded airlines");
    let stats = ingest::load_airports_from_path(&store, &args.airports)?;
    info!(loaded = stats.loaded, skipped = stats.skipped, "loaded airports");
    let stats = ingest::load_routes_from_path(&store, &args.routes)?;
    info!(loaded = stats.loaded, skipped = stats.skipped, "loaded routes");

    flightdb_server::run(store, &args.host, args.port, &args.static_dir).await
}
