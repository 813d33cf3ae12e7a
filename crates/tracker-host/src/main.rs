//! # Order Tracker Demo
//!
//! Loads order records, renders each one's status tracker, and prints it.
//!
//! ```bash
//! RUST_LOG=info cargo run --bin order-tracker -- path/to/orders.json
//! ```
//!
//! Without an argument the bundled sample in `demos/orders.json` is used.

use std::sync::Arc;
use tracing::{error, info, Instrument};
use tracker_host::{
    format_timeline, setup_tracing, JsonFileSource, JsonSource, RecordSource, SystemClock,
    TrackerConfig, TrackerSystem,
};

const SAMPLE_ORDERS: &str = include_str!("../demos/orders.json");

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = TrackerConfig::from_env().map_err(|e| e.to_string())?;
    info!(buffer_size = config.buffer_size, "Starting order tracker");

    let system = TrackerSystem::with_config(&config, Arc::new(SystemClock)).map_err(|e| e.to_string())?;

    let source: Box<dyn RecordSource> = match std::env::args().nth(1) {
        Some(path) => {
            info!(%path, "Reading records from file");
            Box::new(JsonFileSource::new(path))
        }
        None => Box::new(JsonSource::new(SAMPLE_ORDERS)),
    };

    let span = tracing::info_span!("load");
    if let Err(e) = system.load_from(source.as_ref()).instrument(span).await {
        error!(error = %e, "Loading records failed");
        system.shutdown().await.map_err(|e| e.to_string())?;
        return Err(e.to_string());
    }

    match system.client.snapshot().await {
        Ok(views) => {
            for (id, view) in views {
                println!("Order {id}");
                print!("{}", format_timeline(&view));
                println!();
            }
        }
        Err(e) => error!(error = %e, "Rendering failed"),
    }

    system.shutdown().await.map_err(|e| e.to_string())?;
    info!("Order tracker finished");
    Ok(())
}
