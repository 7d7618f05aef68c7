//! One-shot upload of the station dataset to Firestore.
//!
//! Usage: `seed-stations [--dry-run]`
//!
//! With `--dry-run` the stations are written to an in-memory store and
//! nothing leaves the process.

use std::process::ExitCode;

use station_finder::config::SeedConfig;
use station_finder::seed::{FirestoreStore, MemoryStore, seed_stations};
use station_finder::stations::all_stations;
use station_finder::telemetry;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    let dry_run = std::env::args().skip(1).any(|arg| arg == "--dry-run");
    let stations = all_stations();

    let result = if dry_run {
        let store = MemoryStore::new();
        let result = seed_stations(&store, &stations).await;
        info!("Dry run: {} documents would be written", store.len());
        result
    } else {
        let config = match SeedConfig::from_env() {
            Ok(config) => config,
            Err(e) => {
                error!(
                    "config: {e}. Check all required environment variables ({}) are set.",
                    SeedConfig::REQUIRED.join(", ")
                );
                return ExitCode::FAILURE;
            }
        };

        let store = match FirestoreStore::new(config.firestore) {
            Ok(store) => store,
            Err(e) => {
                error!("failed to create Firestore client: {e}");
                return ExitCode::FAILURE;
            }
        };

        seed_stations(&store, &stations).await
    };

    match result {
        Ok(report) => {
            info!(
                "Seeding finished: {} uploaded, {} skipped",
                report.uploaded, report.skipped
            );
            ExitCode::SUCCESS
        }
        // The loader has already logged the failing write.
        Err(_) => ExitCode::FAILURE,
    }
}
