use std::net::SocketAddr;
use std::process::ExitCode;

use station_finder::config::ServerConfig;
use station_finder::ranking::RankConfig;
use station_finder::routing::MapboxClient;
use station_finder::stations::all_stations;
use station_finder::telemetry;
use station_finder::web::{AppState, create_router};
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    telemetry::init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!(
                "config: {e}. Check all required environment variables ({}) are set.",
                ServerConfig::REQUIRED.join(", ")
            );
            return ExitCode::FAILURE;
        }
    };

    let client = match MapboxClient::new(config.mapbox.clone()) {
        Ok(client) => client,
        Err(e) => {
            error!("failed to create routing client: {e}");
            return ExitCode::FAILURE;
        }
    };

    let stations = all_stations();
    info!("Loaded {} stations", stations.len());

    let state = AppState::new(client, stations, RankConfig::default());
    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!("failed to bind {addr}: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!("Server running at http://localhost:{}", config.port);
    info!("  GET  /                       - Liveness check");
    info!("  GET  /getStationsAlongRoute  - Nearest stations by road");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
