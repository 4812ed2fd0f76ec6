//! Binary entrypoint for the Per-Diem Engine API server.

use std::process::ExitCode;

use per_diem_engine::api::{AppState, DEFAULT_MAX_TRIP_DAYS, create_router};
use per_diem_engine::config::ConfigLoader;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_CONFIG_DIR: &str = "./config/rates";
const DEFAULT_ADDR: &str = "0.0.0.0:8080";

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Overridable with PER_DIEM_CONFIG, PER_DIEM_ADDR and PER_DIEM_MAX_TRIP_DAYS
    let config_dir = std::env::var("PER_DIEM_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let addr = std::env::var("PER_DIEM_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let max_trip_days = match std::env::var("PER_DIEM_MAX_TRIP_DAYS") {
        Err(_) => DEFAULT_MAX_TRIP_DAYS,
        Ok(value) => match value.parse::<i64>() {
            Ok(days) if days > 0 => days,
            _ => {
                error!(%value, "PER_DIEM_MAX_TRIP_DAYS must be a positive number of days");
                return ExitCode::FAILURE;
            }
        },
    };

    let loader = match ConfigLoader::load(&config_dir) {
        Ok(loader) => loader,
        Err(err) => {
            error!(config_dir = %config_dir, error = %err, "Failed to load rate configuration");
            return ExitCode::FAILURE;
        }
    };

    let app = create_router(AppState::new(loader.into_rate_table()).with_max_trip_days(max_trip_days));

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            error!(%addr, error = %err, "Failed to bind");
            return ExitCode::FAILURE;
        }
    };

    info!(%addr, config_dir = %config_dir, max_trip_days, "Per-diem API listening");
    if let Err(err) = axum::serve(listener, app).await {
        error!(error = %err, "Server error");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
