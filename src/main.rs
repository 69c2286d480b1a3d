//! Watchlist Server: a single-user movie watchlist.
//!
//! Main entry point that wires the crates together and starts the server.

use tracing_subscriber::{EnvFilter, fmt};

use watchlist_core::config::AppConfig;
use watchlist_core::error::AppError;
use watchlist_database::DatabasePool;
use watchlist_database::connection::ensure_parent_dir;
use watchlist_database::migration::run_migrations;

#[tokio::main]
async fn main() {
    let config = match load_configuration() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Load configuration from `config/default`, the environment overlay, and
/// `WATCHLIST__*` variables.
fn load_configuration() -> Result<AppConfig, AppError> {
    let env = std::env::var("WATCHLIST_ENV").unwrap_or_else(|_| "development".to_string());
    AppConfig::load(&env)
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting Watchlist");

    ensure_parent_dir(&config.database)?;
    let db = DatabasePool::connect(&config.database).await?;
    run_migrations(db.pool()).await?;

    watchlist_api::run_server(config, db).await
}
