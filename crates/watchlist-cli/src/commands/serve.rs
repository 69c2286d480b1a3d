//! Start the Watchlist server.

use clap::Args;
use tracing::info;

use watchlist_core::config::AppConfig;
use watchlist_core::error::AppError;
use watchlist_database::migration::run_migrations;

/// Arguments for the serve command
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Override the server port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Override the server host
    #[arg(long)]
    pub host: Option<String>,

    /// Skip running database migrations on startup
    #[arg(long)]
    pub no_migrate: bool,
}

/// Execute the serve command
pub async fn execute(args: &ServeArgs, mut config: AppConfig) -> Result<(), AppError> {
    if let Some(port) = args.port {
        config.server.port = port;
    }
    if let Some(ref host) = args.host {
        config.server.host = host.clone();
    }

    println!("Starting Watchlist server...");
    println!("  Address: {}", config.server.bind_address());

    let db = super::connect(&config).await?;
    if !args.no_migrate {
        run_migrations(db.pool()).await?;
    }

    info!(address = %config.server.bind_address(), "Serving");
    watchlist_api::run_server(config, db).await
}
