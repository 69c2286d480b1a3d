//! CLI command definitions and dispatch.

pub mod admin;
pub mod forge;
pub mod initdb;
pub mod movie;
pub mod serve;

use clap::{Parser, Subcommand};

use watchlist_auth::{CredentialStore, PasswordHasher};
use watchlist_core::config::AppConfig;
use watchlist_core::error::AppError;
use watchlist_database::DatabasePool;
use watchlist_database::connection::ensure_parent_dir;
use watchlist_database::repositories::UserRepository;
use watchlist_service::AdminService;

use crate::output::OutputFormat;

/// Watchlist: a single-user movie watchlist
#[derive(Debug, Parser)]
#[command(name = "watchlist", version, about, long_about = None)]
pub struct Cli {
    /// Base configuration file (extension optional)
    #[arg(short, long, default_value = "config/default")]
    pub config: String,

    /// Environment overlay, read from `config/{env}`
    #[arg(short, long, default_value = "development")]
    pub env: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the HTTP server
    Serve(serve::ServeArgs),
    /// Create the database schema
    Initdb(initdb::InitdbArgs),
    /// Fill the database with demo data
    Forge,
    /// Create the admin account or reset its credentials
    Admin(admin::AdminArgs),
    /// Catalog inspection
    Movie(movie::MovieArgs),
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(&self) -> Result<(), AppError> {
        let config = AppConfig::load_from(&self.config, &self.env)?;

        match &self.command {
            Commands::Serve(args) => serve::execute(args, config).await,
            Commands::Initdb(args) => initdb::execute(args, &config).await,
            Commands::Forge => forge::execute(&config).await,
            Commands::Admin(args) => admin::execute(args, &config).await,
            Commands::Movie(args) => movie::execute(args, &config, self.format).await,
        }
    }
}

/// Helper: open the configured database, creating its directory if needed
pub async fn connect(config: &AppConfig) -> Result<DatabasePool, AppError> {
    ensure_parent_dir(&config.database)?;
    DatabasePool::connect(&config.database).await
}

/// Helper: the bootstrap service over an open database
pub fn admin_service(config: &AppConfig, db: &DatabasePool) -> Result<AdminService, AppError> {
    let pool = db.pool().clone();
    let hasher = PasswordHasher::new(&config.auth)?;
    let credentials = CredentialStore::new(UserRepository::new(pool.clone()), hasher);
    Ok(AdminService::new(pool, credentials))
}
