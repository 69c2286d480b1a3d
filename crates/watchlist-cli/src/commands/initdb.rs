//! Create the database schema.

use std::io::Write;

use clap::Args;

use watchlist_core::config::AppConfig;
use watchlist_core::error::AppError;
use watchlist_service::AdminService;

/// Arguments for the initdb command
#[derive(Debug, Args)]
pub struct InitdbArgs {
    /// Drop all tables before creating them
    #[arg(long)]
    pub drop: bool,
}

/// Execute the initdb command
pub async fn execute(args: &InitdbArgs, config: &AppConfig) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let admin = super::admin_service(config, &db)?;
    run(args, &admin, &mut std::io::stdout()).await
}

pub(crate) async fn run(
    args: &InitdbArgs,
    admin: &AdminService,
    out: &mut impl Write,
) -> Result<(), AppError> {
    admin.init_database(args.drop).await?;
    writeln!(out, "Initialized database.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::admin;

    #[tokio::test]
    async fn test_initdb_prints_confirmation() {
        let (_db, admin) = admin().await;
        let mut out = Vec::new();

        run(&InitdbArgs { drop: false }, &admin, &mut out)
            .await
            .expect("initdb");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Initialized database.\n");
    }

    #[tokio::test]
    async fn test_initdb_drop_clears_account() {
        let (_db, admin) = admin().await;
        admin.bootstrap_admin("grey", "helloflask").await.expect("bootstrap");
        let mut out = Vec::new();

        run(&InitdbArgs { drop: true }, &admin, &mut out)
            .await
            .expect("initdb --drop");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Initialized database.\n");
        assert!(!admin.has_owner().await.expect("has_owner"));
    }
}
