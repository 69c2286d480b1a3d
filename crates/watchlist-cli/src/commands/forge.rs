//! Fill the database with demo data.

use std::io::Write;

use watchlist_core::config::AppConfig;
use watchlist_core::error::AppError;
use watchlist_service::AdminService;
use watchlist_service::user::admin::FORGE_USERNAME;

use crate::output;

/// Execute the forge command
pub async fn execute(config: &AppConfig) -> Result<(), AppError> {
    let db = super::connect(config).await?;
    let admin = super::admin_service(config, &db)?;
    run(&admin, &mut std::io::stdout()).await
}

pub(crate) async fn run(admin: &AdminService, out: &mut impl Write) -> Result<(), AppError> {
    let report = admin.forge().await?;
    if report.created_owner {
        output::write_warning(
            out,
            &format!(
                "No account existed; created '{FORGE_USERNAME}' with a random password. \
                 Run `watchlist admin` to set your own."
            ),
        )?;
    }
    writeln!(out, "Done.")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::admin;

    #[tokio::test]
    async fn test_forge_prints_done() {
        let (_db, admin) = admin().await;
        admin.bootstrap_admin("grey", "helloflask").await.expect("bootstrap");
        let mut out = Vec::new();

        run(&admin, &mut out).await.expect("forge");
        assert_eq!(String::from_utf8(out).expect("utf8"), "Done.\n");
    }

    #[tokio::test]
    async fn test_forge_warns_about_placeholder_account() {
        let (_db, admin) = admin().await;
        let mut out = Vec::new();

        run(&admin, &mut out).await.expect("forge");
        let out = String::from_utf8(out).expect("utf8");
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("created 'admin' with a random password"));
        assert_eq!(lines[1], "Done.");
    }
}
