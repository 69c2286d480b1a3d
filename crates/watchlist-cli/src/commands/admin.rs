//! Create the admin account or reset its credentials.

use std::io::Write;

use clap::Args;

use watchlist_core::config::AppConfig;
use watchlist_core::error::AppError;
use watchlist_service::AdminService;

/// Arguments for the admin command
#[derive(Debug, Args)]
pub struct AdminArgs {
    /// Login name (prompted when omitted)
    #[arg(short, long)]
    pub username: Option<String>,

    /// Password (prompted with confirmation when omitted)
    #[arg(short, long)]
    pub password: Option<String>,
}

/// Execute the admin command
pub async fn execute(args: &AdminArgs, config: &AppConfig) -> Result<(), AppError> {
    let username = match &args.username {
        Some(u) => u.clone(),
        None => dialoguer::Input::new()
            .with_prompt("Username")
            .interact_text()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let password = match &args.password {
        Some(p) => p.clone(),
        None => dialoguer::Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords do not match")
            .interact()
            .map_err(|e| AppError::internal(format!("Input error: {e}")))?,
    };

    let db = super::connect(config).await?;
    let admin = super::admin_service(config, &db)?;
    run(&admin, &username, &password, &mut std::io::stdout()).await
}

pub(crate) async fn run(
    admin: &AdminService,
    username: &str,
    password: &str,
    out: &mut impl Write,
) -> Result<(), AppError> {
    if username.trim().is_empty() || password.is_empty() {
        return Err(AppError::validation("Username and password must not be empty"));
    }

    admin.init_database(false).await?;

    if admin.has_owner().await? {
        writeln!(out, "Updating user...")?;
    } else {
        writeln!(out, "Creating user...")?;
    }
    admin.bootstrap_admin(username, password).await?;
    writeln!(out, "Done.")?;
    Ok(())
}
