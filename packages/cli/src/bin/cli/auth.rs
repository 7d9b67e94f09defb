// ABOUTME: Sign-in and sign-out screens for the interactive shell
// ABOUTME: Exchanges a Google ID token for a backend session held by this process

use colored::*;
use inquire::Password;
use inquire::PasswordDisplayMode;
use shipui_auth::SyncOutcome;
use shipui_cli::AppContext;

use super::utils::answered;

pub async fn login_interactive(ctx: &AppContext) -> anyhow::Result<()> {
    println!(
        "{}",
        "Paste the Google ID token (credential) from Google Identity Services.".dimmed()
    );
    let Some(credential) = answered(
        Password::new("Google ID token:")
            .without_confirmation()
            .with_display_mode(PasswordDisplayMode::Masked)
            .prompt(),
    )?
    else {
        return Ok(());
    };

    // Outcome is reported through notifications
    if let Ok(outcome) = ctx.session.login_with_google(&credential).await {
        if let SyncOutcome::Failed(_) = outcome.sync {
            let pending = ctx.guest.len().await;
            println!(
                "{}",
                format!("{} guest generations kept locally; they will sync on next sign-in.", pending)
                    .dimmed()
            );
        }
    }
    Ok(())
}

pub async fn logout(ctx: &AppContext) {
    ctx.session.logout().await;
}
