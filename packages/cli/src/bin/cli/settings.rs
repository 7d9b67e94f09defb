// ABOUTME: Commands for the personal Gemini API key
// ABOUTME: Save, remove and show the override used instead of the default key

use clap::Subcommand;
use colored::*;
use inquire::Text;
use shipui_cli::AppContext;
use shipui_core::Notification;
use shipui_settings::{mask_key, ApiKeyChange};

use super::utils::answered;

#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Save a personal Gemini API key
    SetKey {
        /// The key; an empty value removes the override
        key: String,
    },
    /// Remove the personal key and go back to the default
    ClearKey,
    /// Show which key will be used
    Show,
}

pub async fn handle_settings_command(
    ctx: &AppContext,
    command: SettingsCommands,
) -> anyhow::Result<()> {
    match command {
        SettingsCommands::SetKey { key } => save_key(ctx, &key).await,
        SettingsCommands::ClearKey => {
            ctx.settings.clear().await?;
            ctx.notifier
                .notify(Notification::info(ApiKeyChange::Removed.message()));
            Ok(())
        }
        SettingsCommands::Show => {
            show_key(ctx).await;
            Ok(())
        }
    }
}

async fn save_key(ctx: &AppContext, input: &str) -> anyhow::Result<()> {
    match ctx.settings.save(input).await {
        Ok(change) => {
            let notification = match change {
                ApiKeyChange::Saved => Notification::success(change.message()),
                ApiKeyChange::Removed => Notification::info(change.message()),
            };
            ctx.notifier.notify(notification);
            Ok(())
        }
        Err(e) => {
            ctx.notifier.notify(Notification::error(e.to_string()));
            Err(e.into())
        }
    }
}

async fn show_key(ctx: &AppContext) {
    match ctx.settings.masked().await {
        Some(masked) => println!("API key: {} {}", masked.cyan(), "(personal)".dimmed()),
        None => match ctx.config.default_api_key.as_deref() {
            Some(key) => println!("API key: {} {}", mask_key(key).cyan(), "(default)".dimmed()),
            None => println!(
                "{}",
                "No API key configured. Set GEMINI_API_KEY or run 'shipui settings set-key'.".yellow()
            ),
        },
    }
}

/// Settings screen of the interactive shell
pub async fn settings_interactive(ctx: &AppContext) -> anyhow::Result<()> {
    show_key(ctx).await;
    let Some(input) = answered(
        Text::new("Personal Gemini API key:")
            .with_help_message("Leave empty to use the default key")
            .prompt(),
    )?
    else {
        return Ok(());
    };

    // Already notified on failure
    let _ = save_key(ctx, &input).await;
    Ok(())
}
