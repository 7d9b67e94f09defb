// ABOUTME: Commands for the local guest history buffer
// ABOUTME: Lists or discards generations made while signed out

use clap::Subcommand;
use colored::*;
use inquire::Confirm;
use shipui_cli::format::history_table;
use shipui_cli::AppContext;

use super::utils::answered;

#[derive(Subcommand)]
pub enum GuestCommands {
    /// List generations waiting to be synced on sign-in
    List,
    /// Discard all guest generations
    Clear {
        /// Skip confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

pub async fn handle_guest_command(ctx: &AppContext, command: GuestCommands) -> anyhow::Result<()> {
    match command {
        GuestCommands::List => {
            list_guest_history(ctx).await;
            Ok(())
        }
        GuestCommands::Clear { yes } => clear_guest_history(ctx, yes).await,
    }
}

pub async fn list_guest_history(ctx: &AppContext) {
    let records = ctx.guest.peek().await;
    if records.is_empty() {
        println!("{}", "No guest generations".yellow());
        return;
    }

    println!("{}", history_table(&records));
    println!(
        "Total: {} {}",
        records.len().to_string().cyan(),
        "(synced to your account on next sign-in)".dimmed()
    );
}

async fn clear_guest_history(ctx: &AppContext, yes: bool) -> anyhow::Result<()> {
    let count = ctx.guest.len().await;
    if count == 0 {
        println!("{}", "No guest generations".yellow());
        return Ok(());
    }

    if !yes {
        let confirmed = answered(
            Confirm::new(&format!("Discard {} guest generations?", count))
                .with_default(false)
                .prompt(),
        )?;
        if confirmed != Some(true) {
            println!("{}", "Cancelled".dimmed());
            return Ok(());
        }
    }

    ctx.guest.clear().await?;
    println!("{} Discarded {} guest generations", "✓".green().bold(), count);
    Ok(())
}
