use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::*;
use shipui_cli::{logging, AppContext};
use shipui_core::Framework;

mod cli;

use cli::guest::GuestCommands;
use cli::settings::SettingsCommands;
use cli::theme::ThemeCommands;

#[derive(Parser)]
#[command(name = "shipui")]
#[command(about = "Ship UI - describe a UI component, get the code")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive session (default)
    Shell,
    /// Generate a component once and print the code
    Generate {
        /// What to build, e.g. "a pricing card with three tiers"
        #[arg(required = true, num_args = 1..)]
        prompt: Vec<String>,
        /// Target framework identifier (see `shipui frameworks`)
        #[arg(short, long, default_value_t = Framework::default())]
        framework: Framework,
        /// Also write the code to GenUI-Code.html in this directory
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Manage the personal Gemini API key
    #[command(subcommand)]
    Settings(SettingsCommands),
    /// Show or change the colour theme
    #[command(subcommand)]
    Theme(ThemeCommands),
    /// Inspect generations saved while signed out
    #[command(subcommand)]
    Guest(GuestCommands),
    /// Read a model reply on stdin and print the extracted code
    Extract,
    /// List supported frameworks
    Frameworks,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    logging::init_tracing();

    let cli = Cli::parse();

    if let Err(e) = handle_command(cli.command.unwrap_or(Commands::Shell)).await {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        process::exit(1);
    }
}

async fn handle_command(command: Commands) -> anyhow::Result<()> {
    // Commands that never touch storage or the network
    match command {
        Commands::Extract => return cli::generate::extract_stdin(),
        Commands::Frameworks => {
            println!("{}", shipui_cli::format::frameworks_table());
            return Ok(());
        }
        _ => {}
    }

    let ctx = AppContext::from_env()?;

    match command {
        Commands::Shell => cli::shell::run(&ctx).await,
        Commands::Generate {
            prompt,
            framework,
            out,
        } => cli::generate::generate_once(&ctx, &prompt.join(" "), framework, out.as_deref()).await,
        Commands::Settings(cmd) => cli::settings::handle_settings_command(&ctx, cmd).await,
        Commands::Theme(cmd) => cli::theme::handle_theme_command(&ctx, cmd).await,
        Commands::Guest(cmd) => cli::guest::handle_guest_command(&ctx, cmd).await,
        Commands::Extract | Commands::Frameworks => Ok(()),
    }
}
