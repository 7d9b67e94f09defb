use clap::Subcommand;
use colored::*;
use shipui_cli::AppContext;
use shipui_storage::Theme;

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the current theme
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        /// light or dark
        theme: Theme,
    },
}

pub async fn handle_theme_command(ctx: &AppContext, command: ThemeCommands) -> anyhow::Result<()> {
    let theme = match command {
        ThemeCommands::Show => ctx.theme.load().await,
        ThemeCommands::Toggle => ctx.theme.toggle().await?,
        ThemeCommands::Set { theme } => {
            ctx.theme.save(theme).await?;
            theme
        }
    };
    println!("Theme: {}", theme_label(theme));
    Ok(())
}

pub fn theme_label(theme: Theme) -> ColoredString {
    match theme {
        Theme::Dark => "dark".bright_white().on_black(),
        Theme::Light => "light".black().on_bright_white(),
    }
}
