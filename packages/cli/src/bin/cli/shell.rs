// ABOUTME: Interactive shell holding one session for the life of the process
// ABOUTME: Menu loop over generation, history, sign-in, settings and theme

use std::fmt;

use colored::*;
use inquire::Select;
use shipui_auth::SessionState;
use shipui_cli::{AppContext, SystemClipboard};

use super::utils::answered;
use super::{auth, generate, guest, history, settings, theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuItem {
    Generate,
    History,
    GuestHistory,
    SignIn,
    SignOut,
    Settings,
    ToggleTheme,
    Quit,
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            MenuItem::Generate => "Generate a component",
            MenuItem::History => "My components",
            MenuItem::GuestHistory => "Guest generations",
            MenuItem::SignIn => "Sign in with Google",
            MenuItem::SignOut => "Sign out",
            MenuItem::Settings => "Settings",
            MenuItem::ToggleTheme => "Toggle theme",
            MenuItem::Quit => "Quit",
        };
        f.write_str(label)
    }
}

fn menu_for(state: &SessionState) -> Vec<MenuItem> {
    let mut items = vec![MenuItem::Generate];
    match state {
        SessionState::Authenticated(_) => {
            items.push(MenuItem::History);
            items.push(MenuItem::SignOut);
        }
        SessionState::Anonymous | SessionState::Unknown => {
            items.push(MenuItem::GuestHistory);
            items.push(MenuItem::SignIn);
        }
    }
    items.extend([MenuItem::Settings, MenuItem::ToggleTheme, MenuItem::Quit]);
    items
}

async fn print_header(ctx: &AppContext, state: &SessionState) {
    let who = match state {
        SessionState::Authenticated(user) => {
            format!("Signed in as {} <{}>", user.name.bold(), user.email)
        }
        _ => {
            let pending = ctx.guest.len().await;
            format!("Guest mode ({} local generations)", pending)
        }
    };
    let current_theme = ctx.theme.load().await;

    println!();
    println!("{}  {}  {}", "Ship UI".blue().bold(), who, theme::theme_label(current_theme));
}

pub async fn run(ctx: &AppContext) -> anyhow::Result<()> {
    println!("{}", "Connecting...".dimmed());
    ctx.session.initialize().await;

    let mut viewer = ctx.history_viewer();
    let mut clipboard = SystemClipboard::new();

    loop {
        let state = ctx.session.state().await;
        print_header(ctx, &state).await;

        let Some(choice) = answered(Select::new("What next?", menu_for(&state)).prompt())? else {
            break;
        };

        let result = match choice {
            MenuItem::Generate => generate::generate_interactive(ctx, &mut clipboard).await,
            MenuItem::History => {
                history::browse(&mut viewer, &mut clipboard, ctx.notifier.as_ref()).await
            }
            MenuItem::GuestHistory => {
                guest::list_guest_history(ctx).await;
                Ok(())
            }
            MenuItem::SignIn => auth::login_interactive(ctx).await,
            MenuItem::SignOut => {
                auth::logout(ctx).await;
                // Drop the previous user's list right away
                let _ = viewer.refresh().await;
                Ok(())
            }
            MenuItem::Settings => settings::settings_interactive(ctx).await,
            MenuItem::ToggleTheme => match ctx.theme.toggle().await {
                Ok(next) => {
                    println!("Theme: {}", theme::theme_label(next));
                    Ok(())
                }
                Err(e) => Err(e.into()),
            },
            MenuItem::Quit => break,
        };

        // Nothing is fatal to the shell
        if let Err(e) = result {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
        }
    }

    println!("{}", "Bye!".dimmed());
    Ok(())
}
