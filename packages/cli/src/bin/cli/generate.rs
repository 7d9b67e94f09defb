// ABOUTME: Component generation commands
// ABOUTME: One-shot generation, interactive generation and stdin code extraction

use std::io::Read;
use std::path::{Path, PathBuf};

use colored::*;
use inquire::{Confirm, Select, Text};
use shipui_ai::extract_code;
use shipui_cli::format::code_panel;
use shipui_cli::{copy_code, AppContext, Clipboard};
use shipui_core::Framework;

use super::utils::answered;

pub async fn generate_once(
    ctx: &AppContext,
    prompt: &str,
    framework: Framework,
    out: Option<&Path>,
) -> anyhow::Result<()> {
    ctx.session.initialize().await;

    eprintln!("{}", format!("Generating {} component...", framework.label()).dimmed());
    let generation = ctx.generator().generate(prompt, framework).await?;

    // Plain code on stdout so it can be piped
    println!("{}", generation.code);
    eprintln!("{}", format!("({})", generation.persisted).dimmed());

    if let Some(dir) = out {
        ctx.generator().export_code(&generation.code, dir)?;
    }
    Ok(())
}

struct FrameworkChoice(Framework);

impl std::fmt::Display for FrameworkChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.0.label(), self.0.value())
    }
}

/// Interactive generate screen; errors are already reported as notifications
pub async fn generate_interactive(
    ctx: &AppContext,
    clipboard: &mut dyn Clipboard,
) -> anyhow::Result<()> {
    let Some(prompt) = answered(
        Text::new("Describe your component:")
            .with_placeholder("a pricing card with three tiers")
            .prompt(),
    )?
    else {
        return Ok(());
    };

    let choices: Vec<FrameworkChoice> = Framework::ALL.into_iter().map(FrameworkChoice).collect();
    let Some(FrameworkChoice(framework)) =
        answered(Select::new("Framework:", choices).prompt())?
    else {
        return Ok(());
    };

    println!("{}", "Generating...".dimmed());
    let generator = ctx.generator();
    let Ok(generation) = generator.generate(&prompt, framework).await else {
        return Ok(());
    };

    println!("{}", code_panel(&generation.code, generation.framework));
    println!("{}", format!("({})", generation.persisted).dimmed());

    if answered(Confirm::new("Copy to clipboard?").with_default(false).prompt())? == Some(true) {
        copy_code(clipboard, &generation.code, ctx.notifier.as_ref());
    }

    if answered(Confirm::new("Save to a file?").with_default(false).prompt())? == Some(true) {
        let Some(dir) = answered(Text::new("Directory:").with_default(".").prompt())? else {
            return Ok(());
        };
        // Failure already notified
        let _ = generator.export_code(&generation.code, &PathBuf::from(dir));
    }
    Ok(())
}

pub fn extract_stdin() -> anyhow::Result<()> {
    let mut response = String::new();
    std::io::stdin().read_to_string(&mut response)?;
    println!("{}", extract_code(&response));
    Ok(())
}
