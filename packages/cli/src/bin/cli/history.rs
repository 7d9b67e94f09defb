// ABOUTME: History browser for the interactive shell
// ABOUTME: Pick a saved component to view, copy, download or delete

use std::path::PathBuf;

use colored::*;
use inquire::{Confirm, Select, Text};
use shipui_cli::format::{code_panel, history_table, record_choice};
use shipui_cli::{copy_code, Clipboard};
use shipui_core::Notifier;
use shipui_history::HistoryViewer;

use super::utils::answered;

const BACK: &str = "← Back";

enum ItemAction {
    Copy,
    Download,
    Delete,
    Back,
}

impl std::fmt::Display for ItemAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemAction::Copy => f.write_str("Copy code"),
            ItemAction::Download => f.write_str("Download"),
            ItemAction::Delete => f.write_str("Delete"),
            ItemAction::Back => f.write_str(BACK),
        }
    }
}

pub async fn browse(
    viewer: &mut HistoryViewer,
    clipboard: &mut dyn Clipboard,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    // Load failures are notified and leave the old list in place
    let _ = viewer.refresh().await;

    loop {
        if viewer.items().is_empty() {
            println!("{}", "No saved components yet".yellow());
            return Ok(());
        }
        println!("{}", history_table(viewer.items()));

        let mut choices: Vec<String> = viewer.items().iter().map(record_choice).collect();
        choices.push(BACK.to_string());
        let Some(index) = answered(Select::new("Open:", choices).raw_prompt())?.map(|c| c.index)
        else {
            return Ok(());
        };
        let Some(id) = viewer.items().get(index).and_then(|r| r.id.clone()) else {
            return Ok(());
        };

        open_item(viewer, &id, clipboard, notifier).await?;
    }
}

async fn open_item(
    viewer: &mut HistoryViewer,
    id: &str,
    clipboard: &mut dyn Clipboard,
    notifier: &dyn Notifier,
) -> anyhow::Result<()> {
    let record = viewer.select(id)?;
    println!("{}", record.prompt.bold());
    println!("{}", code_panel(&record.code, record.framework));

    let code = record.code.clone();

    let actions = vec![
        ItemAction::Copy,
        ItemAction::Download,
        ItemAction::Delete,
        ItemAction::Back,
    ];
    match answered(Select::new("Action:", actions).prompt())? {
        Some(ItemAction::Copy) => {
            copy_code(clipboard, &code, notifier);
        }
        Some(ItemAction::Download) => {
            if let Some(dir) = answered(Text::new("Directory:").with_default(".").prompt())? {
                let _ = viewer.export_selected(&PathBuf::from(dir));
            }
        }
        Some(ItemAction::Delete) => {
            let confirmed = answered(
                Confirm::new("Delete this component?")
                    .with_default(false)
                    .prompt(),
            )?;
            if confirmed == Some(true) {
                let _ = viewer.delete(id).await;
            }
        }
        Some(ItemAction::Back) | None => {}
    }

    viewer.close();
    Ok(())
}
