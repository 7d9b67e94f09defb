// ABOUTME: Table and text helpers for terminal output
// ABOUTME: Renders history lists, framework lists and code panels

use chrono::{DateTime, Local, Utc};
use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, ContentArrangement, Table};
use shipui_core::{Framework, GenerationRecord};

/// Longest prompt shown in a table cell
pub const PROMPT_PREVIEW_CHARS: usize = 48;

pub fn format_date(at: &DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Saved or guest generations, numbered from 1
pub fn history_table(records: &[GenerationRecord]) -> Table {
    let mut table = new_table();
    table.set_header(vec!["#", "Prompt", "Framework", "Created"]);

    for (index, record) in records.iter().enumerate() {
        table.add_row(vec![
            (index + 1).to_string(),
            record.preview(PROMPT_PREVIEW_CHARS),
            record.framework.label().to_string(),
            format_date(&record.created_at),
        ]);
    }
    table
}

pub fn frameworks_table() -> Table {
    let mut table = new_table();
    table.set_header(vec!["Identifier", "Name", "Export"]);
    for framework in Framework::ALL {
        table.add_row(vec![
            framework.value().to_string(),
            framework.label().to_string(),
            framework.file_extension().to_string(),
        ]);
    }
    table
}

/// One-line summary used in selection menus
pub fn record_choice(record: &GenerationRecord) -> String {
    format!(
        "{}  ·  {}  ·  {}",
        record.preview(PROMPT_PREVIEW_CHARS),
        record.framework.label(),
        format_date(&record.created_at)
    )
}

/// Code framed with its language, for read-only display
pub fn code_panel(code: &str, framework: Framework) -> String {
    let rule = "─".repeat(60);
    format!(
        "{rule}\n[{}]\n{rule}\n{}\n{rule}",
        framework.editor_language(),
        code.trim_end()
    )
}
