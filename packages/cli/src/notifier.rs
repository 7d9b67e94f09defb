// ABOUTME: Prints notifications as coloured status lines on stderr
// ABOUTME: Terminal stand-in for toast messages

use colored::*;
use shipui_core::{Notification, NotificationLevel, Notifier};

#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl TerminalNotifier {
    pub fn new() -> Self {
        Self
    }
}

fn symbol(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Success => "✓",
        NotificationLevel::Info => "ℹ",
        NotificationLevel::Warning => "⚠",
        NotificationLevel::Error => "✗",
    }
}

/// Render one notification line
pub fn render(notification: &Notification) -> String {
    let line = format!("{} {}", symbol(notification.level), notification.message);
    match notification.level {
        NotificationLevel::Success => line.green().to_string(),
        NotificationLevel::Info => line.cyan().to_string(),
        NotificationLevel::Warning => line.yellow().to_string(),
        NotificationLevel::Error => line.red().bold().to_string(),
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, notification: Notification) {
        eprintln!("{}", render(&notification));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_keeps_message() {
        let line = render(&Notification::warning("Generated code, but failed to save to history."));
        assert!(line.contains("⚠ Generated code, but failed to save to history."));
    }

    #[test]
    fn test_each_level_has_distinct_symbol() {
        let symbols = [
            symbol(NotificationLevel::Success),
            symbol(NotificationLevel::Info),
            symbol(NotificationLevel::Warning),
            symbol(NotificationLevel::Error),
        ];
        for (i, a) in symbols.iter().enumerate() {
            for b in &symbols[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
