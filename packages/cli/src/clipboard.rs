// ABOUTME: Copies generated or saved code to the system clipboard
// ABOUTME: Reports the outcome through the notifier like the other actions

use anyhow::Context;
use shipui_core::{Notification, Notifier};
use tracing::{debug, error};

/// Somewhere text can be copied to
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()>;
}

/// The desktop clipboard, opened on first use
///
/// On X11/Wayland the copied text is owned by this process, so keep one
/// instance alive for the whole shell session.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> anyhow::Result<()> {
        let clipboard = match self.inner.as_mut() {
            Some(clipboard) => clipboard,
            None => self
                .inner
                .insert(arboard::Clipboard::new().context("clipboard unavailable")?),
        };
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Copy `code`, notifying success or why nothing was copied
///
/// Returns whether the clipboard now holds the code.
pub fn copy_code(clipboard: &mut dyn Clipboard, code: &str, notifier: &dyn Notifier) -> bool {
    if code.trim().is_empty() {
        notifier.notify(Notification::error("No code to copy"));
        return false;
    }

    match clipboard.set_text(code) {
        Ok(()) => {
            debug!(bytes = code.len(), "copied code");
            notifier.notify(Notification::success("Code copied to clipboard"));
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to copy");
            notifier.notify(Notification::error("Failed to copy"));
            false
        }
    }
}
