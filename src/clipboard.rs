//! Clipboard access for the copy action.
//!
//! The app talks to a [`ClipboardSink`] so tests can record writes instead
//! of touching the system clipboard.

use anyhow::{Context, Result};
use arboard::Clipboard;

/// Something that accepts text for the clipboard
pub trait ClipboardSink {
    fn write_text(&mut self, content: &str) -> Result<()>;
}

/// System clipboard via `arboard`.
///
/// A fresh handle is opened per write; holding one open keeps an X11/Wayland
/// connection alive for the whole session.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardSink for SystemClipboard {
    fn write_text(&mut self, content: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to access clipboard")?;
        clipboard
            .set_text(content)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}
