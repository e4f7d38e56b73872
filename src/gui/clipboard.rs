// src/gui/clipboard.rs
use eframe::egui;

use crate::{actions::Clipboard, error::ClipboardError};

/// System clipboard via egui's platform output.
pub struct ContextClipboard<'a>(pub &'a egui::Context);

impl Clipboard for ContextClipboard<'_> {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.0.copy_text(text);
        Ok(())
    }
}
