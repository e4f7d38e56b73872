// src/actions/mod.rs
//
// The two click handlers. Each one owns its error boundary:
// - Info:   failure → error log + blocking alert, no overlay.
// - Format: failure → error log only. Silent on purpose.

mod format;
mod info;

pub use format::{format, generate_filename};
pub use info::{generate_info, info};

use crate::error::ClipboardError;

/// Where the Format action writes its string.
pub trait Clipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError>;
}

/// Keeps the last write. Used by the CLI and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    pub contents: Option<String>,
}

impl Clipboard for MemoryClipboard {
    fn set_text(&mut self, text: String) -> Result<(), ClipboardError> {
        self.contents = Some(text);
        Ok(())
    }
}
