// src/format/filename.rs
use crate::core::sanitize::sanitize_title;
use crate::specs::album::AlbumRecord;

use super::date::format_date_for_clipboard;

/// `[YYMMDD]Title`, ready to paste as a folder or file name.
pub fn render_filename(record: &AlbumRecord) -> String {
    format!(
        "[{}]{}",
        format_date_for_clipboard(record.release_date.as_ref()),
        sanitize_title(&record.title)
    )
}
