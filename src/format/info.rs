// src/format/info.rs
use crate::specs::album::{tracklist_text, AlbumRecord};

use super::date::format_date;

/// BBcode block shown by the Info action.
pub fn render_info(record: &AlbumRecord) -> String {
    format!(
        "[quote]\n\
         [img]{cover}[/img]\n\
         [b]Title:[/b] {title}\n\
         [b]Catalog number:[/b] {catalog}\n\
         [b]Release date:[/b] {date}\n\
         [b]Tracklist[/b]:\n\
         [code]\n\
         {tracks}\n\
         [/code]\n\
         [/quote]",
        cover = record.cover_art_url.as_deref().unwrap_or_default(),
        title = record.title,
        catalog = record.catalog_number.as_deref().unwrap_or_default(),
        date = format_date(record.release_date.as_ref()),
        tracks = tracklist_text(&record.tracklist),
    )
}
