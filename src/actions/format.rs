// src/actions/format.rs
use crate::{
    config::consts::COPIED_MESSAGE,
    core::Document,
    diagnostics::Diagnostics,
    error::PipelineError,
    feedback::{Anchor, FeedbackLayer, Scheduler, WidgetId},
    format::render_filename,
    specs::album::{self, AlbumRecord},
};

/// Only title and release date are needed here; the tracklist is never read.
pub fn generate_filename(doc: &dyn Document, diag: &mut dyn Diagnostics) -> Result<String, PipelineError> {
    let record = AlbumRecord {
        title: album::album_title(doc)?,
        release_date: album::release_date(doc, diag)?,
        ..AlbumRecord::default()
    };
    Ok(render_filename(&record))
}

/// Format click: clipboard + tooltip on success; failures are only logged.
pub fn format(
    doc: &dyn Document,
    diag: &mut dyn Diagnostics,
    clipboard: &mut dyn super::Clipboard,
    layer: &mut FeedbackLayer,
    sched: &mut dyn Scheduler,
    anchor: Anchor,
) -> Option<WidgetId> {
    let result = generate_filename(doc, diag).and_then(|text| {
        logf!("Format: copying {text:?}");
        clipboard.set_text(text).map_err(PipelineError::from)
    });

    match result {
        Ok(()) => Some(layer.show_tooltip(sched, anchor, COPIED_MESSAGE)),
        Err(e) => {
            diag.error(&format!("Format failed: {e}"));
            None
        }
    }
}

