// src/actions/info.rs
use crate::{
    config::consts::ALERT_MESSAGE,
    core::Document,
    diagnostics::Diagnostics,
    error::PipelineError,
    feedback::{FeedbackLayer, Scheduler, WidgetId},
    format::render_info,
    specs::album,
};

/// Scrape the whole record and render the BBcode block.
pub fn generate_info(doc: &dyn Document, diag: &mut dyn Diagnostics) -> Result<String, PipelineError> {
    let record = album::extract(doc, diag)?;
    Ok(render_info(&record))
}

/// Info click: overlay on success, alert on failure.
pub fn info(
    doc: &dyn Document,
    diag: &mut dyn Diagnostics,
    layer: &mut FeedbackLayer,
    sched: &mut dyn Scheduler,
) -> Option<WidgetId> {
    match generate_info(doc, diag) {
        Ok(text) => {
            logf!("Info: generated {} lines", text.lines().count());
            Some(layer.show_overlay(sched, text))
        }
        Err(e) => {
            diag.error(&format!("Info failed: {e}"));
            layer.alert(ALERT_MESSAGE);
            None
        }
    }
}
