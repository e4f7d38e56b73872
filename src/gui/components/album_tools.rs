// src/gui/components/album_tools.rs
//
// Album header with the "Info | Format" links next to the album tools label.
// Clicks run the actions synchronously; results land in the feedback layer.

use eframe::egui;
use crate::{
    actions,
    feedback::Anchor,
    gui::{app::App, clipboard::ContextClipboard},
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let Some(doc) = app.document.as_ref() else {
        ui.label("Load a saved VGMdb album page to begin.");
        return;
    };

    ui.heading(&app.album_title);
    ui.add_space(6.0);

    if !app.has_album_tools {
        ui.label("Album tools not found on this page.");
        return;
    }

    // A pending alert blocks both triggers until acknowledged.
    let enabled = app.feedback.alert_message().is_none();
    let mut info_clicked = false;
    let mut format_anchor = None;

    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 4.0;
        ui.label("Album tools");
        ui.label("|");
        info_clicked = ui.add_enabled(enabled, egui::Link::new("Info")).clicked();
        ui.label("|");
        let format = ui.add_enabled(enabled, egui::Link::new("Format"));
        if format.clicked() {
            format_anchor = Some(Anchor { left: format.rect.left(), bottom: format.rect.bottom() });
        }
    });

    if info_clicked {
        logd!("UI: Info clicked");
        actions::info(doc, &mut app.diagnostics, &mut app.feedback, &mut app.timers);
    }

    if let Some(anchor) = format_anchor {
        logd!("UI: Format clicked");
        let mut clipboard = ContextClipboard(ui.ctx());
        actions::format(
            doc,
            &mut app.diagnostics,
            &mut clipboard,
            &mut app.feedback,
            &mut app.timers,
            anchor,
        );
    }
}
