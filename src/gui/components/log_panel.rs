// src/gui/components/log_panel.rs
//
// Diagnostics emitted by the actions (warnings and caught errors).

use eframe::egui;
use egui_extras::{Column, TableBuilder};
use crate::{diagnostics::Level, gui::app::App};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal(|ui| {
        ui.strong("Log");
        if ui.small_button("Clear").clicked() {
            app.diagnostics.clear();
        }
    });

    TableBuilder::new(ui)
        .striped(true)
        .stick_to_bottom(true)
        .column(Column::exact(56.0))
        .column(Column::remainder().clip(true))
        .header(18.0, |mut header| {
            header.col(|ui| { ui.strong("Level"); });
            header.col(|ui| { ui.strong("Message"); });
        })
        .body(|mut body| {
            for entry in app.diagnostics.entries() {
                body.row(18.0, |mut row| {
                    row.col(|ui| {
                        let color = match entry.level {
                            Level::Warn => egui::Color32::from_rgb(200, 150, 0),
                            Level::Error => egui::Color32::from_rgb(220, 30, 30),
                        };
                        ui.colored_label(color, entry.level.label());
                    });
                    row.col(|ui| { ui.label(&entry.message); });
                });
            }
        });
}
