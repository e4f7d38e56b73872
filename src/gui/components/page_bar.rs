// src/gui/components/page_bar.rs
//
// Path field + Load, log toggle, status line.

use eframe::egui;
use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let mut load = false;

    ui.horizontal(|ui| {
        ui.label("Page:");
        let edit = ui.add(
            egui::TextEdit::singleline(&mut app.state.gui.page_path_text)
                .hint_text("saved album page (.html)")
                .desired_width(360.0)
                .font(egui::TextStyle::Monospace),
        );
        if edit.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            load = true;
        }
        if ui.button("Load").clicked() {
            load = true;
        }

        let before = app.state.gui.show_log;
        ui.toggle_value(&mut app.state.gui.show_log, "Log");
        if app.state.gui.show_log != before {
            logd!("UI: show_log → {}", app.state.gui.show_log);
        }

        ui.label(&app.status);
    });

    if load {
        app.load_page();
    }
}
