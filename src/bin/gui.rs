// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use log::LevelFilter;
use vgmdb_info::{
    config::{app_state::AppState, settings::Settings},
    gui,
    log as file_log,
};

fn main() {
    let mut state = AppState::default();

    if let Err(e) = file_log::init(&state.options.log_file, LevelFilter::Debug) {
        eprintln!("Logging disabled: {e}");
    }

    Settings::load(&state.options.settings_file).apply(&mut state);

    // A page path on the command line wins over the settings file.
    if let Some(page) = std::env::args().nth(1) {
        state.gui.page_path_text = page;
    }

    let options = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("VGMdb Info Generator")
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
