// src/gui/app.rs
use std::{error::Error, path::PathBuf};

use eframe::egui;

use crate::{
    config::app_state::AppState,
    core::HtmlDocument,
    diagnostics::DiagnosticsLog,
    feedback::{FeedbackLayer, SystemClock, TimerQueue},
    specs::album,
};

use super::components;

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "VGMdb Info Generator",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // currently loaded album page
    pub document: Option<HtmlDocument>,
    pub album_title: String,
    pub has_album_tools: bool,

    pub status: String,
    pub diagnostics: DiagnosticsLog,

    // overlay / tooltip / alert and their fade timers
    pub feedback: FeedbackLayer,
    pub timers: TimerQueue<SystemClock>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let feedback = FeedbackLayer::new(state.options.feedback);
        let mut app = Self {
            state,
            document: None,
            album_title: s!(),
            has_album_tools: false,
            status: s!("No page loaded"),
            diagnostics: DiagnosticsLog::new(),
            feedback,
            timers: TimerQueue::new(SystemClock::new()),
        };

        if !app.state.gui.page_path_text.trim().is_empty() {
            app.load_page();
        }
        logf!("Init: page={:?}", app.state.gui.page_path_text);
        app
    }

    /// (Re)read the page named in the path field.
    pub fn load_page(&mut self) {
        let path = PathBuf::from(self.state.gui.page_path_text.trim());

        let doc = match HtmlDocument::from_path(&path) {
            Ok(doc) => doc,
            Err(e) => {
                loge!("Page: cannot read {}: {}", path.display(), e);
                self.status = format!("Cannot read {}: {}", path.display(), e);
                return;
            }
        };

        // Only a broken selector constant could fail here; treat as "no tools".
        self.album_title = album::album_title(&doc).unwrap_or_else(|e| {
            loge!("Page: title lookup failed: {e}");
            s!()
        });
        self.has_album_tools = album::has_album_tools(&doc).unwrap_or(false);
        self.document = Some(doc);

        self.status = if self.has_album_tools {
            format!("Loaded {}", path.display())
        } else {
            format!("Loaded {} (not an album page)", path.display())
        };
        logf!("Page: {} (album tools: {})", path.display(), self.has_album_tools);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let due = self.timers.begin_frame();
        self.feedback.run_due(&mut self.timers, due);

        egui::TopBottomPanel::top("page").show(ctx, |ui| {
            components::page_bar::draw(ui, self);
        });

        if self.state.gui.show_log {
            egui::TopBottomPanel::bottom("log")
                .resizable(true)
                .default_height(140.0)
                .show(ctx, |ui| {
                    components::log_panel::draw(ui, self);
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            components::album_tools::draw(ui, self);
        });

        components::feedback::draw(ctx, self);

        if let Some(wait) = self.timers.next_wakeup() {
            ctx.request_repaint_after(wait);
        }
    }
}
