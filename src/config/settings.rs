// src/config/settings.rs
//
// Optional `key=value` settings file. Read-only: the app never writes it.
//
//   # comment
//   fade_ms=300
//   tooltip_ms=800
//   page=saves/album_79.html
//   show_log=1

use std::{fs, path::Path, time::Duration};

use super::app_state::AppState;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Settings {
    pub fade_ms: Option<u64>,
    pub tooltip_ms: Option<u64>,
    pub page: Option<String>,
    pub show_log: Option<bool>,
}

impl Settings {
    /// Missing or unreadable file → defaults.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(text) => {
                logd!("Settings: loaded {}", path.display());
                Self::parse(&text)
            }
            Err(e) => {
                logd!("Settings: {} not loaded ({})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn parse(text: &str) -> Self {
        let mut cfg = Self::default();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') { continue; }
            let Some((key, val)) = line.split_once('=') else { continue };
            let val = val.trim();
            match key.trim() {
                "fade_ms" => cfg.fade_ms = val.parse().ok(),
                "tooltip_ms" => cfg.tooltip_ms = val.parse().ok(),
                "page" if !val.is_empty() => cfg.page = Some(s!(val)),
                "show_log" => cfg.show_log = Some(val == "1" || val.eq_ignore_ascii_case("true")),
                other => logd!("Settings: ignoring key {other:?}"),
            }
        }
        cfg
    }

    /// Overlay whatever was set onto the state; unset keys keep their defaults.
    pub fn apply(&self, state: &mut AppState) {
        let feedback = &mut state.options.feedback;
        if let Some(ms) = self.fade_ms {
            feedback.fade = Duration::from_millis(ms);
        }
        if let Some(ms) = self.tooltip_ms {
            feedback.tooltip_hold = Duration::from_millis(ms);
        }
        if let Some(page) = &self.page {
            state.gui.page_path_text = page.clone();
        }
        if let Some(show) = self.show_log {
            state.gui.show_log = show;
        }
    }
}
