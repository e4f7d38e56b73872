// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub feedback: FeedbackOptions,
    pub log_file: PathBuf,
    pub settings_file: PathBuf,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            feedback: FeedbackOptions::default(),
            log_file: PathBuf::from(STORE_DIR).join(LOG_FILE),
            settings_file: PathBuf::from(STORE_DIR).join(SETTINGS_FILE),
        }
    }
}

/// Timings for overlay/tooltip fades.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeedbackOptions {
    /// Opacity transition length; also the delay before a faded widget is removed.
    pub fade: Duration,
    /// How long a tooltip stays fully visible before fading out.
    pub tooltip_hold: Duration,
}

impl Default for FeedbackOptions {
    fn default() -> Self {
        Self {
            fade: Duration::from_millis(FADE_MS),
            tooltip_hold: Duration::from_millis(TOOLTIP_HOLD_MS),
        }
    }
}
