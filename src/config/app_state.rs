// src/config/app_state.rs
use super::options::AppOptions;

#[derive(Clone, Debug)]
pub struct GuiState {
    /// Contents of the page path field
    pub page_path_text: String,

    pub window_w: u32,
    pub window_h: u32,

    /// Diagnostics panel expanded
    pub show_log: bool,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            page_path_text: s!(),
            window_w: 720,
            window_h: 480,
            show_log: false,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
