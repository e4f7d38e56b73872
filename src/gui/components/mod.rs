// src/gui/components/mod.rs
pub mod album_tools;
pub mod feedback;
pub mod log_panel;
pub mod page_bar;
