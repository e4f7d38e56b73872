// src/gui/mod.rs
pub mod app;
pub mod clipboard;
pub mod components;

pub use app::run;
