// src/config/mod.rs
pub mod app_state;
pub mod consts;
pub mod options;
pub mod settings;
