// src/lib.rs

#[macro_use]
mod macros;
#[macro_use]
pub mod log;

pub mod actions;
pub mod cli;
pub mod config;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod feedback;
pub mod format;
pub mod gui;
pub mod specs;
