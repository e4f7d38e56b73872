// src/core/mod.rs

pub mod document;
pub mod sanitize;

pub use document::{Document, ElementSnapshot, HtmlDocument};
