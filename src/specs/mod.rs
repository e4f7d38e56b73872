// src/specs/mod.rs
//! # Scraping “specs”
//!
//! Page-specific knowledge of *where the data lives in the HTML*. A spec takes
//! a [`crate::core::Document`] and returns plain data; it never decides what
//! to show, copy, or log beyond reporting missing fields to a
//! [`crate::diagnostics::Diagnostics`] sink.
//!
//! ## Conventions
//! - Missing labels, tabs, and attributes degrade to empty/absent values.
//! - Only document failures propagate as errors; the action layer catches them.
//! - Specs are tested offline against saved pages under `tests/fixtures/`.
pub mod album;
