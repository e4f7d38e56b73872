// src/format/mod.rs
//
// Pure text output for the two actions. No I/O, no page access.

pub mod date;
pub mod filename;
pub mod info;

pub use date::{format_date, format_date_for_clipboard, RawDate};
pub use filename::render_filename;
pub use info::render_info;
