// src/error.rs
use std::io;

use thiserror::Error;

/// Failures while querying a page snapshot.
#[derive(Debug, Error)]
pub enum PageError {
    #[error("invalid selector `{selector}`: {reason}")]
    Selector { selector: String, reason: String },

    #[error("page unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateError {
    #[error("expected `Mon D, YYYY`, got {0:?}")]
    Malformed(String),

    #[error("unknown month abbreviation {0:?}")]
    UnknownMonth(String),
}

#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),
}

/// Anything that aborts the Info or Format pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Page(#[from] PageError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("cannot read {path}: {source}")]
    Read { path: String, #[source] source: io::Error },

    #[error(transparent)]
    Pipeline(#[from] PipelineError),
}
