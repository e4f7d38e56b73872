// src/cli.rs
//
// Headless front: run one action against a saved album page and print it.
//   cli info  page.html    → BBcode block
//   cli format page.html   → [YYMMDD]Title
use std::path::{Path, PathBuf};

use crate::{
    actions,
    core::HtmlDocument,
    diagnostics::LogDiagnostics,
    error::CliError,
};

const HELP: &str = "\
Usage: cli <info|format> <album-page.html>

  info     print the BBcode info block
  format   print the [YYMMDD]Title filename string
  -h, --help";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Info(PathBuf),
    Format(PathBuf),
    Help,
}

pub fn parse_args<I, S>(args: I) -> Result<Command, CliError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut action: Option<String> = None;
    let mut page: Option<PathBuf> = None;

    while let Some(a) = args.next() {
        match a.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            _ if a.starts_with('-') => return Err(CliError::Usage(format!("Unknown arg: {a}"))),
            _ if action.is_none() => action = Some(a),
            _ if page.is_none() => page = Some(PathBuf::from(a)),
            _ => return Err(CliError::Usage(format!("Unexpected arg: {a}"))),
        }
    }

    let action = action.ok_or_else(|| CliError::Usage(s!("Missing action (info|format)")))?;
    let page = page.ok_or_else(|| CliError::Usage(s!("Missing album page path")))?;
    match action.to_ascii_lowercase().as_str() {
        "info" => Ok(Command::Info(page)),
        "format" => Ok(Command::Format(page)),
        other => Err(CliError::Usage(format!("Unknown action: {other}"))),
    }
}

pub fn run() -> Result<(), CliError> {
    let command = parse_args(std::env::args().skip(1))?;
    let mut diag = LogDiagnostics;

    let out = match command {
        Command::Help => {
            eprintln!("{HELP}");
            return Ok(());
        }
        Command::Info(path) => actions::generate_info(&load(&path)?, &mut diag)?,
        Command::Format(path) => actions::generate_filename(&load(&path)?, &mut diag)?,
    };
    println!("{out}");
    Ok(())
}

fn load(path: &Path) -> Result<HtmlDocument, CliError> {
    HtmlDocument::from_path(path).map_err(|source| CliError::Read {
        path: path.display().to_string(),
        source,
    })
}
