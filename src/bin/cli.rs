// src/bin/cli.rs
use color_eyre::eyre::Result;
use log::LevelFilter;
use vgmdb_info::{cli, config::options::AppOptions, log as file_log};

fn main() -> Result<()> {
    color_eyre::install()?;

    let options = AppOptions::default();
    if let Err(e) = file_log::init(&options.log_file, LevelFilter::Info) {
        eprintln!("Logging disabled: {e}");
    }

    cli::run()?;
    Ok(())
}
