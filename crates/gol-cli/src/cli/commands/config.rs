//! Config command handlers.

use anyhow::{Context, Result};
use gol_core::config;

pub fn path() {
    println!("{}", config::paths::config_path().display());
}

pub fn init() -> Result<()> {
    let written = config::Config::init(&config::paths::config_path()).context("init config")?;
    println!("Created config at {}", written.display());
    Ok(())
}
