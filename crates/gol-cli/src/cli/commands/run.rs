//! Simulation command handler: load, evolve, write, report.

use std::fs::File;
use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use gol_core::{InvalidFileCause, LifeError, Topology, Universe};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunOptions {
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub generations: u32,
    pub topology: Topology,
    pub stats: bool,
}

pub fn run(options: &RunOptions) -> Result<()> {
    let mut universe = Universe::new();

    match &options.input {
        Some(path) => universe
            .load_path(path)
            .with_context(|| format!("load grid from {}", path.display()))?,
        None => universe
            .load(io::stdin().lock())
            .context("load grid from stdin")?,
    }

    if let Ok(grid) = universe.grid() {
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            generations = options.generations,
            topology = ?options.topology,
            "running"
        );
    }

    universe
        .evolve_n(options.generations, options.topology)
        .context("evolve grid")?;

    match &options.output {
        Some(path) => {
            let file = File::create(path)
                .map_err(|err| LifeError::InvalidFile(InvalidFileCause::Io(err)))
                .with_context(|| format!("create {}", path.display()))?;
            universe
                .write(file)
                .with_context(|| format!("write grid to {}", path.display()))?;
        }
        None => universe
            .write(io::stdout().lock())
            .context("write grid to stdout")?,
    }

    if options.stats {
        let stats = universe.report().context("report statistics")?;
        println!("{stats}");
    }

    Ok(())
}
