//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use gol_core::{Topology, config};

use crate::logging;

mod commands;

#[derive(Parser)]
#[command(name = "gol")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
#[command(about = "Conway's Game of Life on text grids")]
#[command(
    long_about = "Reads a grid of '*' (alive) and '.' (dead) cells, one row per line, \
                  runs it for a number of generations and writes the result."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run_args: RunArgs,
}

/// Arguments for the default simulation mode.
///
/// Value flags may be repeated as long as every occurrence agrees; switches
/// may be repeated freely.
#[derive(clap::Args, Debug, Clone, Default)]
struct RunArgs {
    /// Read the grid from this file (default: stdin)
    #[arg(short, long, value_name = "PATH", action = ArgAction::Append)]
    input: Vec<PathBuf>,

    /// Write the evolved grid to this file (default: stdout)
    #[arg(short, long, value_name = "PATH", action = ArgAction::Append)]
    output: Vec<PathBuf>,

    /// Number of generations to run (default: from config, else 5)
    #[arg(short, long, value_name = "N", action = ArgAction::Append)]
    generations: Vec<u32>,

    /// Print live-cell statistics after the grid
    #[arg(short, long, action = ArgAction::Count)]
    stats: u8,

    /// Wrap edges around (toroidal topology)
    #[arg(short, long, action = ArgAction::Count)]
    torus: u8,
}

impl RunArgs {
    fn resolve(self, config: &config::Config) -> Result<commands::run::RunOptions> {
        Ok(commands::run::RunOptions {
            input: single(self.input, "--input")?,
            output: single(self.output, "--output")?,
            generations: single(self.generations, "--generations")?
                .unwrap_or(config.generations),
            topology: if self.torus > 0 {
                Topology::Toroidal
            } else {
                config.topology
            },
            stats: self.stats > 0 || config.stats,
        })
    }
}

/// Collapses a repeated flag to its one value; occurrences must all agree.
fn single<T: PartialEq>(values: Vec<T>, flag: &str) -> Result<Option<T>> {
    let mut values = values.into_iter();
    let Some(first) = values.next() else {
        return Ok(None);
    };
    if values.any(|value| value != first) {
        bail!("conflicting values for {flag}");
    }
    Ok(Some(first))
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    logging::init();

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let Cli { command, run_args } = cli;

    // default to simulation mode
    let Some(command) = command else {
        let config = config::Config::load().context("load config")?;
        return commands::run::run(&run_args.resolve(&config)?);
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
        },
    }
}
