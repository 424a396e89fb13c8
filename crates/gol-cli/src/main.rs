mod cli;
mod logging;

use gol_core::LifeError;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{e:#}"); // pretty anyhow chain
        let code = e
            .downcast_ref::<LifeError>()
            .map_or(1, LifeError::exit_code);
        std::process::exit(code);
    }
}
