//! Core Game of Life library (grid model, loader, evolution, stats, config).
//!
//! - `row`: bounded single-row assembly while parsing
//! - `loader`: text stream to `Grid`
//! - `universe`: `Grid` data model and the `Universe` lifecycle holder
//! - `rule`: Conway transition rule for bounded and toroidal topologies
//! - `evolve`: in-place generation stepping
//! - `stats`: live-cell percentages
//! - `serialize`: `Grid` back to text

pub mod config;
pub mod error;
pub mod evolve;
pub mod loader;
pub mod row;
pub mod rule;
pub mod serialize;
pub mod stats;
pub mod universe;

pub use error::{InvalidFileCause, LifeError, Result};
pub use rule::Topology;
pub use stats::Statistics;
pub use universe::{Grid, Universe};
