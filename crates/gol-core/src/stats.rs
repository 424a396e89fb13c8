//! Live-cell statistics.

use std::fmt;

use crate::universe::Grid;

/// Percentages of live cells, now and averaged over every generation seen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Statistics {
    pub current_alive_percent: f64,
    pub average_alive_percent: f64,
}

impl Grid {
    /// Computes the statistics for the current generation.
    ///
    /// Both figures are 0 on an empty grid.
    pub fn report(&self) -> Statistics {
        let area = self.area() as f64;
        if self.area() == 0 {
            return Statistics {
                current_alive_percent: 0.0,
                average_alive_percent: 0.0,
            };
        }

        let current_alive_percent = 100.0 * self.live_cells() as f64 / area;
        let average_alive_percent = if self.generation_count == 0 {
            current_alive_percent
        } else {
            100.0 * self.alive_count as f64 / (area * self.generation_count as f64)
        };

        Statistics {
            current_alive_percent,
            average_alive_percent,
        }
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{:.3}% of cells currently alive",
            self.current_alive_percent
        )?;
        write!(
            f,
            "{:.3}% of cells alive on average",
            self.average_alive_percent
        )
    }
}
