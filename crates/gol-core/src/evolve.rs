//! In-place generation stepping.
//!
//! Each cell byte carries two states: bit 0 is the current generation, bit 1
//! the next one. A compute pass fills bit 1 for every cell while rule lookups
//! read bit 0 only; a commit pass then shifts bit 1 down over bit 0. No second
//! grid is allocated, and no lookup ever observes a half-updated generation.

use crate::rule::{self, Topology};
use crate::universe::{Grid, NEXT};

impl Grid {
    /// Advances the grid by one generation.
    pub fn evolve(&mut self, topology: Topology) {
        let mut born_or_kept = 0u64;
        for row in 0..self.height {
            for column in 0..self.width {
                if rule::will_be_alive(self, column, row, topology) {
                    let index = self.index(column, row);
                    self.cells[index] |= NEXT;
                    born_or_kept += 1;
                }
            }
        }

        for cell in &mut self.cells {
            *cell >>= 1;
        }

        self.alive_count += born_or_kept;
        self.generation_count += 1;
        tracing::trace!(
            generation = self.generation_count,
            alive = born_or_kept,
            "evolved"
        );
    }

    /// Advances the grid by `generations` generations.
    pub fn evolve_n(&mut self, generations: u32, topology: Topology) {
        for _ in 0..generations {
            self.evolve(topology);
        }
        tracing::debug!(generations, ?topology, "evolution finished");
    }
}
