//! Universe data model.
//!
//! A [`Grid`] is a loaded universe: dimensions, packed cells and the running
//! counters. It cannot exist in a half-loaded state. [`Universe`] is the
//! lifecycle holder the CLI owns; it is either empty or holds one `Grid`, and
//! every operation re-checks that at call time.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::{LifeError, Result};
use crate::loader;
use crate::row::MAX_ROW_WIDTH;
use crate::rule::Topology;
use crate::stats::Statistics;

/// Bit 0 of a cell: alive in the current generation.
pub(crate) const CURRENT: u8 = 0b01;
/// Bit 1 of a cell: alive in the generation being computed.
pub(crate) const NEXT: u8 = 0b10;

/// A loaded universe.
///
/// Cells are stored row-major (`index = row * width + column`). Outside of
/// an evolution pass only bit 0 of each cell is ever set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    pub(crate) width: usize,
    pub(crate) height: usize,
    pub(crate) cells: Vec<u8>,
    /// Generations represented in `alive_count`; the loaded one counts.
    pub(crate) generation_count: u64,
    /// Sum of live cells over every generation so far.
    pub(crate) alive_count: u64,
}

impl Grid {
    /// Builds a grid from rows of cell states, top to bottom.
    ///
    /// Each row is dropped as soon as it is copied into the flat grid.
    ///
    /// # Errors
    /// - `RowTooLong` if a row exceeds [`MAX_ROW_WIDTH`]
    /// - `RowLengthMismatch` if a row differs in width from the first
    /// - `NoMemory` if the flat grid cannot be allocated
    pub fn from_rows(rows: Vec<Vec<bool>>) -> Result<Self> {
        let width = rows.first().map_or(0, Vec::len);
        for (index, row) in rows.iter().enumerate() {
            if row.len() > MAX_ROW_WIDTH {
                return Err(LifeError::RowTooLong {
                    row: index + 1,
                    limit: MAX_ROW_WIDTH,
                });
            }
            if row.len() != width {
                return Err(LifeError::RowLengthMismatch {
                    row: index + 1,
                    expected: width,
                    found: row.len(),
                });
            }
        }

        let height = rows.len();
        let mut cells = Vec::new();
        cells.try_reserve_exact(width * height).map_err(|err| {
            tracing::debug!(%err, "grid allocation failed");
            LifeError::NoMemory
        })?;
        for row in rows {
            cells.extend(row.into_iter().map(|alive| if alive { CURRENT } else { 0 }));
        }

        Ok(Self::from_cells(width, height, cells))
    }

    /// Wraps already-flattened cells. `cells.len()` must equal `width * height`.
    pub(crate) fn from_cells(width: usize, height: usize, cells: Vec<u8>) -> Self {
        debug_assert_eq!(cells.len(), width * height);
        let mut grid = Self {
            width,
            height,
            cells,
            generation_count: 1,
            alive_count: 0,
        };
        grid.alive_count = grid.live_cells() as u64;
        grid
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn generation_count(&self) -> u64 {
        self.generation_count
    }

    pub fn alive_count(&self) -> u64 {
        self.alive_count
    }

    /// Number of cells (`width * height`).
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    pub(crate) fn index(&self, column: usize, row: usize) -> usize {
        row * self.width + column
    }

    /// Current state of an in-bounds cell.
    ///
    /// # Panics
    /// Panics if `(column, row)` is outside the grid.
    pub fn is_alive(&self, column: usize, row: usize) -> bool {
        assert!(
            column < self.width && row < self.height,
            "cell ({column}, {row}) outside {}x{} grid",
            self.width,
            self.height
        );
        self.cells[self.index(column, row)] & CURRENT != 0
    }

    /// Current state of a cell, or `None` when out of bounds.
    pub fn get(&self, column: usize, row: usize) -> Option<bool> {
        (column < self.width && row < self.height).then(|| self.is_alive(column, row))
    }

    /// Number of cells alive right now.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell & CURRENT != 0).count()
    }
}

/// Holds at most one loaded [`Grid`].
#[derive(Debug, Default)]
pub struct Universe {
    grid: Option<Grid>,
}

impl Universe {
    /// Creates an empty, not yet loaded universe.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a grid from `reader`, replacing any grid already held.
    ///
    /// The previous grid is only dropped once the new one parsed cleanly; on
    /// error it stays loaded and untouched.
    ///
    /// # Errors
    /// Any loader error (see [`loader::load`]).
    pub fn load<R: Read>(&mut self, reader: R) -> Result<()> {
        let grid = loader::load(reader)?;
        self.install(grid);
        Ok(())
    }

    /// Loads a grid from the file at `path`.
    ///
    /// # Errors
    /// `InvalidFile` if the file cannot be opened, otherwise as [`Universe::load`].
    pub fn load_path(&mut self, path: &Path) -> Result<()> {
        let grid = loader::load_path(path)?;
        self.install(grid);
        Ok(())
    }

    fn install(&mut self, grid: Grid) {
        if self.grid.replace(grid).is_some() {
            tracing::debug!("released previously loaded grid");
        }
    }

    /// Drops the held grid; later operations fail with `InvalidUniverse`.
    pub fn release(&mut self) {
        self.grid = None;
    }

    pub fn is_loaded(&self) -> bool {
        self.grid.is_some()
    }

    /// # Errors
    /// `InvalidUniverse` when nothing is loaded.
    pub fn grid(&self) -> Result<&Grid> {
        self.grid.as_ref().ok_or(LifeError::InvalidUniverse)
    }

    fn grid_mut(&mut self) -> Result<&mut Grid> {
        self.grid.as_mut().ok_or(LifeError::InvalidUniverse)
    }

    /// Current state of a cell; cells outside the grid read as dead.
    ///
    /// # Errors
    /// `InvalidUniverse` when nothing is loaded.
    pub fn is_alive(&self, column: usize, row: usize) -> Result<bool> {
        Ok(self.grid()?.get(column, row).unwrap_or(false))
    }

    /// Reads one cell; `Ok(None)` when out of bounds.
    ///
    /// # Errors
    /// `InvalidUniverse` when nothing is loaded.
    pub fn cell(&self, column: usize, row: usize) -> Result<Option<bool>> {
        Ok(self.grid()?.get(column, row))
    }

    /// Advances one generation.
    ///
    /// # Errors
    /// `InvalidUniverse` when nothing is loaded.
    pub fn evolve(&mut self, topology: Topology) -> Result<()> {
        self.grid_mut()?.evolve(topology);
        Ok(())
    }

    /// Advances `generations` generations.
    ///
    /// # Errors
    /// `InvalidUniverse` when nothing is loaded.
    pub fn evolve_n(&mut self, generations: u32, topology: Topology) -> Result<()> {
        self.grid_mut()?.evolve_n(generations, topology);
        Ok(())
    }

    /// Writes the current generation as text.
    ///
    /// # Errors
    /// `InvalidUniverse` when nothing is loaded, `InvalidFile` on write failure.
    pub fn write<W: Write>(&self, sink: W) -> Result<()> {
        self.grid()?.write(sink)
    }

    /// # Errors
    /// `InvalidUniverse` when nothing is loaded.
    pub fn report(&self) -> Result<Statistics> {
        Ok(self.grid()?.report())
    }
}
