//! Conway transition rule (B3/S23) over the Moore neighborhood.

use serde::Deserialize;

use crate::universe::{CURRENT, Grid};

/// How the grid edges behave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    /// Cells beyond the edge do not exist.
    #[default]
    Bounded,
    /// Edges wrap to the opposite edge.
    Toroidal,
}

/// Moore neighborhood offsets as `(dx, dy)`.
const MOORE: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Coordinates of the neighbors of `(column, row)` under `topology`.
///
/// Bounded grids omit coordinates that fall outside; toroidal grids always
/// yield eight (possibly repeated on grids narrower than three cells).
pub fn neighbors(
    grid: &Grid,
    column: usize,
    row: usize,
    topology: Topology,
) -> impl Iterator<Item = (usize, usize)> {
    let (width, height) = (grid.width() as isize, grid.height() as isize);
    let (column, row) = (column as isize, row as isize);
    MOORE.into_iter().filter_map(move |(dx, dy)| {
        let (x, y) = (column + dx, row + dy);
        match topology {
            Topology::Bounded => ((0..width).contains(&x) && (0..height).contains(&y))
                .then_some((x as usize, y as usize)),
            Topology::Toroidal => Some((
                x.rem_euclid(width) as usize,
                y.rem_euclid(height) as usize,
            )),
        }
    })
}

/// Counts live neighbors of `(column, row)` in the current generation.
pub fn live_neighbors(grid: &Grid, column: usize, row: usize, topology: Topology) -> u8 {
    neighbors(grid, column, row, topology)
        .filter(|&(x, y)| grid.cells[grid.index(x, y)] & CURRENT != 0)
        .count() as u8
}

/// Next state of `(column, row)`: birth on 3, survival on 2 or 3.
pub fn will_be_alive(grid: &Grid, column: usize, row: usize, topology: Topology) -> bool {
    let alive = grid.cells[grid.index(column, row)] & CURRENT != 0;
    matches!(
        (alive, live_neighbors(grid, column, row, topology)),
        (true, 2 | 3) | (false, 3)
    )
}
