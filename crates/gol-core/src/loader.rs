//! Grid loader: reconstructs a [`Grid`] of unknown size from a text stream.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;

use crate::error::{InvalidFileCause, LifeError, Result};
use crate::row::RowAssembler;
use crate::universe::Grid;

/// Reads a whole grid from `reader`.
///
/// The first row fixes the width; every later row must match it. Input must
/// end right after a line break. An empty stream is a 0x0 grid.
///
/// # Errors
/// - `InvalidFile` if reading fails or the last row is unterminated
/// - `InvalidCharacter`, `RowTooLong` from row assembly
/// - `RowLengthMismatch` if a row differs in width from the first
/// - `NoMemory` if the flat grid cannot be allocated
pub fn load<R: Read>(reader: R) -> Result<Grid> {
    let mut assembler = RowAssembler::new();
    let mut rows: Vec<Vec<bool>> = Vec::new();
    let mut width = None;

    for byte in BufReader::new(reader).bytes() {
        let byte = byte.map_err(LifeError::io)?;
        let Some(row) = assembler.push(byte)? else {
            continue;
        };
        let expected = *width.get_or_insert(row.len());
        if row.len() != expected {
            return Err(LifeError::RowLengthMismatch {
                row: rows.len() + 1,
                expected,
                found: row.len(),
            });
        }
        rows.push(row);
    }

    if !assembler.is_empty() {
        return Err(LifeError::InvalidFile(InvalidFileCause::MissingTerminator));
    }

    tracing::debug!(width = width.unwrap_or(0), height = rows.len(), "parsed grid");
    Grid::from_rows(rows)
}

/// Opens `path` and loads a grid from it.
///
/// # Errors
/// `InvalidFile` if the file cannot be opened, otherwise as [`load`].
pub fn load_path(path: &Path) -> Result<Grid> {
    let file = File::open(path).map_err(LifeError::io)?;
    tracing::debug!(path = %path.display(), "loading grid");
    load(file)
}

impl FromStr for Grid {
    type Err = LifeError;

    fn from_str(s: &str) -> Result<Self> {
        load(s.as_bytes())
    }
}
