//! Row assembly for the grid loader.
//!
//! Accepts bytes one at a time and hands back a finished row on every line
//! break. Rows are capped at [`MAX_ROW_WIDTH`] cells.

use crate::error::{LifeError, Result};

/// Maximum number of cells in one row.
pub const MAX_ROW_WIDTH: usize = 512;

pub const ALIVE: u8 = b'*';
pub const DEAD: u8 = b'.';
pub const TERMINATOR: u8 = b'\n';

/// Accumulates the cells of the row currently being read.
#[derive(Debug)]
pub struct RowAssembler {
    cells: Vec<bool>,
    /// 1-based index of the row being assembled.
    row: usize,
}

impl Default for RowAssembler {
    fn default() -> Self {
        Self::new()
    }
}

impl RowAssembler {
    pub fn new() -> Self {
        Self {
            cells: Vec::new(),
            row: 1,
        }
    }

    /// Feeds one byte.
    ///
    /// Returns `Some(row)` when `byte` terminates a row; the assembler is then
    /// ready for the next one.
    ///
    /// # Errors
    /// `InvalidCharacter` for bytes other than `*`, `.` or `\n`;
    /// `RowTooLong` once a row would exceed [`MAX_ROW_WIDTH`].
    pub fn push(&mut self, byte: u8) -> Result<Option<Vec<bool>>> {
        match byte {
            TERMINATOR => {
                self.row += 1;
                Ok(Some(std::mem::take(&mut self.cells)))
            }
            ALIVE | DEAD => {
                if self.cells.len() == MAX_ROW_WIDTH {
                    return Err(LifeError::RowTooLong {
                        row: self.row,
                        limit: MAX_ROW_WIDTH,
                    });
                }
                self.cells.push(byte == ALIVE);
                Ok(None)
            }
            other => Err(LifeError::InvalidCharacter {
                byte: other,
                row: self.row,
                column: self.cells.len() + 1,
            }),
        }
    }

    /// True when no cell of an unterminated row is pending.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// 1-based index of the row currently being assembled.
    pub fn row(&self) -> usize {
        self.row
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(assembler: &mut RowAssembler, text: &str) -> Result<Vec<Vec<bool>>> {
        let mut rows = Vec::new();
        for byte in text.bytes() {
            if let Some(row) = assembler.push(byte)? {
                rows.push(row);
            }
        }
        Ok(rows)
    }

    #[test]
    fn test_yields_row_on_terminator() {
        let mut assembler = RowAssembler::new();
        let rows = feed(&mut assembler, "*.*\n").unwrap();
        assert_eq!(rows, vec![vec![true, false, true]]);
        assert!(assembler.is_empty());
        assert_eq!(assembler.row(), 2);
    }

    #[test]
    fn test_partial_row_is_pending() {
        let mut assembler = RowAssembler::new();
        let rows = feed(&mut assembler, "..\n.*").unwrap();
        assert_eq!(rows.len(), 1);
        assert!(!assembler.is_empty());
    }

    #[test]
    fn test_empty_row() {
        let mut assembler = RowAssembler::new();
        let rows = feed(&mut assembler, "\n").unwrap();
        assert_eq!(rows, vec![Vec::<bool>::new()]);
    }

    #[test]
    fn test_rejects_unknown_byte() {
        let mut assembler = RowAssembler::new();
        let err = feed(&mut assembler, "..\n.#").unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidCharacter {
                byte: b'#',
                row: 2,
                column: 2
            }
        ));
    }

    #[test]
    fn test_carriage_return_is_invalid() {
        let mut assembler = RowAssembler::new();
        let err = feed(&mut assembler, "*.\r\n").unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidCharacter {
                byte: b'\r',
                ..
            }
        ));
    }

    #[test]
    fn test_non_ascii_is_reported_by_first_byte() {
        let mut assembler = RowAssembler::new();
        let err = feed(&mut assembler, "*é\n").unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidCharacter {
                byte: 0xC3,
                row: 1,
                column: 2
            }
        ));
        assert!(err.to_string().contains("invalid character 0xC3"));
    }

    #[test]
    fn test_row_at_capacity_is_accepted() {
        let mut assembler = RowAssembler::new();
        let mut text = ".".repeat(MAX_ROW_WIDTH);
        text.push('\n');
        let rows = feed(&mut assembler, &text).unwrap();
        assert_eq!(rows[0].len(), MAX_ROW_WIDTH);
    }

    #[test]
    fn test_row_over_capacity_fails() {
        let mut assembler = RowAssembler::new();
        let text = "*".repeat(MAX_ROW_WIDTH + 1);
        let err = feed(&mut assembler, &text).unwrap_err();
        assert!(matches!(
            err,
            LifeError::RowTooLong {
                row: 1,
                limit: MAX_ROW_WIDTH
            }
        ));
    }
}
