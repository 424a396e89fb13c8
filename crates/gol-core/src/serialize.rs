//! Grid serializer: writes the current generation back as text.

use std::fmt;
use std::io::{BufWriter, Write};

use crate::error::{LifeError, Result};
use crate::row::{ALIVE, DEAD, TERMINATOR};
use crate::universe::{CURRENT, Grid};

impl Grid {
    /// Writes `height` lines of `width` cells, each line terminated.
    ///
    /// # Errors
    /// `InvalidFile` if the sink fails.
    pub fn write<W: Write>(&self, sink: W) -> Result<()> {
        let mut out = BufWriter::new(sink);
        let mut line = Vec::with_capacity(self.width + 1);
        for row in self.rows() {
            line.clear();
            line.extend(row.iter().map(|&cell| cell_byte(cell)));
            line.push(TERMINATOR);
            out.write_all(&line).map_err(LifeError::io)?;
        }
        out.flush().map_err(LifeError::io)
    }

    fn rows(&self) -> impl Iterator<Item = &[u8]> {
        (0..self.height).map(move |row| &self.cells[row * self.width..(row + 1) * self.width])
    }
}

fn cell_byte(cell: u8) -> u8 {
    if cell & CURRENT != 0 { ALIVE } else { DEAD }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for &cell in row {
                write!(f, "{}", char::from(cell_byte(cell)))?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;
    use crate::error::InvalidFileCause;

    fn round_trip(text: &str) -> String {
        let grid: Grid = text.parse().unwrap();
        let mut out = Vec::new();
        grid.write(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_round_trip_reproduces_input() {
        for text in [
            "*\n",
            ".\n",
            "*.*.\n.*.*\n",
            "....\n.**.\n.**.\n....\n",
            ".*.\n..*\n***\n...\n...\n",
        ] {
            assert_eq!(round_trip(text), text);
        }
    }

    #[test]
    fn test_round_trip_wide_row() {
        let text = format!("{}\n", "*.".repeat(256)).repeat(3);
        assert_eq!(round_trip(&text), text);
    }

    #[test]
    fn test_empty_rows_round_trip() {
        assert_eq!(round_trip("\n\n"), "\n\n");
        assert_eq!(round_trip(""), "");
    }

    #[test]
    fn test_display_matches_write() {
        let text = "*..\n.*.\n";
        let grid: Grid = text.parse().unwrap();
        assert_eq!(grid.to_string(), text);
    }

    #[test]
    fn test_write_does_not_touch_counters() {
        let grid: Grid = "**\n..\n".parse().unwrap();
        let before = grid.clone();
        grid.write(io::sink()).unwrap();
        assert_eq!(grid, before);
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("disk full"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_error_is_invalid_file() {
        let grid: Grid = "*\n".parse().unwrap();
        let err = grid.write(FailingWriter).unwrap_err();
        assert!(matches!(
            err,
            LifeError::InvalidFile(InvalidFileCause::Io(_))
        ));
    }
}
