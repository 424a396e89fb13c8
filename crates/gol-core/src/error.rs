//! Error taxonomy for loading, evolving and writing universes.

use std::io;

use thiserror::Error;

/// Why a stream was rejected as an invalid file.
#[derive(Debug, Error)]
pub enum InvalidFileCause {
    /// The stream could not be opened, read or written.
    #[error("{0}")]
    Io(io::Error),
    /// Input ended in the middle of a row.
    #[error("last row is not terminated by a line break")]
    MissingTerminator,
}

/// All kinds of errors in this crate.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Stream unreadable/unwritable or malformed terminator.
    #[error("invalid file: {0}")]
    InvalidFile(InvalidFileCause),
    /// A row's width disagrees with the first row.
    #[error("invalid row length on row {row} ({found}, expected {expected})")]
    RowLengthMismatch {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A row exceeds the per-row capacity.
    #[error("row {row} is longer than {limit} cells")]
    RowTooLong { row: usize, limit: usize },
    /// A byte outside `*`, `.` and the line break.
    #[error(
        "invalid character {} at row {row}, column {column} (expected '*' or '.')",
        describe_byte(.byte)
    )]
    InvalidCharacter {
        byte: u8,
        row: usize,
        column: usize,
    },
    /// The grid could not be allocated.
    #[error("not enough memory to hold the grid")]
    NoMemory,
    /// The universe was never loaded or has been released.
    #[error("universe is not loaded")]
    InvalidUniverse,
}

/// ASCII bytes print as a quoted char, anything else as hex.
fn describe_byte(byte: &u8) -> String {
    if byte.is_ascii() {
        format!("{:?}", char::from(*byte))
    } else {
        format!("0x{byte:02X}")
    }
}

impl LifeError {
    pub(crate) fn io(err: io::Error) -> Self {
        LifeError::InvalidFile(InvalidFileCause::Io(err))
    }

    /// Returns a distinct process exit code for this error kind.
    pub fn exit_code(&self) -> i32 {
        match self {
            LifeError::InvalidFile(_) => 2,
            LifeError::RowLengthMismatch { .. } => 3,
            LifeError::RowTooLong { .. } => 4,
            LifeError::InvalidCharacter { .. } => 5,
            LifeError::NoMemory => 6,
            LifeError::InvalidUniverse => 7,
        }
    }
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, LifeError>;
