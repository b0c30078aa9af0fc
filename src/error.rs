//! Error types for canvas operations

use std::io;
use thiserror::Error;

/// Canvas error type
#[derive(Error, Debug)]
pub enum Error {
    /// Coordinate outside the grid
    #[error("Coordinates ({x}, {y}) are out of bounds (canvas is {width} x {height})")]
    OutOfBounds {
        x: i32,
        y: i32,
        width: usize,
        height: usize,
    },

    /// Grid constructed with a zero side
    #[error("Invalid canvas dimensions {width} x {height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Unknown color name
    #[error("Unknown color '{0}'")]
    InvalidColorName(String),

    /// Brush input that is not exactly one printable character
    #[error("Invalid brush '{0}': expected exactly one printable character")]
    InvalidGlyph(String),

    /// Canvas file header is not `CANVAS <width> <height>`
    #[error("Malformed canvas header: {0}")]
    MalformedHeader(String),

    /// Canvas file dimensions differ from the live grid
    #[error("Canvas file is {} x {}, expected {} x {}", .found.0, .found.1, .expected.0, .expected.1)]
    DimensionMismatch {
        expected: (usize, usize),
        /// As written in the header, which may be negative
        found: (i64, i64),
    },

    /// Canvas file ended before all rows were read
    #[error("Canvas file truncated: expected {expected_rows} rows, found {found_rows}")]
    TruncatedData {
        expected_rows: usize,
        found_rows: usize,
    },

    /// Command line with the wrong shape
    #[error("{0}")]
    InvalidCommand(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for canvas operations
pub type Result<T> = std::result::Result<T, Error>;
