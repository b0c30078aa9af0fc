//! Canvas Core Module
//!
//! Platform-independent canvas state and drawing algorithms. This module contains:
//! - Cell representation with glyph and color
//! - The fixed-size grid and its bounds rules
//! - Bresenham line rasterization
//! - Breadth-first flood fill
//! - Brush state
//! - Deterministic snapshot generation
//!
//! Nothing here performs I/O; the core is fully deterministic.

mod brush;
mod cell;
mod fill;
mod grid;
mod raster;
mod snapshot;

pub use brush::{Brush, DEFAULT_GLYPH};
pub use cell::{is_printable_glyph, Cell, Color, EMPTY_GLYPH};
pub use fill::flood_fill;
pub use grid::{Grid, Row, MAX_AREA};
pub use raster::{line, Line, Point};
pub use snapshot::{CellSnapshot, Snapshot};
