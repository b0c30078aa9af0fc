//! Canvas Grid
//!
//! A fixed-size 2D grid of cells. Dimensions are set at construction and
//! never change; every coordinate inside them always holds a cell.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cell::{is_printable_glyph, Cell, Color};
use super::fill;
use super::raster::{self, Point};
use crate::error::{Error, Result};

/// Largest number of cells a grid may hold
pub const MAX_AREA: usize = 1 << 24;

/// A row of cells in the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    /// The cells in this row, left to right
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(cols: usize) -> Self {
        Self {
            cells: vec![Cell::default(); cols],
        }
    }

    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.clear();
        }
    }

    /// The glyphs of this row as a string
    pub fn text(&self) -> String {
        self.cells.iter().map(|c| c.glyph).collect()
    }
}

/// The canvas grid - a 2D array of cells
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    /// The rows in the grid, top to bottom
    rows: Vec<Row>,
    /// Number of columns
    width: usize,
    /// Number of rows
    height: usize,
}

impl Grid {
    /// Create a grid with every cell set to the default glyph and color.
    ///
    /// Both sides must be non-zero and fit in an `i32` coordinate, and the
    /// area may not exceed [`MAX_AREA`].
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let area = width.checked_mul(height).filter(|&area| area <= MAX_AREA);
        let fits_i32 = i32::try_from(width.max(height)).is_ok();
        if width == 0 || height == 0 || area.is_none() || !fits_i32 {
            return Err(Error::InvalidDimensions { width, height });
        }
        Ok(Self {
            rows: (0..height).map(|_| Row::new(width)).collect(),
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the grid
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        self.index(x, y).is_some()
    }

    fn index(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let col = usize::try_from(x).ok().filter(|&c| c < self.width)?;
        let row = usize::try_from(y).ok().filter(|&r| r < self.height)?;
        Some((col, row))
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<(usize, usize)> {
        self.index(x, y).ok_or(Error::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        })
    }

    /// Overwrite the cell at (x, y). The glyph must be a single printable
    /// column, see [`is_printable_glyph`].
    pub fn set(&mut self, x: i32, y: i32, glyph: char, color: Color) -> Result<()> {
        let (col, row) = self.checked_index(x, y)?;
        check_glyph(glyph)?;
        self.rows[row].cells[col] = Cell::new(glyph, color);
        Ok(())
    }

    /// Get the cell at (x, y)
    pub fn get(&self, x: i32, y: i32) -> Result<Cell> {
        let (col, row) = self.checked_index(x, y)?;
        Ok(self.rows[row].cells[col])
    }

    /// Recolor the cell at (x, y), keeping its glyph
    pub fn set_color(&mut self, x: i32, y: i32, color: Color) -> Result<()> {
        let (col, row) = self.checked_index(x, y)?;
        self.rows[row].cells[col].color = color;
        Ok(())
    }

    /// Reset every cell to the default glyph and color
    pub fn reset(&mut self) {
        for row in &mut self.rows {
            row.clear();
        }
    }

    /// The rows of the grid, top to bottom, for display
    pub fn render(&self) -> &[Row] {
        &self.rows
    }

    /// Get a reference to a row
    pub fn row(&self, row: usize) -> Option<&Row> {
        self.rows.get(row)
    }

    /// Draw a line between two points with the given glyph and color.
    ///
    /// Both endpoints and the glyph are validated before anything is
    /// written, so a rejected line leaves the grid untouched. Returns the
    /// number of cells drawn.
    pub fn draw_line(&mut self, start: Point, end: Point, glyph: char, color: Color) -> Result<usize> {
        self.checked_index(start.x, start.y)?;
        self.checked_index(end.x, end.y)?;
        check_glyph(glyph)?;

        let mut drawn = 0;
        for point in raster::line(start, end) {
            self.set(point.x, point.y, glyph, color)?;
            drawn += 1;
        }
        debug!(?start, ?end, drawn, "line drawn");
        Ok(drawn)
    }

    /// Flood fill the region around `seed` with `color`, returning the
    /// number of cells recolored
    pub fn fill(&mut self, seed: Point, color: Color) -> Result<usize> {
        fill::flood_fill(self, seed, color)
    }

    /// Replace every row at once. Callers guarantee the shape matches.
    pub(crate) fn replace_rows(&mut self, rows: Vec<Row>) {
        debug_assert_eq!(rows.len(), self.height);
        debug_assert!(rows.iter().all(|r| r.cells.len() == self.width));
        self.rows = rows;
    }

    /// Glyphs of the whole grid, one line per row
    pub fn to_text(&self) -> String {
        let mut result = String::with_capacity((self.width + 1) * self.height);
        for row in &self.rows {
            result.push_str(&row.text());
            result.push('\n');
        }
        result
    }
}

fn check_glyph(glyph: char) -> Result<()> {
    if is_printable_glyph(glyph) {
        Ok(())
    } else {
        Err(Error::InvalidGlyph(glyph.to_string()))
    }
}
