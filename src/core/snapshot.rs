//! Deterministic snapshot generation
//!
//! Snapshots capture the complete canvas state, colors included, in a
//! serializable format for testing and debugging. The same sequence of
//! drawing operations always produces identical snapshots.

use serde::{Deserialize, Serialize};

use super::cell::{Cell, Color};
use super::grid::Grid;

/// A complete snapshot of the canvas
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Canvas dimensions
    pub width: usize,
    pub height: usize,
    /// Grid content (row-major)
    pub grid: Vec<Vec<CellSnapshot>>,
}

/// Snapshot of a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellSnapshot {
    pub glyph: char,
    #[serde(default, skip_serializing_if = "is_default")]
    pub color: Color,
}

fn is_default(color: &Color) -> bool {
    *color == Color::Default
}

impl From<&Cell> for CellSnapshot {
    fn from(cell: &Cell) -> Self {
        CellSnapshot {
            glyph: cell.glyph,
            color: cell.color,
        }
    }
}

impl Snapshot {
    /// Create a snapshot from the current grid state
    pub fn from_grid(grid: &Grid) -> Self {
        let rows = grid
            .render()
            .iter()
            .map(|row| row.cells.iter().map(CellSnapshot::from).collect())
            .collect();

        Snapshot {
            width: grid.width(),
            height: grid.height(),
            grid: rows,
        }
    }

    /// Convert snapshot to JSON string
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parse snapshot from JSON string
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Plain glyph rows, one line each
    pub fn to_text(&self) -> String {
        let mut result = String::new();
        for row in &self.grid {
            result.extend(row.iter().map(|c| c.glyph));
            result.push('\n');
        }
        result
    }

    /// Number of cells painted with `color`
    pub fn count_color(&self, color: Color) -> usize {
        self.grid
            .iter()
            .flatten()
            .filter(|cell| cell.color == color)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Point;

    #[test]
    fn test_snapshot_from_grid() {
        let mut grid = Grid::new(4, 2).unwrap();
        grid.set(1, 0, 'H', Color::Red).unwrap();
        grid.set(2, 0, 'i', Color::Default).unwrap();

        let snapshot = Snapshot::from_grid(&grid);

        assert_eq!(snapshot.width, 4);
        assert_eq!(snapshot.height, 2);
        assert_eq!(snapshot.grid[0][1], CellSnapshot { glyph: 'H', color: Color::Red });
        assert_eq!(snapshot.to_text(), ".Hi.\n....\n");
        assert_eq!(snapshot.count_color(Color::Red), 1);
    }

    #[test]
    fn test_snapshot_json_roundtrip() {
        let mut grid = Grid::new(5, 3).unwrap();
        grid.draw_line(Point::new(0, 0), Point::new(4, 2), '\\', Color::Magenta)
            .unwrap();

        let snapshot = Snapshot::from_grid(&grid);
        let json = snapshot.to_json().unwrap();
        let restored = Snapshot::from_json(&json).unwrap();

        assert_eq!(snapshot, restored);
    }

    #[test]
    fn test_snapshot_json_omits_default_color() {
        let grid = Grid::new(1, 1).unwrap();
        let json = Snapshot::from_grid(&grid).to_json().unwrap();
        assert!(!json.contains("color"));
        assert!(json.contains("\"glyph\": \".\""));
    }
}
