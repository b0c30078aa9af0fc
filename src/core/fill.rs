//! Flood fill
//!
//! Breadth-first recoloring of the 4-connected region of cells that share
//! the seed cell's color. Glyphs are left alone.

use std::collections::VecDeque;

use tracing::debug;

use super::cell::Color;
use super::grid::Grid;
use super::raster::Point;
use crate::error::Result;

/// Recolor the region containing `seed` and return how many cells changed.
///
/// Filling with the color the seed already has is a no-op returning 0.
/// Each cell is recolored at most once, so the work is bounded by the grid
/// area.
pub fn flood_fill(grid: &mut Grid, seed: Point, color: Color) -> Result<usize> {
    let original = grid.get(seed.x, seed.y)?.color;
    if original == color {
        return Ok(0);
    }

    let mut queue = VecDeque::with_capacity(grid.width().max(grid.height()));
    queue.push_back(seed);
    let mut changed = 0;

    while let Some(point) = queue.pop_front() {
        match grid.get(point.x, point.y) {
            Ok(cell) if cell.color == original => {}
            _ => continue,
        }
        grid.set_color(point.x, point.y, color)?;
        changed += 1;

        for neighbor in point.neighbors4() {
            if grid.in_bounds(neighbor.x, neighbor.y) {
                queue.push_back(neighbor);
            }
        }
    }

    debug!(?seed, %original, %color, changed, "flood fill");
    Ok(changed)
}
