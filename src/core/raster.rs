//! Line rasterization
//!
//! Converts a segment between two integer points into the ordered run of
//! grid coordinates it passes through, using integer Bresenham stepping.
//! The rasterizer does no bounds checking of its own: every point it yields
//! lies inside the bounding rectangle of the two endpoints.

use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

/// A grid coordinate: `x` is the column, `y` is the row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The four axis neighbors (up, down, left, right)
    pub fn neighbors4(self) -> [Point; 4] {
        [
            Point::new(self.x, self.y.saturating_sub(1)),
            Point::new(self.x, self.y.saturating_add(1)),
            Point::new(self.x.saturating_sub(1), self.y),
            Point::new(self.x.saturating_add(1), self.y),
        ]
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// Iterator over the points of a Bresenham line, endpoints included
#[derive(Debug, Clone)]
pub struct Line {
    x: i64,
    y: i64,
    end_x: i64,
    end_y: i64,
    dx: i64,
    dy: i64,
    sx: i64,
    sy: i64,
    err: i64,
    remaining: usize,
}

/// Rasterize the segment from `start` to `end`.
///
/// Always yields at least one point; `line(p, p)` yields exactly `p`.
/// Consecutive points differ by at most one step on each axis.
pub fn line(start: Point, end: Point) -> Line {
    let (x1, y1) = (i64::from(start.x), i64::from(start.y));
    let (x2, y2) = (i64::from(end.x), i64::from(end.y));
    let dx = (x2 - x1).abs();
    let dy = (y2 - y1).abs();

    Line {
        x: x1,
        y: y1,
        end_x: x2,
        end_y: y2,
        dx,
        dy,
        sx: if x2 >= x1 { 1 } else { -1 },
        sy: if y2 >= y1 { 1 } else { -1 },
        err: dx - dy,
        // The major axis advances on every step
        remaining: dx.max(dy) as usize + 1,
    }
}

impl Iterator for Line {
    type Item = Point;

    fn next(&mut self) -> Option<Point> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        // Coordinates never leave the endpoints' bounding box, so they fit i32
        let current = Point::new(self.x as i32, self.y as i32);
        if self.x == self.end_x && self.y == self.end_y {
            self.remaining = 0;
            return Some(current);
        }

        let e2 = 2 * self.err;
        if e2 > -self.dy {
            self.err -= self.dy;
            self.x += self.sx;
        }
        if e2 < self.dx {
            self.err += self.dx;
            self.y += self.sy;
        }

        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Line {}

impl FusedIterator for Line {}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn points(start: (i32, i32), end: (i32, i32)) -> Vec<(i32, i32)> {
        line(start.into(), end.into()).map(|p| (p.x, p.y)).collect()
    }

    #[test]
    fn test_single_point() {
        assert_eq!(points((3, 4), (3, 4)), vec![(3, 4)]);
    }

    #[test]
    fn test_horizontal() {
        assert_eq!(points((0, 0), (3, 0)), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(points((3, 0), (0, 0)), vec![(3, 0), (2, 0), (1, 0), (0, 0)]);
    }

    #[test]
    fn test_vertical() {
        assert_eq!(points((1, 2), (1, 5)), vec![(1, 2), (1, 3), (1, 4), (1, 5)]);
    }

    #[test]
    fn test_diagonal() {
        assert_eq!(points((0, 0), (3, 3)), vec![(0, 0), (1, 1), (2, 2), (3, 3)]);
        assert_eq!(points((3, 0), (0, 3)), vec![(3, 0), (2, 1), (1, 2), (0, 3)]);
    }

    #[test]
    fn test_shallow_slope() {
        assert_eq!(points((0, 0), (4, 2)), vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2)]);
    }

    #[test]
    fn test_exact_size() {
        let line = line(Point::new(0, 0), Point::new(7, -3));
        assert_eq!(line.len(), 8);
        assert_eq!(line.count(), 8);
    }

    #[test]
    fn test_fused() {
        let mut line = line(Point::new(0, 0), Point::new(1, 0));
        assert!(line.next().is_some());
        assert!(line.next().is_some());
        assert!(line.next().is_none());
        assert!(line.next().is_none());
    }

    #[test]
    fn test_extreme_endpoints() {
        let line = line(Point::new(i32::MIN, 0), Point::new(i32::MAX, 0));
        assert_eq!(line.len(), u32::MAX as usize + 1);
    }

    #[test]
    fn test_neighbors4() {
        let n = Point::new(2, 2).neighbors4();
        assert!(n.contains(&Point::new(2, 1)));
        assert!(n.contains(&Point::new(2, 3)));
        assert!(n.contains(&Point::new(1, 2)));
        assert!(n.contains(&Point::new(3, 2)));
    }

    proptest! {
        #[test]
        fn prop_line_is_connected(
            x1 in -200i32..200, y1 in -200i32..200,
            x2 in -200i32..200, y2 in -200i32..200,
        ) {
            let pts = points((x1, y1), (x2, y2));
            for pair in pts.windows(2) {
                let (a, b) = (pair[0], pair[1]);
                prop_assert!((a.0 - b.0).abs() <= 1);
                prop_assert!((a.1 - b.1).abs() <= 1);
                prop_assert_ne!(a, b);
            }
        }

        #[test]
        fn prop_line_hits_both_endpoints(
            x1 in -200i32..200, y1 in -200i32..200,
            x2 in -200i32..200, y2 in -200i32..200,
        ) {
            let pts = points((x1, y1), (x2, y2));
            prop_assert_eq!(pts.first().copied(), Some((x1, y1)));
            prop_assert_eq!(pts.last().copied(), Some((x2, y2)));
            let major = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
            prop_assert_eq!(pts.len(), major + 1);
        }

        #[test]
        fn prop_line_stays_in_bounding_box(
            x1 in -200i32..200, y1 in -200i32..200,
            x2 in -200i32..200, y2 in -200i32..200,
        ) {
            for (x, y) in points((x1, y1), (x2, y2)) {
                prop_assert!(x >= x1.min(x2) && x <= x1.max(x2));
                prop_assert!(y >= y1.min(y2) && y <= y1.max(y2));
            }
        }
    }
}
