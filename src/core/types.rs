use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Zero-based cell position: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: usize,
    pub y: usize,
}

impl Point {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    pub fn up(self) -> Option<Point> {
        self.y.checked_sub(1).map(|y| Point::new(self.x, y))
    }

    pub fn right(self) -> Option<Point> {
        self.x.checked_add(1).map(|x| Point::new(x, self.y))
    }

    pub fn down(self) -> Option<Point> {
        self.y.checked_add(1).map(|y| Point::new(self.x, y))
    }

    pub fn left(self) -> Option<Point> {
        self.x.checked_sub(1).map(|x| Point::new(x, self.y))
    }
}

/// Inclusive, zero-based rectangle around a group of cells.
///
/// Boxes are equal when their four bounds are equal, whichever component
/// produced them. They order by top-left corner (row first), then by
/// bottom-right corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: usize,
    pub max_x: usize,
    pub min_y: usize,
    pub max_y: usize,
}

impl BoundingBox {
    pub fn new(min_x: usize, max_x: usize, min_y: usize, max_y: usize) -> Self {
        debug_assert!(min_x <= max_x && min_y <= max_y);
        Self { min_x, max_x, min_y, max_y }
    }

    /// Degenerate box covering a single cell.
    pub fn around(p: Point) -> Self {
        Self::new(p.x, p.x, p.y, p.y)
    }

    pub fn include(&mut self, p: Point) {
        self.min_x = self.min_x.min(p.x);
        self.max_x = self.max_x.max(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_y = self.max_y.max(p.y);
    }

    /// Extent-difference area: `(max_x - min_x) * (max_y - min_y)`.
    ///
    /// This is not a cell count. A single cell or a straight line scores 0,
    /// a 2x2 block scores 1. Only used to rank boxes against each other.
    pub fn area(&self) -> usize {
        (self.max_x - self.min_x) * (self.max_y - self.min_y)
    }

    pub fn width(&self) -> usize {
        self.max_x - self.min_x + 1
    }

    pub fn height(&self) -> usize {
        self.max_y - self.min_y + 1
    }

    pub fn contains(&self, p: Point) -> bool {
        (self.min_x..=self.max_x).contains(&p.x) && (self.min_y..=self.max_y).contains(&p.y)
    }

    /// True when the two boxes share at least one cell.
    pub fn overlaps(&self, other: &BoundingBox) -> bool {
        let apart_x = self.max_x < other.min_x || other.max_x < self.min_x;
        let apart_y = self.max_y < other.min_y || other.max_y < self.min_y;
        !(apart_x || apart_y)
    }

    /// One-indexed `(column, row)` of the top-left cell.
    pub fn top_left(&self) -> (usize, usize) {
        (self.min_x + 1, self.min_y + 1)
    }

    /// One-indexed `(column, row)` of the bottom-right cell.
    pub fn bottom_right(&self) -> (usize, usize) {
        (self.max_x + 1, self.max_y + 1)
    }

    fn sort_key(&self) -> (usize, usize, usize, usize) {
        (self.min_y, self.min_x, self.max_y, self.max_x)
    }
}

impl Ord for BoundingBox {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for BoundingBox {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (x1, y1) = self.top_left();
        let (x2, y2) = self.bottom_right();
        write!(f, "({},{})({},{})", x1, y1, x2, y2)
    }
}
