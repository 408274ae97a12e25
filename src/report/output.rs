// Output: plain coordinate lines for the challenge format, or a JSON
// report carrying the scan statistics alongside the selected boxes.

use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::analysis::Detection;
use crate::core::BoundingBox;
use crate::perception::Grid;

/// A selected box in one-indexed `(column, row)` coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoxReport {
    pub top_left: (usize, usize),
    pub bottom_right: (usize, usize),
    pub area: usize,
}

impl From<&BoundingBox> for BoxReport {
    fn from(b: &BoundingBox) -> Self {
        Self { top_left: b.top_left(), bottom_right: b.bottom_right(), area: b.area() }
    }
}

impl fmt::Display for BoxReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({},{})({},{})",
            self.top_left.0, self.top_left.1, self.bottom_right.0, self.bottom_right.1
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub width: usize,
    pub height: usize,
    pub marker_cells: usize,
    pub components: usize,
    pub candidates: usize,
    pub standalone: usize,
    pub max_area: Option<usize>,
    pub boxes: Vec<BoxReport>,
}

impl Report {
    pub fn new(grid: &Grid, detection: &Detection) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            marker_cells: detection.marker_cells,
            components: detection.components,
            candidates: detection.candidates.len(),
            standalone: detection.standalone.len(),
            max_area: detection.max_area(),
            boxes: detection.largest.iter().map(BoxReport::from).collect(),
        }
    }

    /// One `(x1,y1)(x2,y2)` line per selected box.
    pub fn write_text<W: Write>(&self, out: &mut W) -> io::Result<()> {
        for b in &self.boxes {
            writeln!(out, "{}", b)?;
        }
        Ok(())
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn summary(&self) -> String {
        format!(
            "{}x{} grid | {} components | {} distinct boxes | {} standalone | selected {} (area {})",
            self.width,
            self.height,
            self.components,
            self.candidates,
            self.standalone,
            self.boxes.len(),
            self.max_area.map_or_else(|| "-".to_string(), |a| a.to_string()),
        )
    }
}
