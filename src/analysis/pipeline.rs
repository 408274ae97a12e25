// Driver: scan the grid once, bound every component, drop overlapping
// boxes, keep the largest survivors.

use log::{debug, trace};
use rustc_hash::FxHashSet;
use serde::Serialize;

use super::bbox::bounding_box;
use super::components::{connected_components, ComponentFinder};
use super::overlap::standalone_boxes;
use super::select::largest_boxes;
use crate::core::{BoundingBox, BoxError, Glyphs, Result};
use crate::perception::Grid;

/// Everything one scan of a grid produced. Box lists are sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Detection {
    pub marker_cells: usize,
    pub components: usize,
    pub candidates: Vec<BoundingBox>,
    pub standalone: Vec<BoundingBox>,
    pub largest: Vec<BoundingBox>,
}

impl Detection {
    pub fn max_area(&self) -> Option<usize> {
        self.largest.first().map(BoundingBox::area)
    }

    pub fn is_success(&self) -> bool {
        !self.largest.is_empty()
    }

    pub fn into_result(self) -> Result<Vec<BoundingBox>> {
        if self.largest.is_empty() {
            return Err(BoxError::NoStandaloneBox);
        }
        Ok(self.largest)
    }
}

pub fn detect(grid: &Grid) -> Result<Detection> {
    let mut boxes: FxHashSet<BoundingBox> = FxHashSet::default();
    let mut components = 0;
    let mut marker_cells = 0;

    for cells in connected_components(grid) {
        let b = bounding_box(&cells)?;
        trace!("component of {} cells -> {}", cells.len(), b);
        components += 1;
        marker_cells += cells.len();
        boxes.insert(b);
    }

    let mut candidates: Vec<BoundingBox> = boxes.into_iter().collect();
    candidates.sort();
    let standalone = standalone_boxes(&candidates);
    let largest = largest_boxes(&standalone);

    debug!(
        "{}x{} grid: {} markers, {} components, {} distinct boxes, {} standalone, {} selected",
        grid.width(),
        grid.height(),
        marker_cells,
        components,
        candidates.len(),
        standalone.len(),
        largest.len()
    );

    Ok(Detection { marker_cells, components, candidates, standalone, largest })
}

/// Candidate boxes found by re-running the traversal from every marker cell
/// and deduplicating by value. Slower than [`detect`], same set of boxes.
pub fn candidate_boxes_per_cell(grid: &Grid) -> Result<Vec<BoundingBox>> {
    let finder = ComponentFinder::new(grid);
    let mut boxes: FxHashSet<BoundingBox> = FxHashSet::default();
    for seed in grid.markers() {
        boxes.insert(bounding_box(&finder.component_at(seed))?);
    }
    let mut boxes: Vec<BoundingBox> = boxes.into_iter().collect();
    boxes.sort();
    Ok(boxes)
}

pub fn largest_standalone_boxes(grid: &Grid) -> Result<Vec<BoundingBox>> {
    detect(grid)?.into_result()
}

/// Rows in, largest standalone boxes out.
pub fn solve<S: AsRef<str>>(rows: &[S], glyphs: Glyphs) -> Result<Vec<BoundingBox>> {
    let grid = Grid::from_rows(rows, glyphs)?;
    largest_standalone_boxes(&grid)
}
