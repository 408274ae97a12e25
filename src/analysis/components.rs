// 4-connected marker groups.
//
// Traversal is an explicit stack over an index-based visited bitmap, so
// large groups cost O(cells) with no recursion.

use crate::core::Point;
use crate::perception::Grid;

/// Collects every marker reachable from `seed`, marking each one in `visited`.
fn flood(grid: &Grid, seed: Point, visited: &mut [bool]) -> Vec<Point> {
    let mut cells = Vec::new();
    let mut stack = vec![seed];
    visited[grid.index(seed)] = true;

    while let Some(p) = stack.pop() {
        cells.push(p);
        for n in grid.neighbors(p) {
            let i = grid.index(n);
            if !visited[i] && grid.is_marker(n.x, n.y) {
                visited[i] = true;
                stack.push(n);
            }
        }
    }
    cells
}

/// Finds connected components, remembering which cells already belong to one.
pub struct ComponentFinder<'g> {
    grid: &'g Grid,
    assigned: Vec<bool>,
}

impl<'g> ComponentFinder<'g> {
    pub fn new(grid: &'g Grid) -> Self {
        Self { grid, assigned: vec![false; grid.len()] }
    }

    /// The whole component containing `seed`, ignoring earlier claims.
    /// Empty if `seed` is background.
    pub fn component_at(&self, seed: Point) -> Vec<Point> {
        if !self.grid.is_marker(seed.x, seed.y) {
            return Vec::new();
        }
        let mut visited = vec![false; self.grid.len()];
        flood(self.grid, seed, &mut visited)
    }

    /// The component containing `seed`, unless `seed` is background or was
    /// already reached by an earlier claim.
    pub fn claim(&mut self, seed: Point) -> Option<Vec<Point>> {
        if self.is_assigned(seed) || !self.grid.is_marker(seed.x, seed.y) {
            return None;
        }
        Some(flood(self.grid, seed, &mut self.assigned))
    }

    pub fn is_assigned(&self, p: Point) -> bool {
        self.assigned[self.grid.index(p)]
    }
}

/// Iterator over each component of a grid exactly once, in row-major order
/// of the component's first cell.
pub struct Components<'g> {
    finder: ComponentFinder<'g>,
    next: usize,
}

impl Iterator for Components<'_> {
    type Item = Vec<Point>;

    fn next(&mut self) -> Option<Vec<Point>> {
        let grid = self.finder.grid;
        while self.next < grid.len() {
            let seed = grid.point(self.next);
            self.next += 1;
            if let Some(cells) = self.finder.claim(seed) {
                return Some(cells);
            }
        }
        None
    }
}

pub fn connected_components(grid: &Grid) -> Components<'_> {
    Components { finder: ComponentFinder::new(grid), next: 0 }
}
