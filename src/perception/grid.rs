use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use anyhow::Context;

use crate::core::{BoxError, Glyphs, Point, Result};

/// Immutable marker/background matrix, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<bool>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Builds a grid from equal-length rows drawn with `glyphs`.
    pub fn from_rows<S: AsRef<str>>(rows: &[S], glyphs: Glyphs) -> Result<Self> {
        let first = rows.first().ok_or(BoxError::EmptyInput)?;
        let width = first.as_ref().chars().count();
        if width == 0 {
            return Err(BoxError::EmptyInput);
        }

        let mut cells = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let start = cells.len();
            for (x, c) in row.as_ref().chars().enumerate() {
                let marker = glyphs
                    .classify(c)
                    .ok_or(BoxError::UnknownGlyph { row: y, col: x, glyph: c })?;
                cells.push(marker);
            }
            let found = cells.len() - start;
            if found != width {
                return Err(BoxError::RaggedRow { row: y, expected: width, found });
            }
        }

        Ok(Self { cells, width, height: rows.len() })
    }

    /// Parses grid text, stopping at the first blank line.
    pub fn parse(text: &str, glyphs: Glyphs) -> Result<Self> {
        let rows: Vec<&str> = text.lines().take_while(|l| !is_terminator(l)).collect();
        Self::from_rows(&rows, glyphs)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Callers keep `(x, y)` inside the grid.
    pub fn is_marker(&self, x: usize, y: usize) -> bool {
        debug_assert!(x < self.width && y < self.height, "({}, {}) outside grid", x, y);
        self.cells[y * self.width + x]
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x < self.width && p.y < self.height
    }

    pub fn index(&self, p: Point) -> usize {
        p.y * self.width + p.x
    }

    pub fn point(&self, index: usize) -> Point {
        Point::new(index % self.width, index / self.width)
    }

    /// In-bounds 4-neighbours of `p`, in the order up, right, down, left.
    pub fn neighbors(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        [p.up(), p.right(), p.down(), p.left()]
            .into_iter()
            .flatten()
            .filter(move |n| self.contains(*n))
    }

    /// Marker cells in row-major order.
    pub fn markers(&self) -> impl Iterator<Item = Point> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, &marker)| marker)
            .map(move |(i, _)| self.point(i))
    }

    pub fn marker_count(&self) -> usize {
        self.cells.iter().filter(|&&m| m).count()
    }
}

fn is_terminator(line: &str) -> bool {
    line.trim().is_empty()
}

/// Reads grid rows until end of input or the first blank line.
pub fn read_rows<R: BufRead>(reader: R) -> io::Result<Vec<String>> {
    let mut rows = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if is_terminator(&line) {
            break;
        }
        rows.push(line);
    }
    Ok(rows)
}

pub fn load_rows(path: &Path) -> anyhow::Result<Vec<String>> {
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    let rows = read_rows(BufReader::new(file))
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(text: &str) -> Grid {
        Grid::parse(text, Glyphs::default()).unwrap()
    }

    #[test]
    fn parse_dimensions() {
        let g = grid("**-\n-*-\n");
        assert_eq!((g.width(), g.height()), (3, 2));
        assert_eq!(g.len(), 6);
        assert!(g.is_marker(0, 0));
        assert!(g.is_marker(1, 1));
        assert!(!g.is_marker(2, 1));
    }

    #[test]
    fn parse_stops_at_blank_line() {
        let g = grid("*-\n-*\n\n**\n");
        assert_eq!(g.height(), 2);
        let g = grid("*-\n  \n**\n");
        assert_eq!(g.height(), 1);
    }

    #[test]
    fn crlf_lines_accepted() {
        let g = grid("*-\r\n-*\r\n");
        assert_eq!((g.width(), g.height()), (2, 2));
    }

    #[test]
    fn empty_input_rejected() {
        assert_eq!(Grid::parse("", Glyphs::default()), Err(BoxError::EmptyInput));
        assert_eq!(Grid::parse("\n**\n", Glyphs::default()), Err(BoxError::EmptyInput));
        let none: [&str; 0] = [];
        assert_eq!(Grid::from_rows(&none, Glyphs::default()), Err(BoxError::EmptyInput));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_rows(&["***", "**", "***"], Glyphs::default()).unwrap_err();
        assert_eq!(err, BoxError::RaggedRow { row: 1, expected: 3, found: 2 });

        let err = Grid::from_rows(&["**", "***"], Glyphs::default()).unwrap_err();
        assert_eq!(err, BoxError::RaggedRow { row: 1, expected: 2, found: 3 });
    }

    #[test]
    fn unknown_glyph_rejected() {
        let err = Grid::from_rows(&["*-", "-x"], Glyphs::default()).unwrap_err();
        assert_eq!(err, BoxError::UnknownGlyph { row: 1, col: 1, glyph: 'x' });
    }

    #[test]
    fn custom_glyphs() {
        let glyphs = Glyphs::new('#', '.').unwrap();
        let g = Grid::from_rows(&["#.", ".#"], glyphs).unwrap();
        assert_eq!(g.marker_count(), 2);
    }

    #[test]
    fn neighbors_order_and_bounds() {
        let g = grid("---\n---\n---\n");
        let center: Vec<_> = g.neighbors(Point::new(1, 1)).collect();
        assert_eq!(
            center,
            vec![Point::new(1, 0), Point::new(2, 1), Point::new(1, 2), Point::new(0, 1)]
        );
        let corner: Vec<_> = g.neighbors(Point::new(2, 2)).collect();
        assert_eq!(corner, vec![Point::new(2, 1), Point::new(1, 2)]);
    }

    #[test]
    fn index_round_trips_point() {
        let g = grid("----\n----\n");
        let p = Point::new(3, 1);
        assert_eq!(g.index(p), 7);
        assert_eq!(g.point(7), p);
    }

    #[test]
    fn markers_row_major() {
        let g = grid("-*\n*-\n");
        let m: Vec<_> = g.markers().collect();
        assert_eq!(m, vec![Point::new(1, 0), Point::new(0, 1)]);
    }

    #[test]
    fn read_rows_until_blank() {
        let input = "**--\n-**-\n\nignored\n";
        let rows = read_rows(input.as_bytes()).unwrap();
        assert_eq!(rows, vec!["**--", "-**-"]);
    }

    #[test]
    fn read_rows_empty() {
        assert!(read_rows("".as_bytes()).unwrap().is_empty());
    }
}
