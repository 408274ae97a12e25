use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxError {
    EmptyInput,
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownGlyph { row: usize, col: usize, glyph: char },
    AmbiguousGlyphs(char),
    EmptyComponent,
    NoStandaloneBox,
}

impl fmt::Display for BoxError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "empty input: no grid rows"),
            Self::RaggedRow { row, expected, found } => write!(
                f,
                "row {} has {} cells, expected {}",
                row + 1,
                found,
                expected
            ),
            Self::UnknownGlyph { row, col, glyph } => {
                write!(f, "unexpected glyph {:?} at ({},{})", glyph, col + 1, row + 1)
            }
            Self::AmbiguousGlyphs(c) => {
                write!(f, "marker and background glyphs are both {:?}", c)
            }
            Self::EmptyComponent => write!(f, "cannot bound an empty component"),
            Self::NoStandaloneBox => write!(f, "no standalone bounding box found"),
        }
    }
}

impl std::error::Error for BoxError {}

pub type Result<T> = std::result::Result<T, BoxError>;
