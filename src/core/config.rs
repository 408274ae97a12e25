use serde::{Deserialize, Serialize};

use super::error::{BoxError, Result};

pub const DEFAULT_MARKER: char = '*';
pub const DEFAULT_BACKGROUND: char = '-';

/// The two glyphs a grid is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glyphs {
    pub marker: char,
    pub background: char,
}

impl Default for Glyphs {
    fn default() -> Self {
        Self { marker: DEFAULT_MARKER, background: DEFAULT_BACKGROUND }
    }
}

impl Glyphs {
    pub fn new(marker: char, background: char) -> Result<Self> {
        if marker == background {
            return Err(BoxError::AmbiguousGlyphs(marker));
        }
        Ok(Self { marker, background })
    }

    /// `Some(true)` for a marker, `Some(false)` for background, `None` for anything else.
    pub fn classify(&self, c: char) -> Option<bool> {
        if c == self.marker {
            Some(true)
        } else if c == self.background {
            Some(false)
        } else {
            None
        }
    }
}
