pub mod config;
pub mod error;
pub mod types;

pub use config::Glyphs;
pub use error::{BoxError, Result};
pub use types::{BoundingBox, Point};
