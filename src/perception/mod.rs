pub mod grid;

pub use grid::{read_rows, Grid};
