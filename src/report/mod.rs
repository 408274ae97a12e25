pub mod output;

pub use output::{BoxReport, Report};
