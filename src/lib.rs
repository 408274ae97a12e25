pub mod analysis;
pub mod core;
pub mod perception;
pub mod report;
