// Component analysis: grid cells -> connected groups -> bounding boxes ->
// standalone boxes -> largest standalone boxes.

pub mod bbox;
pub mod components;
pub mod overlap;
pub mod pipeline;
pub mod select;

pub use bbox::bounding_box;
pub use components::{connected_components, ComponentFinder};
pub use overlap::standalone_boxes;
pub use pipeline::{detect, largest_standalone_boxes, solve, Detection};
pub use select::{largest_boxes, max_area};
