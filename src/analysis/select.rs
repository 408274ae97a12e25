use crate::core::BoundingBox;

/// Largest area among `boxes`, `None` when there are none.
pub fn max_area(boxes: &[BoundingBox]) -> Option<usize> {
    boxes.iter().map(BoundingBox::area).max()
}

/// Every box reaching the maximum area, sorted by top-left corner.
pub fn largest_boxes(boxes: &[BoundingBox]) -> Vec<BoundingBox> {
    let Some(best) = max_area(boxes) else {
        return Vec::new();
    };
    let mut winners: Vec<BoundingBox> =
        boxes.iter().copied().filter(|b| b.area() == best).collect();
    winners.sort();
    winners
}
