use crate::core::BoundingBox;

/// Boxes that share no cell with any other box, in input order.
///
/// `boxes` must be distinct: two equal entries would overlap each other.
pub fn standalone_boxes(boxes: &[BoundingBox]) -> Vec<BoundingBox> {
    let overlapped = overlap_flags(boxes);
    boxes
        .iter()
        .zip(&overlapped)
        .filter(|(_, &hit)| !hit)
        .map(|(b, _)| *b)
        .collect()
}

/// Marks every box overlapping at least one other.
///
/// Boxes are swept left to right by `min_x`; once a later box starts past
/// the current box's `max_x`, no box after it can reach the current one.
fn overlap_flags(boxes: &[BoundingBox]) -> Vec<bool> {
    let mut order: Vec<usize> = (0..boxes.len()).collect();
    order.sort_by_key(|&i| boxes[i].min_x);

    let mut hit = vec![false; boxes.len()];
    for (k, &i) in order.iter().enumerate() {
        for &j in &order[k + 1..] {
            if boxes[j].min_x > boxes[i].max_x {
                break;
            }
            if boxes[i].overlaps(&boxes[j]) {
                log::trace!("{} overlaps {}", boxes[i], boxes[j]);
                hit[i] = true;
                hit[j] = true;
            }
        }
    }
    hit
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brute_force(boxes: &[BoundingBox]) -> Vec<BoundingBox> {
        boxes
            .iter()
            .filter(|a| !boxes.iter().any(|b| b != *a && a.overlaps(b)))
            .copied()
            .collect()
    }

    #[test]
    fn lone_box_is_standalone() {
        let b = BoundingBox::new(1, 2, 1, 2);
        assert_eq!(standalone_boxes(&[b]), vec![b]);
    }

    #[test]
    fn empty_input() {
        assert!(standalone_boxes(&[]).is_empty());
    }

    #[test]
    fn overlapping_pair_both_removed() {
        let small = BoundingBox::new(0, 1, 0, 1);
        let right = BoundingBox::new(8, 11, 0, 2);
        let middle = BoundingBox::new(4, 9, 1, 3);
        assert_eq!(standalone_boxes(&[small, right, middle]), vec![small]);
    }

    #[test]
    fn touching_edges_overlap() {
        let a = BoundingBox::new(0, 2, 0, 0);
        let b = BoundingBox::new(2, 4, 0, 0);
        assert!(standalone_boxes(&[a, b]).is_empty());
    }

    #[test]
    fn nested_box_removed_with_container() {
        let outer = BoundingBox::new(0, 4, 0, 4);
        let inner = BoundingBox::new(2, 2, 2, 2);
        let far = BoundingBox::new(6, 7, 0, 1);
        assert_eq!(standalone_boxes(&[outer, inner, far]), vec![far]);
    }

    #[test]
    fn sweep_matches_brute_force() {
        let boxes = vec![
            BoundingBox::new(0, 0, 0, 0),
            BoundingBox::new(0, 3, 5, 5),
            BoundingBox::new(2, 2, 0, 3),
            BoundingBox::new(3, 6, 4, 6),
            BoundingBox::new(4, 4, 0, 0),
            BoundingBox::new(5, 9, 2, 2),
            BoundingBox::new(8, 8, 4, 4),
            BoundingBox::new(10, 12, 0, 9),
            BoundingBox::new(14, 14, 7, 7),
            BoundingBox::new(1, 13, 8, 8),
        ];
        let mut reversed = boxes.clone();
        reversed.reverse();
        assert_eq!(standalone_boxes(&boxes), brute_force(&boxes));
        assert_eq!(standalone_boxes(&reversed), brute_force(&reversed));
    }

    #[test]
    fn standalone_boxes_overlap_nothing() {
        let boxes = vec![
            BoundingBox::new(0, 1, 0, 1),
            BoundingBox::new(3, 5, 0, 2),
            BoundingBox::new(5, 6, 2, 3),
            BoundingBox::new(0, 0, 3, 3),
        ];
        for s in standalone_boxes(&boxes) {
            assert!(boxes.iter().filter(|b| **b != s).all(|b| !b.overlaps(&s)));
        }
    }
}
