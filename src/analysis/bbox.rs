use crate::core::{BoundingBox, BoxError, Point, Result};

/// Smallest box holding every point. Fails on an empty slice.
pub fn bounding_box(points: &[Point]) -> Result<BoundingBox> {
    let (&first, rest) = points.split_first().ok_or(BoxError::EmptyComponent)?;
    Ok(rest.iter().fold(BoundingBox::around(first), |mut b, &p| {
        b.include(p);
        b
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_point() {
        let b = bounding_box(&[Point::new(3, 1)]).unwrap();
        assert_eq!(b, BoundingBox::new(3, 3, 1, 1));
        assert_eq!(b.area(), 0);
    }

    #[test]
    fn l_shape() {
        let pts = [Point::new(0, 0), Point::new(1, 0), Point::new(1, 1)];
        assert_eq!(bounding_box(&pts).unwrap(), BoundingBox::new(0, 1, 0, 1));
    }

    #[test]
    fn order_does_not_matter() {
        let mut pts = vec![
            Point::new(4, 1),
            Point::new(5, 1),
            Point::new(5, 2),
            Point::new(6, 2),
            Point::new(7, 2),
            Point::new(7, 3),
            Point::new(8, 3),
            Point::new(9, 3),
        ];
        let forward = bounding_box(&pts).unwrap();
        pts.reverse();
        assert_eq!(bounding_box(&pts).unwrap(), forward);
        assert_eq!(forward, BoundingBox::new(4, 9, 1, 3));
    }

    #[test]
    fn empty_is_error() {
        assert_eq!(bounding_box(&[]), Err(BoxError::EmptyComponent));
    }
}
