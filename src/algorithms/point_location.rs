use crate::data::{LineSegment, Point, PointLocation};
use crate::{Orientation, Scalar, Tolerance};

/// $O(n)$ Locate `pt` relative to the closed ring `ring`.
///
/// The ring is given as its vertices in order; the closing edge from the last vertex
/// back to the first is implied. Either winding direction is accepted. Points touching
/// an edge (within `tolerance`) are reported as [`PointLocation::OnBoundary`]; otherwise
/// the winding number decides. An empty ring contains nothing.
///
/// ```rust
/// # use relate2d::algorithms::point_location::locate;
/// # use relate2d::data::{Point, PointLocation};
/// # use relate2d::Tolerance;
/// let ring = [(0, 0), (10, 0), (10, 10), (0, 10)].map(Point::from);
/// assert_eq!(locate(&ring, &Point::new([5, 5]), Tolerance::EXACT), PointLocation::Inside);
/// assert_eq!(locate(&ring, &Point::new([10, 3]), Tolerance::EXACT), PointLocation::OnBoundary);
/// assert_eq!(locate(&ring, &Point::new([11, 3]), Tolerance::EXACT), PointLocation::Outside);
/// ```
pub fn locate<T: Scalar>(ring: &[Point<T>], pt: &Point<T>, tolerance: Tolerance) -> PointLocation {
  let mut winding: i64 = 0;
  for (i, a) in ring.iter().enumerate() {
    let b = &ring[(i + 1) % ring.len()];
    if LineSegment::new(*a, *b).contains_point(pt, tolerance) {
      return PointLocation::OnBoundary;
    }
    let turn = tolerance.orientation(a, b, pt);
    if a.y_coord() <= pt.y_coord() {
      if b.y_coord() > pt.y_coord() && turn == Orientation::CounterClockWise {
        winding += 1;
      }
    } else if b.y_coord() <= pt.y_coord() && turn == Orientation::ClockWise {
      winding -= 1;
    }
  }
  if winding == 0 {
    PointLocation::Outside
  } else {
    PointLocation::Inside
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use test_strategy::proptest;

  #[test]
  fn empty_and_single_point_rings() {
    let pt = Point::new([0, 0]);
    assert_eq!(locate(&[], &pt, Tolerance::EXACT), PointLocation::Outside);
    assert_eq!(locate(&[pt], &pt, Tolerance::EXACT), PointLocation::OnBoundary);
  }

  #[test]
  fn clockwise_ring() {
    let ring = [(0, 0), (0, 10), (10, 10), (10, 0)].map(Point::from);
    assert_eq!(locate(&ring, &Point::new([5, 5]), Tolerance::EXACT), PointLocation::Inside);
    assert_eq!(locate(&ring, &Point::new([0, 0]), Tolerance::EXACT), PointLocation::OnBoundary);
  }

  #[test]
  fn concave_ring() {
    // A "U" shape; the notch is outside.
    let ring = [(0, 0), (9, 0), (9, 9), (6, 9), (6, 3), (3, 3), (3, 9), (0, 9)].map(Point::from);
    assert_eq!(locate(&ring, &Point::new([4, 6]), Tolerance::EXACT), PointLocation::Outside);
    assert_eq!(locate(&ring, &Point::new([1, 6]), Tolerance::EXACT), PointLocation::Inside);
    assert_eq!(locate(&ring, &Point::new([4, 3]), Tolerance::EXACT), PointLocation::OnBoundary);
  }

  #[test]
  fn tolerance_widens_the_boundary() {
    let ring = [(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)].map(Point::from);
    let near = Point::new([0.5, -1e-12]);
    assert_eq!(locate(&ring, &near, Tolerance::EXACT), PointLocation::Outside);
    assert_eq!(locate(&ring, &near, Tolerance::new(1e-9)), PointLocation::OnBoundary);
  }

  #[proptest]
  fn agrees_with_rectangle(
    #[strategy(grid_rectangle(0..8))] rect: crate::data::Rectangle<i32>,
    #[strategy(grid_point(-1..9))] pt: Point<i32>,
  ) {
    let expected = if rect.contains_point_strict(&pt, Tolerance::EXACT) {
      PointLocation::Inside
    } else if rect.contains_point_inclusive(&pt, Tolerance::EXACT) {
      PointLocation::OnBoundary
    } else {
      PointLocation::Outside
    };
    assert_eq!(locate(&rect.corners(), &pt, Tolerance::EXACT), expected);
  }
}
