use super::{LineSegment, Point};
use crate::{Error, Scalar, Tolerance};

/// Axis-aligned rectangle stored by its lower-left and upper-right corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rectangle<T> {
  min: Point<T>,
  max: Point<T>,
}

impl<T: Scalar> Rectangle<T> {
  /// Rectangle spanned by two opposite corners, given in any order.
  pub fn new(a: Point<T>, b: Point<T>) -> Rectangle<T> {
    let (x0, x1) = ordered(a.array[0], b.array[0]);
    let (y0, y1) = ordered(a.array[1], b.array[1]);
    Rectangle {
      min: Point::new([x0, y0]),
      max: Point::new([x1, y1]),
    }
  }

  /// Rectangle from its four corners, in any order.
  ///
  /// ```rust
  /// # use relate2d::data::{Point, Rectangle};
  /// # use relate2d::Error;
  /// let square = [(0, 0), (10, 0), (10, 10), (0, 10)].map(Point::from);
  /// assert!(Rectangle::from_corners(&square).is_ok());
  ///
  /// let skewed = [(0, 0), (10, 1), (10, 10), (0, 10)].map(Point::from);
  /// assert_eq!(Rectangle::from_corners(&skewed), Err(Error::NotAxisAligned));
  /// ```
  pub fn from_corners(corners: &[Point<T>]) -> Result<Rectangle<T>, Error> {
    let [first, rest @ ..] = corners else {
      return Err(Error::CornerCount(0));
    };
    if corners.len() != 4 {
      return Err(Error::CornerCount(corners.len()));
    }
    let rect = rest
      .iter()
      .fold(Rectangle::new(*first, *first), |rect, pt| rect.include(pt));
    let expected = rect.corners();
    if expected.iter().all(|corner| corners.contains(corner))
      && corners.iter().all(|corner| expected.contains(corner))
    {
      Ok(rect)
    } else {
      Err(Error::NotAxisAligned)
    }
  }

  fn include(self, pt: &Point<T>) -> Rectangle<T> {
    let lo = |a: T, b: T| if b < a { b } else { a };
    let hi = |a: T, b: T| if b > a { b } else { a };
    Rectangle {
      min: Point::new([lo(self.min.array[0], pt.array[0]), lo(self.min.array[1], pt.array[1])]),
      max: Point::new([hi(self.max.array[0], pt.array[0]), hi(self.max.array[1], pt.array[1])]),
    }
  }

  pub fn min(&self) -> &Point<T> {
    &self.min
  }

  pub fn max(&self) -> &Point<T> {
    &self.max
  }

  // Extents are taken in f64; `max - min` may not fit in an integral `T`.
  pub fn width(&self) -> f64 {
    self.max.array[0].as_f64() - self.min.array[0].as_f64()
  }

  pub fn height(&self) -> f64 {
    self.max.array[1].as_f64() - self.min.array[1].as_f64()
  }

  pub fn area(&self) -> f64 {
    self.width() * self.height()
  }

  pub fn perimeter(&self) -> f64 {
    2.0 * (self.width() + self.height())
  }

  pub fn center(&self) -> Point<f64> {
    let (min, max) = (self.min.to_f64(), self.max.to_f64());
    Point::new([(min.array[0] + max.array[0]) / 2.0, (min.array[1] + max.array[1]) / 2.0])
  }

  /// Corners in counter-clockwise order, starting at the lower-left one.
  pub fn corners(&self) -> [Point<T>; 4] {
    [
      self.min,
      Point::new([self.max.array[0], self.min.array[1]]),
      self.max,
      Point::new([self.min.array[0], self.max.array[1]]),
    ]
  }

  /// Boundary edges, counter-clockwise, in the same order as [`Rectangle::corners`].
  pub fn edges(&self) -> [LineSegment<T>; 4] {
    let [a, b, c, d] = self.corners();
    [
      LineSegment::new(a, b),
      LineSegment::new(b, c),
      LineSegment::new(c, d),
      LineSegment::new(d, a),
    ]
  }

  /// Inside the rectangle and not within tolerance of its boundary.
  pub fn contains_point_strict(&self, pt: &Point<T>, tolerance: Tolerance) -> bool {
    (0..2).all(|axis| {
      let v = pt.array[axis];
      v > self.min.array[axis]
        && v < self.max.array[axis]
        && !tolerance.scalar_eq(v, self.min.array[axis])
        && !tolerance.scalar_eq(v, self.max.array[axis])
    })
  }

  /// Inside the rectangle or on its boundary.
  pub fn contains_point_inclusive(&self, pt: &Point<T>, tolerance: Tolerance) -> bool {
    (0..2).all(|axis| {
      tolerance.scalar_le(self.min.array[axis], pt.array[axis])
        && tolerance.scalar_le(pt.array[axis], self.max.array[axis])
    })
  }

  /// Closed overlap test. Used to reject far-apart shapes before any edge-wise work.
  pub fn overlaps(&self, other: &Rectangle<T>, tolerance: Tolerance) -> bool {
    (0..2).all(|axis| {
      tolerance.scalar_le(self.min.array[axis], other.max.array[axis])
        && tolerance.scalar_le(other.min.array[axis], self.max.array[axis])
    })
  }

  pub fn to_f64(&self) -> Rectangle<f64> {
    Rectangle {
      min: self.min.to_f64(),
      max: self.max.to_f64(),
    }
  }
}

fn ordered<T: Scalar>(a: T, b: T) -> (T, T) {
  if b < a {
    (b, a)
  } else {
    (a, b)
  }
}

impl<T: std::fmt::Display> std::fmt::Display for Rectangle<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "rectangle {} .. {}", self.min, self.max)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::testing::*;

  use claims::{assert_err_eq, assert_ok_eq};
  use test_strategy::proptest;

  #[test]
  fn normalised_corners() {
    let rect = Rectangle::new(Point::new([10, 0]), Point::new([0, 10]));
    assert_eq!(rect.min(), &Point::new([0, 0]));
    assert_eq!(rect.max(), &Point::new([10, 10]));
    assert_eq!(rect.width(), 10.0);
    assert_eq!(rect.area(), 100.0);
    assert_eq!(rect.perimeter(), 40.0);
    assert_eq!(rect.center(), Point::new([5.0, 5.0]));
  }

  #[test]
  fn extents_span_the_full_integer_range() {
    let rect = Rectangle::new(Point::new([i8::MIN, i8::MIN]), Point::new([i8::MAX, 0]));
    assert_eq!(rect.width(), 255.0);
    assert_eq!(rect.height(), 128.0);
    assert_eq!(rect.area(), 255.0 * 128.0);
  }

  #[test]
  fn from_corners() {
    let corners = [(0, 10), (10, 0), (0, 0), (10, 10)].map(Point::from);
    assert_ok_eq!(
      Rectangle::from_corners(&corners),
      Rectangle::new(Point::new([0, 0]), Point::new([10, 10]))
    );
    assert_err_eq!(
      Rectangle::from_corners(&corners[..3]),
      Error::CornerCount(3)
    );
    assert_err_eq!(
      Rectangle::<i32>::from_corners(&[]),
      Error::CornerCount(0)
    );
    let diamond = [(5, 0), (10, 5), (5, 10), (0, 5)].map(Point::from);
    assert_err_eq!(Rectangle::from_corners(&diamond), Error::NotAxisAligned);
  }

  #[test]
  fn strict_and_inclusive_containment() {
    let rect = Rectangle::new(Point::new([0.0, 0.0]), Point::new([10.0, 10.0]));
    let tol = Tolerance::new(1e-6);
    assert!(rect.contains_point_strict(&Point::new([5.0, 5.0]), tol));
    assert!(!rect.contains_point_strict(&Point::new([1e-9, 5.0]), tol));
    assert!(rect.contains_point_inclusive(&Point::new([-1e-9, 5.0]), tol));
    assert!(!rect.contains_point_inclusive(&Point::new([-1.0, 5.0]), tol));
  }

  #[test]
  fn overlap_includes_touching() {
    let a = Rectangle::new(Point::new([0, 0]), Point::new([2, 2]));
    let b = Rectangle::new(Point::new([2, 2]), Point::new([4, 4]));
    let c = Rectangle::new(Point::new([3, 0]), Point::new([4, 1]));
    assert!(a.overlaps(&b, Tolerance::EXACT));
    assert!(!a.overlaps(&c, Tolerance::EXACT));
  }

  #[proptest]
  fn edges_form_a_ccw_loop(#[strategy(grid_rectangle(-5..5))] rect: Rectangle<i32>) {
    let edges = rect.edges();
    for i in 0..4 {
      assert_eq!(edges[i].end, edges[(i + 1) % 4].start);
    }
    let corners = rect.corners();
    assert_ok_eq!(Rectangle::from_corners(&corners), rect);
  }
}
