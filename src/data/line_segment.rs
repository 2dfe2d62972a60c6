use std::cmp::Ordering;
use std::ops::Range;

use super::{Point, Rectangle, Vector};
use crate::{classify, PointSegment, Scalar, Tolerance, TotalOrd};

///////////////////////////////////////////////////////////////////////////////
// LineSegment

/// Directed segment from `start` to `end`.
///
/// `start == end` is a valid, degenerate segment. Operations that would divide by the
/// segment's length fall back to the single point instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSegment<T> {
  pub start: Point<T>,
  pub end: Point<T>,
}

impl<T> LineSegment<T> {
  pub const fn new(start: Point<T>, end: Point<T>) -> LineSegment<T> {
    LineSegment { start, end }
  }

  pub fn start(&self) -> &Point<T> {
    &self.start
  }

  pub fn end(&self) -> &Point<T> {
    &self.end
  }

  #[must_use]
  pub fn reverse(self) -> LineSegment<T> {
    LineSegment {
      start: self.end,
      end: self.start,
    }
  }
}

impl<T: Scalar> LineSegment<T> {
  pub fn is_degenerate(&self) -> bool {
    self.start == self.end
  }

  /// `end - start`, computed in `T`. Integral coordinates near the limits of their type
  /// can overflow here; take [`LineSegment::to_f64`] first for those.
  pub fn direction(&self) -> Vector<T> {
    self.end - self.start
  }

  pub fn length(&self) -> f64 {
    self.start.distance_to(&self.end)
  }

  pub fn midpoint(&self) -> Point<f64> {
    let (a, b) = (self.start.to_f64(), self.end.to_f64());
    Point::new([(a.array[0] + b.array[0]) / 2.0, (a.array[1] + b.array[1]) / 2.0])
  }

  pub fn to_f64(&self) -> LineSegment<f64> {
    LineSegment::new(self.start.to_f64(), self.end.to_f64())
  }

  pub fn bounding_box(&self) -> Rectangle<T> {
    Rectangle::new(self.start, self.end)
  }

  /// Endpoints ordered by x, then y: the order in which a left-to-right sweep meets them.
  pub fn lexicographic_endpoints(&self) -> (Point<T>, Point<T>) {
    match self.start.total_cmp(&self.end) {
      Ordering::Greater => (self.end, self.start),
      _ => (self.start, self.end),
    }
  }

  /// True when `pt` touches the segment, endpoints included.
  ///
  /// ```rust
  /// # use relate2d::data::{LineSegment, Point};
  /// # use relate2d::Tolerance;
  /// let segment = LineSegment::from((0, 0)..(4, 4));
  /// assert!(segment.contains_point(&Point::new([2, 2]), Tolerance::EXACT));
  /// assert!(segment.contains_point(&Point::new([4, 4]), Tolerance::EXACT));
  /// assert!(!segment.contains_point(&Point::new([5, 5]), Tolerance::EXACT));
  /// ```
  pub fn contains_point(&self, pt: &Point<T>, tolerance: Tolerance) -> bool {
    classify(pt, self, tolerance) > PointSegment::Miss
  }

  pub fn distance_to_point(&self, pt: &Point<T>) -> f64 {
    let closest = pt.project_onto(self);
    pt.to_f64().distance_to(&closest)
  }
}

impl<T> From<Range<Point<T>>> for LineSegment<T> {
  fn from(range: Range<Point<T>>) -> LineSegment<T> {
    LineSegment::new(range.start, range.end)
  }
}

impl<T> From<Range<(T, T)>> for LineSegment<T> {
  fn from(range: Range<(T, T)>) -> LineSegment<T> {
    LineSegment::new(range.start.into(), range.end.into())
  }
}

impl<T: std::fmt::Display> std::fmt::Display for LineSegment<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{} -> {}", self.start, self.end)
  }
}
