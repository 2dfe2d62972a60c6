use super::{Relate, Relationship};
use crate::data::{LineSegment, Point};
use crate::{Scalar, Tolerance};

/// How a point relates to a line segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointSegment {
  /// On the segment's supporting line but beyond its ends.
  CollinearDisjoint,
  Miss,
  AtStart,
  AtEnd,
  /// Strictly between the endpoints.
  OnSegment,
}

impl PointSegment {
  pub fn relationship(self) -> Relationship {
    match self {
      PointSegment::CollinearDisjoint | PointSegment::Miss => Relationship::Disjoint,
      PointSegment::AtStart | PointSegment::AtEnd | PointSegment::OnSegment => {
        Relationship::Intersection
      }
    }
  }
}

impl std::fmt::Display for PointSegment {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PointSegment::CollinearDisjoint => write!(f, "CollinearDisjoint"),
      PointSegment::Miss => write!(f, "Miss"),
      PointSegment::AtStart => write!(f, "AtStart"),
      PointSegment::AtEnd => write!(f, "AtEnd"),
      PointSegment::OnSegment => write!(f, "OnSegment"),
    }
  }
}

// Endpoint coincidence wins over everything else. A degenerate segment is a single
// point, so anything that is not that point misses it.
pub(crate) fn point_segment<T: Scalar>(
  pt: &Point<T>,
  segment: &LineSegment<T>,
  tolerance: Tolerance,
) -> PointSegment {
  if tolerance.points_eq(pt, &segment.start) {
    return PointSegment::AtStart;
  }
  if tolerance.points_eq(pt, &segment.end) {
    return PointSegment::AtEnd;
  }
  if segment.is_degenerate()
    || !tolerance
      .orientation(&segment.start, &segment.end, pt)
      .is_colinear()
  {
    return PointSegment::Miss;
  }
  if within_bounds(pt, segment, tolerance) {
    PointSegment::OnSegment
  } else {
    PointSegment::CollinearDisjoint
  }
}

// Bounding-box containment along both axes, closed and tolerant.
pub(crate) fn within_bounds<T: Scalar>(
  pt: &Point<T>,
  segment: &LineSegment<T>,
  tolerance: Tolerance,
) -> bool {
  (0..2).all(|axis| {
    let (a, b) = (segment.start.array[axis], segment.end.array[axis]);
    let (lo, hi) = if a < b { (a, b) } else { (b, a) };
    tolerance.scalar_le(lo, pt.array[axis]) && tolerance.scalar_le(pt.array[axis], hi)
  })
}

impl<T: Scalar> Relate for Point<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &Point<T>, tolerance: Tolerance) -> Relationship {
    if tolerance.points_eq(self, other) {
      Relationship::Equal
    } else {
      Relationship::Disjoint
    }
  }
}

impl<T: Scalar> Relate<LineSegment<T>> for Point<T> {
  type Relationship = PointSegment;

  fn relate(&self, other: &LineSegment<T>, tolerance: Tolerance) -> PointSegment {
    point_segment(self, other, tolerance)
  }
}

impl<T: Scalar> Relate<Point<T>> for LineSegment<T> {
  type Relationship = PointSegment;

  fn relate(&self, other: &Point<T>, tolerance: Tolerance) -> PointSegment {
    point_segment(other, self, tolerance)
  }
}
