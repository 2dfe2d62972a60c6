use super::point::point_segment;
use super::{Relate, Relationship};
use crate::data::{LineSegment, Point};
use crate::{PointSegment, Scalar, Tolerance};

/// How segment `AB` relates to segment `CD`.
///
/// Endpoint coincidences take priority over every other outcome, so two collinear
/// segments that overlap from a shared endpoint report that endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentRelationship {
  /// Same supporting line, no common point.
  CollinearDisjoint,
  Miss,
  /// Single interior crossing point.
  Crossing,
  /// A ≡ C
  SharedStartpoint,
  /// A ≡ D
  StartMeetsOtherEnd,
  /// B ≡ C
  EndMeetsOtherStart,
  /// B ≡ D
  SharedEndpoint,
  /// A lies in the interior of CD.
  StartOnOther,
  /// B lies in the interior of CD.
  EndOnOther,
  /// C lies in the interior of AB.
  OtherStartOn,
  /// D lies in the interior of AB.
  OtherEndOn,
  /// Collinear partial overlap with A inside CD.
  CollinearStartOverlap,
  /// Collinear partial overlap with B inside CD.
  CollinearEndOverlap,
  /// AB lies within CD.
  CollinearContainedBy,
  /// CD lies within AB.
  CollinearContains,
  /// Same endpoints, in either direction.
  CollinearEqual,
}
use SegmentRelationship::*;

impl SegmentRelationship {
  pub fn relationship(self) -> Relationship {
    match self {
      CollinearDisjoint | Miss => Relationship::Disjoint,
      Crossing
      | SharedStartpoint
      | StartMeetsOtherEnd
      | EndMeetsOtherStart
      | SharedEndpoint
      | StartOnOther
      | EndOnOther
      | OtherStartOn
      | OtherEndOn
      | CollinearStartOverlap
      | CollinearEndOverlap => Relationship::Intersection,
      CollinearContainedBy => Relationship::ContainedBy,
      CollinearContains => Relationship::Contains,
      CollinearEqual => Relationship::Equal,
    }
  }

  /// The label `CD` would report against `AB`.
  ///
  /// Returns `None` for partial collinear overlaps: which end of `CD` lies inside `AB`
  /// depends on the geometry, not on the label.
  pub fn flipped(self) -> Option<SegmentRelationship> {
    match self {
      CollinearStartOverlap | CollinearEndOverlap => None,
      StartMeetsOtherEnd => Some(EndMeetsOtherStart),
      EndMeetsOtherStart => Some(StartMeetsOtherEnd),
      StartOnOther => Some(OtherStartOn),
      OtherStartOn => Some(StartOnOther),
      EndOnOther => Some(OtherEndOn),
      OtherEndOn => Some(EndOnOther),
      CollinearContainedBy => Some(CollinearContains),
      CollinearContains => Some(CollinearContainedBy),
      CollinearDisjoint | Miss | Crossing | SharedStartpoint | SharedEndpoint | CollinearEqual => {
        Some(self)
      }
    }
  }
}

impl std::fmt::Display for SegmentRelationship {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      CollinearDisjoint => "CollinearDisjoint",
      Miss => "Miss",
      Crossing => "Crossing",
      SharedStartpoint => "SharedStartpoint",
      StartMeetsOtherEnd => "StartMeetsOtherEnd",
      EndMeetsOtherStart => "EndMeetsOtherStart",
      SharedEndpoint => "SharedEndpoint",
      StartOnOther => "StartOnOther",
      EndOnOther => "EndOnOther",
      OtherStartOn => "OtherStartOn",
      OtherEndOn => "OtherEndOn",
      CollinearStartOverlap => "CollinearStartOverlap",
      CollinearEndOverlap => "CollinearEndOverlap",
      CollinearContainedBy => "CollinearContainedBy",
      CollinearContains => "CollinearContains",
      CollinearEqual => "CollinearEqual",
    };
    f.write_str(name)
  }
}

fn touches<T: Scalar>(pt: &Point<T>, segment: &LineSegment<T>, tolerance: Tolerance) -> bool {
  point_segment(pt, segment, tolerance) > PointSegment::Miss
}

fn interior<T: Scalar>(pt: &Point<T>, segment: &LineSegment<T>, tolerance: Tolerance) -> bool {
  point_segment(pt, segment, tolerance) == PointSegment::OnSegment
}

pub(crate) fn segment_segment<T: Scalar>(
  ab: &LineSegment<T>,
  cd: &LineSegment<T>,
  tolerance: Tolerance,
) -> SegmentRelationship {
  let (a, b) = (&ab.start, &ab.end);
  let (c, d) = (&cd.start, &cd.end);
  let eq = |p: &Point<T>, q: &Point<T>| tolerance.points_eq(p, q);

  if (eq(a, c) && eq(b, d)) || (eq(a, d) && eq(b, c)) {
    return CollinearEqual;
  }
  if eq(a, c) {
    return SharedStartpoint;
  }
  if eq(a, d) {
    return StartMeetsOtherEnd;
  }
  if eq(b, c) {
    return EndMeetsOtherStart;
  }
  if eq(b, d) {
    return SharedEndpoint;
  }

  let o1 = tolerance.orientation(a, b, c);
  let o2 = tolerance.orientation(a, b, d);
  let o3 = tolerance.orientation(c, d, a);
  let o4 = tolerance.orientation(c, d, b);

  if o1.is_colinear() && o2.is_colinear() && o3.is_colinear() && o4.is_colinear() {
    let (a_in, b_in) = (touches(a, cd, tolerance), touches(b, cd, tolerance));
    let (c_in, d_in) = (touches(c, ab, tolerance), touches(d, ab, tolerance));
    return match (a_in, b_in) {
      (true, true) => CollinearContainedBy,
      _ if c_in && d_in => CollinearContains,
      (true, false) => CollinearStartOverlap,
      (false, true) => CollinearEndOverlap,
      (false, false) => CollinearDisjoint,
    };
  }

  if o1 != o2 && o3 != o4 {
    return if interior(a, cd, tolerance) {
      StartOnOther
    } else if interior(b, cd, tolerance) {
      EndOnOther
    } else if interior(c, ab, tolerance) {
      OtherStartOn
    } else if interior(d, ab, tolerance) {
      OtherEndOn
    } else {
      Crossing
    };
  }

  Miss
}

impl<T: Scalar> Relate for LineSegment<T> {
  type Relationship = SegmentRelationship;

  fn relate(&self, other: &LineSegment<T>, tolerance: Tolerance) -> SegmentRelationship {
    segment_segment(self, other, tolerance)
  }
}

impl<T: Scalar> LineSegment<T> {
  /// The single point where the two segments meet, if there is exactly one.
  ///
  /// Collinear overlaps have no single contact point and return `None`, except where
  /// endpoint coincidence takes priority (then the shared endpoint is returned) or one
  /// segment is degenerate (then its point is returned).
  ///
  /// ```rust
  /// # use relate2d::data::{LineSegment, Point};
  /// # use relate2d::Tolerance;
  /// let ab = LineSegment::from((0, 0)..(10, 10));
  /// let cd = LineSegment::from((0, 10)..(10, 0));
  /// assert_eq!(ab.intersection_point(&cd, Tolerance::EXACT), Some(Point::new([5.0, 5.0])));
  /// ```
  pub fn intersection_point(
    &self,
    other: &LineSegment<T>,
    tolerance: Tolerance,
  ) -> Option<Point<f64>> {
    match segment_segment(self, other, tolerance) {
      CollinearDisjoint | Miss | CollinearStartOverlap | CollinearEndOverlap => None,
      SharedStartpoint | StartMeetsOtherEnd | StartOnOther => Some(self.start.to_f64()),
      EndMeetsOtherStart | SharedEndpoint | EndOnOther => Some(self.end.to_f64()),
      OtherStartOn => Some(other.start.to_f64()),
      OtherEndOn => Some(other.end.to_f64()),
      CollinearContainedBy | CollinearEqual if self.is_degenerate() => Some(self.start.to_f64()),
      CollinearContains if other.is_degenerate() => Some(other.start.to_f64()),
      CollinearContainedBy | CollinearContains | CollinearEqual => None,
      Crossing => line_crossing(&self.to_f64(), &other.to_f64()),
    }
  }
}

// Intersection of the supporting lines. Parallel lines have no unique crossing.
fn line_crossing(ab: &LineSegment<f64>, cd: &LineSegment<f64>) -> Option<Point<f64>> {
  let r = ab.direction();
  let s = cd.direction();
  let denominator = r.cross(&s);
  if denominator == 0.0 {
    return None;
  }
  let t = (cd.start - ab.start).cross(&s) / denominator;
  Some(ab.start + r * t)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::classify;
  use crate::testing::*;

  use claims::{assert_none, assert_some_eq};
  use test_strategy::proptest;

  fn seg(a: (i32, i32), b: (i32, i32)) -> LineSegment<i32> {
    LineSegment::from(a..b)
  }

  fn rel(ab: LineSegment<i32>, cd: LineSegment<i32>) -> SegmentRelationship {
    classify(&ab, &cd, Tolerance::EXACT)
  }

  #[test]
  fn endpoint_coincidence() {
    assert_eq!(rel(seg((0, 0), (2, 2)), seg((0, 0), (2, -2))), SharedStartpoint);
    assert_eq!(rel(seg((0, 0), (2, 2)), seg((2, -2), (0, 0))), StartMeetsOtherEnd);
    assert_eq!(rel(seg((0, 0), (2, 2)), seg((2, 2), (4, 0))), EndMeetsOtherStart);
    assert_eq!(rel(seg((0, 0), (2, 2)), seg((4, 0), (2, 2))), SharedEndpoint);
    assert_eq!(rel(seg((0, 0), (2, 2)), seg((2, 2), (0, 0))), CollinearEqual);
    assert_eq!(rel(seg((0, 0), (2, 2)), seg((0, 0), (2, 2))), CollinearEqual);
    // Collinear overlap from a common endpoint still reports the endpoint.
    assert_eq!(rel(seg((0, 0), (4, 0)), seg((0, 0), (2, 0))), SharedStartpoint);
  }

  #[test]
  fn crossings() {
    assert_eq!(rel(seg((0, 0), (10, 10)), seg((0, 10), (10, 0))), Crossing);
    assert_eq!(rel(seg((5, 5), (10, 0)), seg((0, 0), (10, 10))), StartOnOther);
    assert_eq!(rel(seg((10, 0), (5, 5)), seg((0, 0), (10, 10))), EndOnOther);
    assert_eq!(rel(seg((0, 0), (10, 10)), seg((5, 5), (10, 0))), OtherStartOn);
    assert_eq!(rel(seg((0, 0), (10, 10)), seg((10, 0), (5, 5))), OtherEndOn);
    assert_eq!(rel(seg((0, 0), (10, 10)), seg((0, 1), (4, 20))), Miss);
    assert_eq!(rel(seg((0, 0), (10, 0)), seg((0, 1), (10, 1))), Miss);
  }

  #[test]
  fn collinear() {
    assert_eq!(rel(seg((0, 0), (10, 0)), seg((11, 0), (15, 0))), CollinearDisjoint);
    assert_eq!(rel(seg((2, 0), (4, 0)), seg((0, 0), (10, 0))), CollinearContainedBy);
    assert_eq!(rel(seg((0, 0), (10, 0)), seg((4, 0), (2, 0))), CollinearContains);
    assert_eq!(rel(seg((5, 0), (15, 0)), seg((0, 0), (10, 0))), CollinearStartOverlap);
    assert_eq!(rel(seg((15, 0), (5, 0)), seg((0, 0), (10, 0))), CollinearEndOverlap);
  }

  #[test]
  fn degenerate_segments() {
    let dot = seg((3, 3), (3, 3));
    assert_eq!(rel(dot, seg((0, 0), (6, 6))), CollinearContainedBy);
    assert_eq!(rel(seg((0, 0), (6, 6)), dot), CollinearContains);
    assert_eq!(rel(dot, seg((0, 1), (6, 7))), Miss);
    assert_eq!(rel(dot, dot), CollinearEqual);
    assert_some_eq!(
      dot.intersection_point(&seg((0, 0), (6, 6)), Tolerance::EXACT),
      Point::new([3.0, 3.0])
    );
    assert_some_eq!(dot.intersection_point(&dot, Tolerance::EXACT), Point::new([3.0, 3.0]));
  }

  #[test]
  fn intersection_points() {
    let tol = Tolerance::EXACT;
    assert_some_eq!(
      seg((0, 0), (10, 10)).intersection_point(&seg((0, 10), (10, 0)), tol),
      Point::new([5.0, 5.0])
    );
    assert_some_eq!(
      seg((0, 0), (2, 2)).intersection_point(&seg((2, 2), (4, 0)), tol),
      Point::new([2.0, 2.0])
    );
    assert_some_eq!(
      seg((0, 0), (10, 10)).intersection_point(&seg((10, 0), (5, 5)), tol),
      Point::new([5.0, 5.0])
    );
    assert_none!(seg((0, 0), (10, 0)).intersection_point(&seg((5, 0), (15, 0)), tol));
    assert_none!(seg((0, 0), (10, 0)).intersection_point(&seg((0, 1), (10, 1)), tol));
  }

  #[test]
  fn tolerance_merges_near_touches() {
    let ab = LineSegment::from((0.0, 0.0)..(10.0, 0.0));
    let cd = LineSegment::from((10.0 + 1e-12, 1e-12)..(12.0, 5.0));
    assert_eq!(classify(&ab, &cd, Tolerance::EXACT), Miss);
    assert_eq!(classify(&ab, &cd, Tolerance::new(1e-9)), EndMeetsOtherStart);
  }

  #[test]
  fn display_and_ordering() {
    assert_eq!(SharedStartpoint.to_string(), "SharedStartpoint");
    assert!(Crossing > Miss);
    assert!(CollinearDisjoint < Miss);
    assert_eq!(CollinearContains.relationship(), Relationship::Contains);
  }

  #[proptest]
  fn reflexive(#[strategy(grid_segment(-8..8))] segment: LineSegment<i32>) {
    assert_eq!(rel(segment, segment), CollinearEqual);
    assert_eq!(rel(segment, segment.reverse()), CollinearEqual);
  }

  #[proptest]
  fn swap_consistency(
    #[strategy(grid_segment(0..6))] ab: LineSegment<i32>,
    #[strategy(grid_segment(0..6))] cd: LineSegment<i32>,
  ) {
    let forward = rel(ab, cd);
    let backward = rel(cd, ab);
    match forward.flipped() {
      Some(expected) => assert_eq!(backward, expected),
      None => assert!(matches!(backward, CollinearStartOverlap | CollinearEndOverlap)),
    }
    assert_eq!(forward.relationship(), backward.relationship().inverse());
  }

  #[proptest]
  fn intersection_point_lies_on_both(
    #[strategy(grid_segment(0..8))] ab: LineSegment<i32>,
    #[strategy(grid_segment(0..8))] cd: LineSegment<i32>,
  ) {
    let tol = Tolerance::new(1e-9);
    if let Some(pt) = ab.intersection_point(&cd, Tolerance::EXACT) {
      assert!(ab.to_f64().contains_point(&pt, tol));
      assert!(cd.to_f64().contains_point(&pt, tol));
    }
  }
}
