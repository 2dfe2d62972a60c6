use super::circle::{point_circle, segment_circle};
use super::point::point_segment;
use super::segment::segment_segment;
use super::{Relate, Relationship};
use crate::data::{Circle, LineSegment, Point, Rectangle};
use crate::{PointCircle, PointSegment, Scalar, SegmentCircle, SegmentRelationship, Tolerance};

// Every rectangle classifier first rejects primitives whose bounding boxes do not
// overlap, then works edge by edge.

fn point_rectangle<T: Scalar>(
  pt: &Point<T>,
  rect: &Rectangle<T>,
  tolerance: Tolerance,
) -> Relationship {
  if !rect.contains_point_inclusive(pt, tolerance) {
    return Relationship::Disjoint;
  }
  let on_edge = rect
    .edges()
    .iter()
    .any(|edge| point_segment(pt, edge, tolerance) > PointSegment::Miss);
  if on_edge {
    Relationship::Intersection
  } else {
    Relationship::ContainedBy
  }
}

fn segment_rectangle<T: Scalar>(
  segment: &LineSegment<T>,
  rect: &Rectangle<T>,
  tolerance: Tolerance,
) -> Relationship {
  if !segment.bounding_box().overlaps(rect, tolerance) {
    return Relationship::Disjoint;
  }
  let touches_edge = rect
    .edges()
    .iter()
    .any(|edge| segment_segment(segment, edge, tolerance) > SegmentRelationship::Miss);
  if touches_edge {
    Relationship::Intersection
  } else if rect.contains_point_strict(&segment.start, tolerance)
    && rect.contains_point_strict(&segment.end, tolerance)
  {
    Relationship::ContainedBy
  } else {
    Relationship::Disjoint
  }
}

fn circle_rectangle<T: Scalar>(
  circle: &Circle<T>,
  rect: &Rectangle<T>,
  tolerance: Tolerance,
) -> Relationship {
  if !circle.bounding_box().overlaps(&rect.to_f64(), tolerance) {
    return Relationship::Disjoint;
  }
  let corners_inside = rect
    .corners()
    .iter()
    .all(|corner| point_circle(corner, circle, tolerance) == PointCircle::Inside);
  if corners_inside {
    return Relationship::Contains;
  }
  let radius = circle.radius.as_f64();
  let edges = rect.edges();
  let clear_of_edges = edges
    .iter()
    .all(|edge| tolerance.definitely_lt(radius, edge.distance_to_point(&circle.center)));
  if rect.contains_point_strict(&circle.center, tolerance) && clear_of_edges {
    return Relationship::ContainedBy;
  }
  let touches_edge = edges
    .iter()
    .any(|edge| segment_circle(edge, circle, tolerance) > SegmentCircle::Miss);
  if touches_edge {
    Relationship::Intersection
  } else {
    Relationship::Disjoint
  }
}

fn rectangle_rectangle<T: Scalar>(
  a: &Rectangle<T>,
  b: &Rectangle<T>,
  tolerance: Tolerance,
) -> Relationship {
  if tolerance.points_eq(a.min(), b.min()) && tolerance.points_eq(a.max(), b.max()) {
    Relationship::Equal
  } else if !a.overlaps(b, tolerance) {
    Relationship::Disjoint
  } else if b.contains_point_strict(a.min(), tolerance)
    && b.contains_point_strict(a.max(), tolerance)
  {
    Relationship::ContainedBy
  } else if a.contains_point_strict(b.min(), tolerance)
    && a.contains_point_strict(b.max(), tolerance)
  {
    Relationship::Contains
  } else {
    Relationship::Intersection
  }
}

impl<T: Scalar> Relate<Rectangle<T>> for Point<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &Rectangle<T>, tolerance: Tolerance) -> Relationship {
    point_rectangle(self, other, tolerance)
  }
}

impl<T: Scalar> Relate<Rectangle<T>> for LineSegment<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &Rectangle<T>, tolerance: Tolerance) -> Relationship {
    segment_rectangle(self, other, tolerance)
  }
}

impl<T: Scalar> Relate<Rectangle<T>> for Circle<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &Rectangle<T>, tolerance: Tolerance) -> Relationship {
    circle_rectangle(self, other, tolerance)
  }
}

impl<T: Scalar> Relate for Rectangle<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &Rectangle<T>, tolerance: Tolerance) -> Relationship {
    rectangle_rectangle(self, other, tolerance)
  }
}

impl<T: Scalar> Relate<Point<T>> for Rectangle<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &Point<T>, tolerance: Tolerance) -> Relationship {
    point_rectangle(other, self, tolerance).inverse()
  }
}

impl<T: Scalar> Relate<LineSegment<T>> for Rectangle<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &LineSegment<T>, tolerance: Tolerance) -> Relationship {
    segment_rectangle(other, self, tolerance).inverse()
  }
}

impl<T: Scalar> Relate<Circle<T>> for Rectangle<T> {
  type Relationship = Relationship;

  fn relate(&self, other: &Circle<T>, tolerance: Tolerance) -> Relationship {
    circle_rectangle(other, self, tolerance).inverse()
  }
}
