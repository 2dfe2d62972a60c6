use std::cmp::Ordering;

use super::{Relate, Relationship};
use crate::data::{Circle, LineSegment, Point};
use crate::{Scalar, Tolerance};

// Slack for the rounding error in a computed projection when checking perpendicularity.
const PERPENDICULAR_SLACK: f64 = 1e-12;

/// How a point relates to a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointCircle {
  Outside,
  OnCircumference,
  Inside,
}

impl PointCircle {
  pub fn relationship(self) -> Relationship {
    match self {
      PointCircle::Outside => Relationship::Disjoint,
      PointCircle::OnCircumference => Relationship::Intersection,
      PointCircle::Inside => Relationship::ContainedBy,
    }
  }
}

impl std::fmt::Display for PointCircle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PointCircle::Outside => write!(f, "Outside"),
      PointCircle::OnCircumference => write!(f, "OnCircumference"),
      PointCircle::Inside => write!(f, "Inside"),
    }
  }
}

/// How a line segment relates to a circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SegmentCircle {
  Miss,
  /// Touches the circumference at a single interior point of the segment.
  Tangent,
  /// One endpoint on the circumference, the other outside the circle.
  OneEndOnCircumferenceOutside,
  /// Enters or leaves the circle through the circumference.
  Secant,
  /// One endpoint on the circumference, the other inside the circle.
  OneEndOnCircumferenceInside,
  BothEndsOnCircumference,
  /// Both endpoints strictly inside.
  Inside,
}

impl SegmentCircle {
  pub fn relationship(self) -> Relationship {
    match self {
      SegmentCircle::Miss => Relationship::Disjoint,
      SegmentCircle::Tangent
      | SegmentCircle::OneEndOnCircumferenceOutside
      | SegmentCircle::Secant
      | SegmentCircle::OneEndOnCircumferenceInside
      | SegmentCircle::BothEndsOnCircumference => Relationship::Intersection,
      SegmentCircle::Inside => Relationship::ContainedBy,
    }
  }
}

impl std::fmt::Display for SegmentCircle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      SegmentCircle::Miss => "Miss",
      SegmentCircle::Tangent => "Tangent",
      SegmentCircle::OneEndOnCircumferenceOutside => "OneEndOnCircumferenceOutside",
      SegmentCircle::Secant => "Secant",
      SegmentCircle::OneEndOnCircumferenceInside => "OneEndOnCircumferenceInside",
      SegmentCircle::BothEndsOnCircumference => "BothEndsOnCircumference",
      SegmentCircle::Inside => "Inside",
    };
    f.write_str(name)
  }
}

/// How the first circle relates to the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CircleCircle {
  Disjoint,
  ExternallyTangent,
  /// Circumferences cross at two points.
  Intersecting,
  InternallyTangent,
  ContainedBy,
  Contains,
  Equal,
}

impl CircleCircle {
  pub fn relationship(self) -> Relationship {
    match self {
      CircleCircle::Disjoint => Relationship::Disjoint,
      CircleCircle::ExternallyTangent
      | CircleCircle::Intersecting
      | CircleCircle::InternallyTangent => Relationship::Intersection,
      CircleCircle::ContainedBy => Relationship::ContainedBy,
      CircleCircle::Contains => Relationship::Contains,
      CircleCircle::Equal => Relationship::Equal,
    }
  }

  /// The same relationship seen from the other circle.
  #[must_use]
  pub fn inverse(self) -> CircleCircle {
    match self {
      CircleCircle::ContainedBy => CircleCircle::Contains,
      CircleCircle::Contains => CircleCircle::ContainedBy,
      other => other,
    }
  }
}

impl std::fmt::Display for CircleCircle {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    let name = match self {
      CircleCircle::Disjoint => "Disjoint",
      CircleCircle::ExternallyTangent => "ExternallyTangent",
      CircleCircle::Intersecting => "Intersecting",
      CircleCircle::InternallyTangent => "InternallyTangent",
      CircleCircle::ContainedBy => "ContainedBy",
      CircleCircle::Contains => "Contains",
      CircleCircle::Equal => "Equal",
    };
    f.write_str(name)
  }
}

// Distance from a point to the center compared with the radius. Exact mode compares
// squared quantities so integral input is decided without a square root.
fn cmp_to_radius<T: Scalar>(pt: &Point<T>, circle: &Circle<T>, tolerance: Tolerance) -> Ordering {
  let squared = pt.squared_euclidean_distance(&circle.center);
  let radius = circle.radius.as_f64();
  if tolerance.is_exact() {
    if radius < 0.0 {
      return Ordering::Greater;
    }
    squared.total_cmp(&(radius * radius))
  } else {
    tolerance.approx_cmp(squared.sqrt(), radius)
  }
}

pub(crate) fn point_circle<T: Scalar>(
  pt: &Point<T>,
  circle: &Circle<T>,
  tolerance: Tolerance,
) -> PointCircle {
  match cmp_to_radius(pt, circle, tolerance) {
    Ordering::Less => PointCircle::Inside,
    Ordering::Equal => PointCircle::OnCircumference,
    Ordering::Greater => PointCircle::Outside,
  }
}

pub(crate) fn segment_circle<T: Scalar>(
  segment: &LineSegment<T>,
  circle: &Circle<T>,
  tolerance: Tolerance,
) -> SegmentCircle {
  use PointCircle::*;
  let start = point_circle(&segment.start, circle, tolerance);
  let end = point_circle(&segment.end, circle, tolerance);
  match (start, end) {
    (Inside, Inside) => SegmentCircle::Inside,
    (OnCircumference, OnCircumference) => SegmentCircle::BothEndsOnCircumference,
    (OnCircumference, Inside) | (Inside, OnCircumference) => {
      SegmentCircle::OneEndOnCircumferenceInside
    }
    (OnCircumference, Outside) | (Outside, OnCircumference) => {
      SegmentCircle::OneEndOnCircumferenceOutside
    }
    (Inside, Outside) | (Outside, Inside) => SegmentCircle::Secant,
    (Outside, Outside) => closest_approach(&segment.to_f64(), circle, tolerance),
  }
}

// Both endpoints are outside. The segment meets the circle only if the foot of the
// perpendicular from the center lies on the segment and is close enough.
fn closest_approach<T: Scalar>(
  segment: &LineSegment<f64>,
  circle: &Circle<T>,
  tolerance: Tolerance,
) -> SegmentCircle {
  let center = circle.center.to_f64();
  let radius = circle.radius.as_f64();
  let direction = segment.direction();
  let length_squared = direction.squared_magnitude();
  if length_squared == 0.0 {
    return SegmentCircle::Miss;
  }
  let offset = center - segment.start;
  let t = offset.dot(&direction) / length_squared;
  if t < 0.0 || t > 1.0 {
    return SegmentCircle::Miss;
  }

  let cross = direction.cross(&offset);
  let ordering = if tolerance.is_exact() {
    if radius < 0.0 {
      Ordering::Greater
    } else {
      (cross * cross).total_cmp(&(radius * radius * length_squared))
    }
  } else {
    tolerance.approx_cmp(cross.abs() / length_squared.sqrt(), radius)
  };

  match ordering {
    Ordering::Less => SegmentCircle::Secant,
    Ordering::Equal => {
      let closest = segment.start + direction * t;
      let to_closest = closest - center;
      let scale = direction.magnitude() * to_closest.magnitude();
      let dot = direction.dot(&to_closest);
      if scale == 0.0 || tolerance.approx_zero(dot) || dot.abs() <= PERPENDICULAR_SLACK * scale {
        SegmentCircle::Tangent
      } else {
        SegmentCircle::Secant
      }
    }
    Ordering::Greater => SegmentCircle::Miss,
  }
}

pub(crate) fn circle_circle<T: Scalar>(
  a: &Circle<T>,
  b: &Circle<T>,
  tolerance: Tolerance,
) -> CircleCircle {
  let d = a.center.distance_to(&b.center);
  let (r1, r2) = (a.radius.as_f64(), b.radius.as_f64());
  let sum = r1 + r2;
  let difference = (r1 - r2).abs();

  if tolerance.approx_zero(d) && tolerance.approx_eq(r1, r2) {
    CircleCircle::Equal
  } else if tolerance.approx_eq(d, sum) {
    CircleCircle::ExternallyTangent
  } else if tolerance.approx_eq(d, difference) {
    CircleCircle::InternallyTangent
  } else if d > sum {
    CircleCircle::Disjoint
  } else if d < difference {
    if r1 < r2 {
      CircleCircle::ContainedBy
    } else {
      CircleCircle::Contains
    }
  } else {
    CircleCircle::Intersecting
  }
}

impl<T: Scalar> Relate<Circle<T>> for Point<T> {
  type Relationship = PointCircle;

  fn relate(&self, other: &Circle<T>, tolerance: Tolerance) -> PointCircle {
    point_circle(self, other, tolerance)
  }
}

impl<T: Scalar> Relate<Point<T>> for Circle<T> {
  type Relationship = PointCircle;

  fn relate(&self, other: &Point<T>, tolerance: Tolerance) -> PointCircle {
    point_circle(other, self, tolerance)
  }
}

impl<T: Scalar> Relate<Circle<T>> for LineSegment<T> {
  type Relationship = SegmentCircle;

  fn relate(&self, other: &Circle<T>, tolerance: Tolerance) -> SegmentCircle {
    segment_circle(self, other, tolerance)
  }
}

impl<T: Scalar> Relate<LineSegment<T>> for Circle<T> {
  type Relationship = SegmentCircle;

  fn relate(&self, other: &LineSegment<T>, tolerance: Tolerance) -> SegmentCircle {
    segment_circle(other, self, tolerance)
  }
}

impl<T: Scalar> Relate for Circle<T> {
  type Relationship = CircleCircle;

  fn relate(&self, other: &Circle<T>, tolerance: Tolerance) -> CircleCircle {
    circle_circle(self, other, tolerance)
  }
}
