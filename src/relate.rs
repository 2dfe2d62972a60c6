//! Pairwise relationships between primitives.
//!
//! Every ordered pair of [`Point`], [`LineSegment`], [`Circle`] and [`Rectangle`]
//! implements [`Relate`]. The outcome is a closed enum whose variants are ordered from
//! weak (miss, disjoint) to strong (contains, equal), so `rel > Miss` reads as "touches
//! in any way".
//!
//! Pairs with a dedicated enum (point/segment, segment/segment, point/circle,
//! segment/circle, circle/circle) return that enum in both argument orders. The enum
//! always describes the pair from the point of view of the "smaller" primitive. The
//! remaining pairs, including everything involving a rectangle, return the general
//! [`Relationship`], and swapping the arguments swaps `Contains` with `ContainedBy`.
//!
//! [`Point`]: crate::data::Point
//! [`LineSegment`]: crate::data::LineSegment
//! [`Circle`]: crate::data::Circle
//! [`Rectangle`]: crate::data::Rectangle
use crate::Tolerance;

mod circle;
mod point;
mod rectangle;
mod segment;

pub use circle::{CircleCircle, PointCircle, SegmentCircle};
pub use point::PointSegment;
pub use segment::SegmentRelationship;

/// Coarse relationship shared by every pair of primitives.
///
/// `ContainedBy` means the left-hand primitive lies inside the right-hand one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Relationship {
  Disjoint,
  Intersection,
  ContainedBy,
  Contains,
  Equal,
}

impl Relationship {
  /// The same relationship seen from the other primitive.
  #[must_use]
  pub fn inverse(self) -> Relationship {
    match self {
      Relationship::ContainedBy => Relationship::Contains,
      Relationship::Contains => Relationship::ContainedBy,
      other => other,
    }
  }
}

impl std::fmt::Display for Relationship {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      Relationship::Disjoint => write!(f, "Disjoint"),
      Relationship::Intersection => write!(f, "Intersection"),
      Relationship::ContainedBy => write!(f, "ContainedBy"),
      Relationship::Contains => write!(f, "Contains"),
      Relationship::Equal => write!(f, "Equal"),
    }
  }
}

pub trait Relate<Rhs = Self> {
  type Relationship: Copy + Ord + std::fmt::Debug;

  fn relate(&self, other: &Rhs, tolerance: Tolerance) -> Self::Relationship;
}

/// Classify how `a` relates to `b`.
///
/// ```rust
/// # use relate2d::data::{Circle, LineSegment, Point, Rectangle};
/// # use relate2d::{classify, Relationship, SegmentCircle, Tolerance};
/// let circle = Circle::new(Point::new([5, 5]), 3);
/// let chord = LineSegment::from((5, 8)..(5, 2));
/// assert_eq!(
///   classify(&circle, &chord, Tolerance::EXACT),
///   SegmentCircle::BothEndsOnCircumference
/// );
///
/// let square = Rectangle::new(Point::new([0, 0]), Point::new([10, 10]));
/// assert_eq!(
///   classify(&Point::new([5, 5]), &square, Tolerance::EXACT),
///   Relationship::ContainedBy
/// );
/// ```
pub fn classify<A, B>(a: &A, b: &B, tolerance: Tolerance) -> A::Relationship
where
  A: Relate<B>,
{
  a.relate(b, tolerance)
}
