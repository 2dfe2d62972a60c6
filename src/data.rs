mod circle;
mod line_segment;
pub(crate) mod point;
mod rectangle;
mod vector;

pub use circle::Circle;
pub use line_segment::LineSegment;
pub use point::Point;
pub use rectangle::Rectangle;
pub use vector::Vector;

/// Where a point lies relative to a closed region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PointLocation {
  Inside,
  OnBoundary,
  Outside,
}

impl std::fmt::Display for PointLocation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      PointLocation::Inside => write!(f, "Inside"),
      PointLocation::OnBoundary => write!(f, "OnBoundary"),
      PointLocation::Outside => write!(f, "Outside"),
    }
  }
}
