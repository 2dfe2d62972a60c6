use std::f64::consts::PI;

use super::{Point, Rectangle, Vector};
use crate::Scalar;

/// Circle given by its center and radius.
///
/// The radius is stored as given. A negative radius is accepted; classifiers compare
/// against it verbatim, so such a circle contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Circle<T> {
  pub center: Point<T>,
  pub radius: T,
}

impl<T> Circle<T> {
  pub const fn new(center: Point<T>, radius: T) -> Circle<T> {
    Circle { center, radius }
  }

  pub fn center(&self) -> &Point<T> {
    &self.center
  }

  pub fn radius(&self) -> &T {
    &self.radius
  }
}

impl<T: Scalar> Circle<T> {
  pub fn area(&self) -> f64 {
    let r = self.radius.as_f64();
    PI * r * r
  }

  pub fn circumference(&self) -> f64 {
    2.0 * PI * self.radius.as_f64()
  }

  /// Axis-aligned bounds. Computed in `f64`: `center ± radius` can leave the range of
  /// an integral coordinate type.
  pub fn bounding_box(&self) -> Rectangle<f64> {
    let circle = self.to_f64();
    let offset = Vector([circle.radius, circle.radius]);
    Rectangle::new(circle.center - offset, circle.center + offset)
  }

  pub fn to_f64(&self) -> Circle<f64> {
    Circle::new(self.center.to_f64(), self.radius.as_f64())
  }
}

impl<T: std::fmt::Display> std::fmt::Display for Circle<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "circle {} r={}", self.center, self.radius)
  }
}
