use std::cmp::Ordering;

use crate::data::Point;
use crate::{Orientation, Scalar};

/// Comparison tolerance threaded through every predicate and classifier.
///
/// Two scalar quantities whose absolute difference is below `epsilon` compare equal.
/// The same rule applies to coordinates, distances and signed areas. An epsilon of
/// zero (the default) means exact comparison.
///
/// ```rust
/// # use relate2d::Tolerance;
/// let tol = Tolerance::new(1e-9);
/// assert!(tol.approx_eq(0.1 + 0.2, 0.3));
/// assert!(!Tolerance::EXACT.approx_eq(0.1 + 0.2, 0.3));
/// // Negative epsilons are normalised to exact comparison.
/// assert_eq!(Tolerance::new(-1.0), Tolerance::EXACT);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Tolerance {
  epsilon: f64,
}

impl Tolerance {
  pub const EXACT: Tolerance = Tolerance { epsilon: 0.0 };

  /// Negative and NaN values are treated as zero.
  pub fn new(epsilon: f64) -> Tolerance {
    if epsilon > 0.0 {
      Tolerance { epsilon }
    } else {
      Tolerance::EXACT
    }
  }

  #[must_use]
  pub fn with_epsilon(self, epsilon: f64) -> Tolerance {
    Tolerance::new(epsilon)
  }

  pub fn epsilon(&self) -> f64 {
    self.epsilon
  }

  pub fn is_exact(&self) -> bool {
    self.epsilon == 0.0
  }

  pub fn approx_eq(&self, a: f64, b: f64) -> bool {
    a == b || (a - b).abs() < self.epsilon
  }

  pub fn approx_zero(&self, a: f64) -> bool {
    self.approx_eq(a, 0.0)
  }

  /// `a < b` and the two are not within epsilon of each other.
  pub fn definitely_lt(&self, a: f64, b: f64) -> bool {
    a < b && !self.approx_eq(a, b)
  }

  pub fn approx_le(&self, a: f64, b: f64) -> bool {
    a <= b || self.approx_eq(a, b)
  }

  pub fn approx_cmp(&self, a: f64, b: f64) -> Ordering {
    if self.approx_eq(a, b) {
      Ordering::Equal
    } else {
      a.total_cmp(&b)
    }
  }

  /// Equality of two coordinates. Integral inputs skip the floating path entirely
  /// unless a tolerance was configured.
  pub fn scalar_eq<T: Scalar>(&self, a: T, b: T) -> bool {
    a == b || (!self.is_exact() && self.approx_eq(a.as_f64(), b.as_f64()))
  }

  pub fn scalar_le<T: Scalar>(&self, a: T, b: T) -> bool {
    a <= b || self.scalar_eq(a, b)
  }

  pub fn points_eq<T: Scalar>(&self, p: &Point<T>, q: &Point<T>) -> bool {
    self.scalar_eq(p.array[0], q.array[0]) && self.scalar_eq(p.array[1], q.array[1])
  }

  /// Lexicographic (x, then y) comparison of two points under this tolerance.
  pub fn cmp_points(&self, p: &Point<f64>, q: &Point<f64>) -> Ordering {
    self
      .approx_cmp(p.array[0], q.array[0])
      .then_with(|| self.approx_cmp(p.array[1], q.array[1]))
  }

  /// Orientation of `p0 -> p1 -> p2`.
  ///
  /// With an exact tolerance this is [`Orientation::new`]. Otherwise twice the signed
  /// area is computed in floating point and snapped to [`Orientation::CoLinear`] when
  /// its magnitude is below epsilon.
  pub fn orientation<T: Scalar>(&self, p0: &Point<T>, p1: &Point<T>, p2: &Point<T>) -> Orientation {
    if self.is_exact() {
      return Orientation::new(p0, p1, p2);
    }
    let area = Orientation::twice_signed_area(p0, p1, p2);
    match self.approx_cmp(area, 0.0) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use test_strategy::proptest;

  #[test]
  fn negative_and_nan_epsilon_are_exact() {
    assert!(Tolerance::new(-0.5).is_exact());
    assert!(Tolerance::new(f64::NAN).is_exact());
    assert!(Tolerance::default().is_exact());
    assert_eq!(Tolerance::default().with_epsilon(0.25).epsilon(), 0.25);
  }

  #[test]
  fn strict_epsilon_boundary() {
    let tol = Tolerance::new(0.5);
    assert!(tol.approx_eq(1.0, 1.25));
    // Differences equal to epsilon are not "below" it.
    assert!(!tol.approx_eq(1.0, 1.5));
    assert!(tol.definitely_lt(1.0, 1.5));
    assert!(!tol.definitely_lt(1.0, 1.25));
    assert!(tol.approx_le(1.25, 1.0));
    assert_eq!(tol.approx_cmp(2.0, 1.75), Ordering::Equal);
    assert_eq!(tol.approx_cmp(2.0, 1.0), Ordering::Greater);
  }

  #[test]
  fn integral_points_compare_exactly() {
    let tol = Tolerance::EXACT;
    assert!(tol.points_eq(&Point::new([3, 4]), &Point::new([3, 4])));
    assert!(!tol.points_eq(&Point::new([3, 4]), &Point::new([3, 5])));
    assert!(Tolerance::new(1.5).points_eq(&Point::new([3, 4]), &Point::new([4, 5])));
  }

  #[test]
  fn snapped_orientation() {
    let p0 = Point::new([0.0, 0.0]);
    let p1 = Point::new([10.0, 0.0]);
    let p2 = Point::new([5.0, 1e-12]);
    assert_eq!(
      Tolerance::EXACT.orientation(&p0, &p1, &p2),
      Orientation::CounterClockWise
    );
    assert_eq!(
      Tolerance::new(1e-9).orientation(&p0, &p1, &p2),
      Orientation::CoLinear
    );
  }

  #[proptest]
  fn approx_eq_is_symmetric(a: f32, b: f32, eps: f32) {
    let tol = Tolerance::new(f64::from(eps));
    let (a, b) = (f64::from(a), f64::from(b));
    assert_eq!(tol.approx_eq(a, b), tol.approx_eq(b, a));
  }
}
