use array_init::array_init;
use rand::distributions::{Distribution, Standard};
use rand::Rng;
use std::cmp::Ordering;
use std::ops::Deref;
use std::ops::Index;
use std::ops::Neg;

use super::{LineSegment, Vector};
use crate::{Orientation, Scalar, Tolerance, TotalOrd};

/// Immutable 2D point. Every transform returns a new point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Point<T> {
  pub array: [T; 2],
}

// Random sampling.
impl<T> Distribution<Point<T>> for Standard
where
  Standard: Distribution<T>,
{
  fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Point<T> {
    Point {
      array: array_init(|_| rng.gen()),
    }
  }
}

impl<T> Point<T> {
  pub const fn new(array: [T; 2]) -> Point<T> {
    Point { array }
  }

  pub fn x_coord(&self) -> &T {
    &self.array[0]
  }

  pub fn y_coord(&self) -> &T {
    &self.array[1]
  }

  pub fn cast<U, F>(&self, f: F) -> Point<U>
  where
    T: Clone,
    F: Fn(T) -> U,
  {
    Point {
      array: array_init(|i| f(self.array[i].clone())),
    }
  }
}

impl<T: Scalar> Point<T> {
  pub fn zero() -> Self {
    Point::new([T::zero(), T::zero()])
  }

  pub fn to_f64(&self) -> Point<f64> {
    self.cast(Scalar::as_f64)
  }

  #[must_use]
  pub fn negate(&self) -> Point<T> {
    -*self
  }

  #[must_use]
  pub fn translate(&self, delta: &Vector<T>) -> Point<T> {
    *self + delta
  }

  /// Scale the position of this point relative to `reference` by `factor`.
  #[must_use]
  pub fn scale_from(&self, reference: &Point<T>, factor: T) -> Point<T> {
    *reference + (*self - *reference) * factor
  }

  /// Rotate counter-clockwise around `pivot` by `radians`.
  pub fn rotate_about(&self, pivot: &Point<T>, radians: f64) -> Point<f64> {
    let (sin, cos) = radians.sin_cos();
    let pivot = pivot.to_f64();
    let d = self.to_f64() - pivot;
    Point::new([
      pivot.array[0] + d.0[0] * cos - d.0[1] * sin,
      pivot.array[1] + d.0[0] * sin + d.0[1] * cos,
    ])
  }

  // Computed in f64 so integral coordinates cannot overflow.
  pub fn squared_euclidean_distance(&self, rhs: &Point<T>) -> f64 {
    let dx = self.array[0].as_f64() - rhs.array[0].as_f64();
    let dy = self.array[1].as_f64() - rhs.array[1].as_f64();
    dx * dx + dy * dy
  }

  pub fn distance_to(&self, rhs: &Point<T>) -> f64 {
    self.squared_euclidean_distance(rhs).sqrt()
  }

  pub fn cmp_distance_to(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    self
      .squared_euclidean_distance(p)
      .total_cmp(&self.squared_euclidean_distance(q))
  }

  pub fn orientation(&self, q: &Point<T>, r: &Point<T>) -> Orientation {
    Orientation::new(&self.array, &q.array, &r.array)
  }

  /// Counter-clockwise angular order of `p` and `q` around this point.
  pub fn ccw_cmp_around(&self, p: &Point<T>, q: &Point<T>) -> Ordering {
    Orientation::ccw_cmp_around(&self.array, &p.array, &q.array)
  }

  pub fn approx_eq(&self, other: &Point<T>, tolerance: Tolerance) -> bool {
    tolerance.points_eq(self, other)
  }

  /// Closest point to `self` on `segment`.
  ///
  /// The projection onto the supporting line is clamped to the segment. A degenerate
  /// (zero-length) segment projects everything onto its single point.
  pub fn project_onto(&self, segment: &LineSegment<T>) -> Point<f64> {
    let start = segment.start.to_f64();
    let direction = segment.end.to_f64() - start;
    let length_squared = direction.squared_magnitude();
    if length_squared == 0.0 {
      return start;
    }
    let t = (self.to_f64() - start).dot(&direction) / length_squared;
    start + direction * t.clamp(0.0, 1.0)
  }
}

impl<T: TotalOrd> TotalOrd for Point<T> {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (&self.array[0], &self.array[1]).total_cmp(&(&other.array[0], &other.array[1]))
  }
}

impl<T> Index<usize> for Point<T> {
  type Output = T;
  fn index(&self, key: usize) -> &T {
    self.array.index(key)
  }
}

impl<T> From<(T, T)> for Point<T> {
  fn from(point: (T, T)) -> Point<T> {
    Point {
      array: [point.0, point.1],
    }
  }
}

impl<T> From<Vector<T>> for Point<T> {
  fn from(vector: Vector<T>) -> Point<T> {
    Point { array: vector.0 }
  }
}

impl<T> Deref for Point<T> {
  type Target = [T; 2];
  fn deref(&self) -> &[T; 2] {
    &self.array
  }
}

impl<T: Neg<Output = T> + Copy> Neg for Point<T> {
  type Output = Point<T>;
  fn neg(self) -> Point<T> {
    Point::new([-self.array[0], -self.array[1]])
  }
}

impl<T: std::fmt::Display> std::fmt::Display for Point<T> {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "({}, {})", self.array[0], self.array[1])
  }
}

mod add;
mod sub;

#[cfg(test)]
pub mod tests {
  use super::*;
  use crate::testing::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn squared_euclidean_distance_fuzz(pt1 in any_64(), pt2 in any_64()) {
      let _ = pt1.squared_euclidean_distance(&pt2);
    }

    #[test]
    fn cmp_around_fuzz_i8(pt1 in any_8(), pt2 in any_8(), pt3 in any_8()) {
      let _ = pt1.ccw_cmp_around(&pt2, &pt3);
    }

    #[test]
    fn distance_is_symmetric(pt1 in any_8(), pt2 in any_8()) {
      prop_assert_eq!(pt1.distance_to(&pt2), pt2.distance_to(&pt1));
    }

    #[test]
    fn projection_stays_on_segment(pt in any_8(), a in any_8(), b in any_8()) {
      let segment = LineSegment::new(a, b);
      let closest = pt.project_onto(&segment);
      let tol = Tolerance::new(1e-6);
      prop_assert!(segment.to_f64().contains_point(&closest, tol));
    }
  }

  #[test]
  fn algebra() {
    let p = Point::new([2, 3]);
    assert_eq!(p.negate(), Point::new([-2, -3]));
    assert_eq!(p.translate(&Vector([1, -1])), Point::new([3, 2]));
    assert_eq!(p.scale_from(&Point::new([1, 1]), 3), Point::new([4, 7]));
    assert_eq!(p.squared_euclidean_distance(&Point::new([5, 7])), 25.0);
    assert_eq!(p.distance_to(&Point::new([5, 7])), 5.0);
    assert_eq!(p.to_string(), "(2, 3)");
  }

  #[test]
  fn rotation() {
    let rotated =
      Point::new([1.0, 0.0]).rotate_about(&Point::new([0.0, 0.0]), std::f64::consts::FRAC_PI_2);
    assert!(rotated.approx_eq(&Point::new([0.0, 1.0]), Tolerance::new(1e-12)));
  }

  #[test]
  fn projection() {
    let segment = LineSegment::from((0, 0)..(10, 0));
    assert_eq!(Point::new([4, 7]).project_onto(&segment), Point::new([4.0, 0.0]));
    assert_eq!(Point::new([-4, 7]).project_onto(&segment), Point::new([0.0, 0.0]));
    assert_eq!(Point::new([14, -2]).project_onto(&segment), Point::new([10.0, 0.0]));
    let degenerate = LineSegment::from((3, 3)..(3, 3));
    assert_eq!(Point::new([9, 9]).project_onto(&degenerate), Point::new([3.0, 3.0]));
  }

  #[test]
  fn sampled_points_are_reproducible() {
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    let a: Point<i16> = SmallRng::seed_from_u64(7).gen();
    let b: Point<i16> = SmallRng::seed_from_u64(7).gen();
    assert_eq!(a, b);
  }

  #[test]
  fn cmp_distance() {
    let origin = Point::new([0, 0]);
    assert_eq!(
      origin.cmp_distance_to(&Point::new([1, 1]), &Point::new([0, 2])),
      Ordering::Less
    );
  }
}
