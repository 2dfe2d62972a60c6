use std::ops::Add;
use std::ops::Index;
use std::ops::Neg;

use crate::data::Point;
use crate::Scalar;

/// Displacement between two points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Vector<T>(pub [T; 2]);

impl<T: Scalar> Vector<T> {
  pub fn dot(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[0] + self.0[1] * other.0[1]
  }

  /// z-component of the 3D cross product; positive when `other` is counter-clockwise
  /// from `self`.
  pub fn cross(&self, other: &Vector<T>) -> T {
    self.0[0] * other.0[1] - self.0[1] * other.0[0]
  }

  pub fn squared_magnitude(&self) -> T {
    self.dot(self)
  }

  pub fn magnitude(&self) -> f64 {
    let [x, y] = [self.0[0].as_f64(), self.0[1].as_f64()];
    x.hypot(y)
  }

  pub fn to_f64(&self) -> Vector<f64> {
    Vector([self.0[0].as_f64(), self.0[1].as_f64()])
  }
}

impl<T> Index<usize> for Vector<T> {
  type Output = T;
  fn index(&self, index: usize) -> &T {
    self.0.index(index)
  }
}

impl<T> From<Point<T>> for Vector<T> {
  fn from(point: Point<T>) -> Vector<T> {
    Vector(point.array)
  }
}

impl<T> Add<Vector<T>> for Vector<T>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn add(self: Vector<T>, other: Vector<T>) -> Self::Output {
    Vector([self.0[0] + other.0[0], self.0[1] + other.0[1]])
  }
}

impl<T: Neg<Output = T> + Copy> Neg for Vector<T> {
  type Output = Vector<T>;
  fn neg(self) -> Vector<T> {
    Vector([-self.0[0], -self.0[1]])
  }
}

mod mul;
mod sub;
