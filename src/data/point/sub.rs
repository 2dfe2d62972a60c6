use std::ops::Sub;

use super::Point;
use crate::data::Vector;

// point - point = vector
impl<T> Sub<Point<T>> for Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self: Point<T>, other: Point<T>) -> Self::Output {
    Vector([self.array[0] - other.array[0], self.array[1] - other.array[1]])
  }
}

// &point - &point = vector
impl<'a, 'b, T> Sub<&'a Point<T>> for &'b Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self: &'b Point<T>, other: &'a Point<T>) -> Self::Output {
    *self - *other
  }
}

// point - vector = point
impl<T> Sub<Vector<T>> for Point<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Point<T>;

  fn sub(self: Point<T>, other: Vector<T>) -> Self::Output {
    Point::new([self.array[0] - other.0[0], self.array[1] - other.0[1]])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sub_points() {
    let p = Point::new([5, 7]);
    let q = Point::new([2, 3]);
    assert_eq!(p - q, Vector([3, 4]));
    assert_eq!(&q - &p, Vector([-3, -4]));
    assert_eq!(p - Vector([5, 7]), Point::new([0, 0]));
  }
}
