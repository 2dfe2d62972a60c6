use std::ops::Add;
use std::ops::AddAssign;

use super::Point;
use crate::data::Vector;

// point + vector = point
impl<T> Add<Vector<T>> for Point<T>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Point<T>;

  fn add(self: Point<T>, other: Vector<T>) -> Self::Output {
    Point::new([self.array[0] + other.0[0], self.array[1] + other.0[1]])
  }
}

// point + &vector = point
impl<T> Add<&Vector<T>> for Point<T>
where
  T: Add<T, Output = T> + Copy,
{
  type Output = Point<T>;

  fn add(self: Point<T>, other: &Vector<T>) -> Self::Output {
    self + *other
  }
}

// point += vector
impl<T> AddAssign<Vector<T>> for Point<T>
where
  T: AddAssign<T> + Copy,
{
  fn add_assign(&mut self, other: Vector<T>) {
    self.array[0] += other.0[0];
    self.array[1] += other.0[1];
  }
}
