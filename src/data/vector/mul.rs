use std::ops::Mul;

use super::Vector;

// vector * scalar = vector
impl<T> Mul<T> for Vector<T>
where
  T: Mul<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn mul(self: Vector<T>, scalar: T) -> Self::Output {
    Vector([self.0[0] * scalar, self.0[1] * scalar])
  }
}
