use std::ops::Sub;

use super::Vector;

// vector - vector = vector
impl<T> Sub<Vector<T>> for Vector<T>
where
  T: Sub<T, Output = T> + Copy,
{
  type Output = Vector<T>;

  fn sub(self: Vector<T>, other: Vector<T>) -> Self::Output {
    Vector([self.0[0] - other.0[0], self.0[1] - other.0[1]])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn sub_vectors() {
    assert_eq!(Vector([5, 5]) - Vector([2, 7]), Vector([3, -2]));
  }
}
