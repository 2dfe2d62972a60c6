use std::cmp::Ordering;

use crate::Scalar;

#[derive(PartialEq, Eq, PartialOrd, Ord, Debug, Copy, Clone, Hash)]
pub enum Orientation {
  CounterClockWise,
  ClockWise,
  CoLinear,
}
use Orientation::*;

impl Orientation {
  /// Determine the direction you have to turn if you walk from `p1`
  /// to `p2` to `p3`.
  ///
  /// The result is the sign of `(p2.x−p1.x)*(p3.y−p1.y) − (p3.x−p1.x)*(p2.y−p1.y)`,
  /// twice the signed area of the triangle. Only the sign is used so the test is exact:
  /// fixed-precision types (i8,i16,i32,i64,etc) never overflow, and floating-point
  /// types go through an adaptive exact predicate.
  ///
  /// Every classifier in this crate routes its turn tests through this function (or
  /// through [`Tolerance::orientation`](crate::Tolerance::orientation), which falls back
  /// to it when epsilon is zero).
  ///
  /// # Examples
  ///
  /// ```rust
  /// # use relate2d::data::Point;
  /// # use relate2d::Orientation;
  /// let p1 = Point::new([ 0, 0 ]);
  /// let p2 = Point::new([ 0, 1 ]); // One unit above p1.
  /// // (0,0) -> (0,1) -> (0,2) == Orientation::CoLinear
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 0, 2 ])).is_colinear());
  /// // (0,0) -> (0,1) -> (-1,2) == Orientation::CounterClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ -1, 2 ])).is_ccw());
  /// // (0,0) -> (0,1) -> (1,2) == Orientation::ClockWise
  /// assert!(Orientation::new(&p1, &p2, &Point::new([ 1, 2 ])).is_cw());
  /// ```
  pub fn new<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Orientation
  where
    T: Scalar,
  {
    match T::cmp_turn(p1, p2, p3) {
      Ordering::Less => Orientation::ClockWise,
      Ordering::Equal => Orientation::CoLinear,
      Ordering::Greater => Orientation::CounterClockWise,
    }
  }

  /// Twice the signed area of `p1, p2, p3`, evaluated in `f64`.
  ///
  /// Positive for counter-clockwise triples. Unlike [`Orientation::new`] this is subject
  /// to rounding; it is what a non-zero tolerance snaps against.
  pub fn twice_signed_area<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> f64
  where
    T: Scalar,
  {
    let [x1, y1] = [p1[0].as_f64(), p1[1].as_f64()];
    let [x2, y2] = [p2[0].as_f64(), p2[1].as_f64()];
    let [x3, y3] = [p3[0].as_f64(), p3[1].as_f64()];
    (x2 - x1) * (y3 - y1) - (x3 - x1) * (y2 - y1)
  }

  pub fn is_colinear(self) -> bool {
    matches!(self, Orientation::CoLinear)
  }

  pub fn is_ccw(self) -> bool {
    matches!(self, Orientation::CounterClockWise)
  }

  pub fn is_cw(self) -> bool {
    matches!(self, Orientation::ClockWise)
  }

  #[must_use]
  pub fn then(self, other: Orientation) -> Orientation {
    match self {
      Orientation::CoLinear => other,
      _ => self,
    }
  }

  #[must_use]
  pub fn reverse(self) -> Orientation {
    match self {
      Orientation::CounterClockWise => Orientation::ClockWise,
      Orientation::ClockWise => Orientation::CounterClockWise,
      Orientation::CoLinear => Orientation::CoLinear,
    }
  }

  /// Counter-clockwise angular order of `p2` and `p3` around `p1`, starting at the
  /// positive x-axis. Points on the same ray compare equal.
  pub fn ccw_cmp_around<T>(p1: &[T; 2], p2: &[T; 2], p3: &[T; 2]) -> Ordering
  where
    T: Scalar,
  {
    // Upper half-plane including the positive x-axis comes first.
    let lower = |d: &[T; 2]| d[1] < p1[1] || (d[1] == p1[1] && d[0] < p1[0]);
    match (lower(p2), lower(p3)) {
      (false, true) => Ordering::Less,
      (true, false) => Ordering::Greater,
      _ => match Orientation::new(p1, p2, p3) {
        CounterClockWise => Ordering::Less,
        ClockWise => Ordering::Greater,
        CoLinear => Ordering::Equal,
      },
    }
  }
}

impl std::fmt::Display for Orientation {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      CounterClockWise => write!(f, "CounterClockWise"),
      ClockWise => write!(f, "ClockWise"),
      CoLinear => write!(f, "CoLinear"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::data::Point;
  use crate::testing::*;

  use proptest::prelude::*;

  proptest! {
    #[test]
    fn orientation_reverse(pt1 in any_64(), pt2 in any_64(), pt3 in any_64()) {
      let abc = Orientation::new(&pt1, &pt2, &pt3);
      let cba = Orientation::new(&pt3, &pt2, &pt1);
      prop_assert_eq!(abc, cba.reverse())
    }

    #[test]
    fn orientation_reverse_f64(pt1 in any_nn(), pt2 in any_nn(), pt3 in any_nn()) {
      let abc = Orientation::new(&pt1, &pt2, &pt3);
      let cba = Orientation::new(&pt3, &pt2, &pt1);
      prop_assert_eq!(abc, cba.reverse())
    }

    #[test]
    fn orientation_rotation(pt1 in any_8(), pt2 in any_8(), pt3 in any_8()) {
      let abc = Orientation::new(&pt1, &pt2, &pt3);
      prop_assert_eq!(abc, Orientation::new(&pt2, &pt3, &pt1));
      prop_assert_eq!(abc, Orientation::new(&pt3, &pt1, &pt2));
    }

    #[test]
    fn small_areas_agree_with_predicate(pt1 in any_8(), pt2 in any_8(), pt3 in any_8()) {
      let area = Orientation::twice_signed_area(&pt1, &pt2, &pt3);
      let expected = match Orientation::new(&pt1, &pt2, &pt3) {
        CounterClockWise => area > 0.0,
        ClockWise => area < 0.0,
        CoLinear => area == 0.0,
      };
      prop_assert!(expected);
    }
  }

  #[test]
  fn test_turns() {
    assert_eq!(
      Orientation::new(
        &Point::new([0, 0]),
        &Point::new([1, 1]),
        &Point::new([2, 2])
      ),
      CoLinear
    );
    assert_eq!(
      Orientation::new(
        &Point::new([0.0, 0.0]),
        &Point::new([1.0, 1.0]),
        &Point::new([2.0, 2.0])
      ),
      CoLinear
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([2, 2])),
      ClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 1]), &Point::new([-2, 2])),
      CounterClockWise
    );
    assert_eq!(
      Point::new([0, 0]).orientation(&Point::new([0, 0]), &Point::new([0, 0])),
      CoLinear
    );
  }

  #[test]
  fn unit_1() {
    assert_eq!(
      Point::new([1, 0]).orientation(&Point::new([0, 6]), &Point::new([0, 8])),
      ClockWise
    );
    assert_eq!(
      Point::new([-12_i8, -126]).orientation(&Point::new([-12, -126]), &Point::new([0, -126])),
      CoLinear
    );
  }

  #[test]
  fn ccw_order_around_origin() {
    let origin = [0, 0];
    assert_eq!(
      Orientation::ccw_cmp_around(&origin, &[1, 0], &[0, 1]),
      Ordering::Less
    );
    assert_eq!(
      Orientation::ccw_cmp_around(&origin, &[-1, 0], &[0, -1]),
      Ordering::Less
    );
    assert_eq!(
      Orientation::ccw_cmp_around(&origin, &[0, -1], &[1, 1]),
      Ordering::Greater
    );
    assert_eq!(
      Orientation::ccw_cmp_around(&origin, &[2, 2], &[1, 1]),
      Ordering::Equal
    );
  }

  #[test]
  fn display() {
    assert_eq!(ClockWise.to_string(), "ClockWise");
    assert_eq!(CoLinear.then(CounterClockWise), CounterClockWise);
  }
}
