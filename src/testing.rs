// Strategies for:
//  * points
//  * line segments
//  * circles and rectangles
// A Strategy is a way to generate a shrinkable value.
use crate::data::{Circle, LineSegment, Point, Rectangle, Vector};

use core::ops::Range;
use num_traits::Float;
use ordered_float::NotNan;
use proptest::arbitrary::*;
use proptest::collection::*;
use proptest::prelude::*;
use proptest::strategy::*;

type Mapped<I, O> = Map<StrategyFor<I>, fn(_: I) -> O>;

///////////////////////////////////////////////////////////////////////////////
// Arbitrary point

impl<T: Arbitrary + Copy> Arbitrary for Point<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
{
  type Strategy = Map<(T::Strategy, T::Strategy), fn(_: (T, T)) -> Point<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    (any_with::<T>(params.clone()), any_with::<T>(params)).prop_map(|(x, y)| Point::new([x, y]))
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary Vector

impl<T: Arbitrary + Copy> Arbitrary for Vector<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
{
  type Strategy = Mapped<Point<T>, Vector<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<Point<T>>(params).prop_map(|pt| pt.into())
  }
}

///////////////////////////////////////////////////////////////////////////////
// Arbitrary line segment

impl<T: Arbitrary + Copy> Arbitrary for LineSegment<T>
where
  T::Strategy: Clone,
  T::Parameters: Clone,
{
  type Strategy = Mapped<(Point<T>, Point<T>), LineSegment<T>>;
  type Parameters = T::Parameters;
  fn arbitrary_with(params: Self::Parameters) -> Self::Strategy {
    any_with::<(Point<T>, Point<T>)>((params.clone(), params))
      .prop_map(|(start, end)| LineSegment::new(start, end))
  }
}

// Arbitrary isn't defined for NotNan.
pub fn any_nn() -> impl Strategy<Value = Point<NotNan<f64>>> {
  any::<Point<f64>>().prop_filter_map("Check for NaN", |pt| {
    Some(Point::new([
      NotNan::new(rem_float(pt.array[0])).ok()?,
      NotNan::new(rem_float(pt.array[1])).ok()?,
    ]))
  })
}

// Float representation: mantissa * 2^exponent * sign
// This function changes the exponent modulo 250. This rules out extreme
// numbers (very large, very small, very close to zero) whose squared
// distances would overflow to infinity.
fn rem_float(f: f64) -> f64 {
  let (mantissa, exponent, sign) = f.integer_decode();
  ((mantissa as f64) * 2f64.powi(i32::from(exponent) % 250)).copysign(f64::from(sign))
}

pub fn any_64() -> impl Strategy<Value = Point<i64>> {
  any::<Point<i64>>()
}

pub fn any_8() -> impl Strategy<Value = Point<i8>> {
  any::<Point<i8>>()
}

///////////////////////////////////////////////////////////////////////////////
// Small integer grids
//
// Random inputs almost never produce touching or collinear configurations.
// Drawing coordinates from a tiny grid makes those cases common.

pub fn grid_point(range: Range<i32>) -> impl Strategy<Value = Point<i32>> {
  (range.clone(), range).prop_map(|(x, y)| Point::new([x, y]))
}

pub fn grid_segment(range: Range<i32>) -> impl Strategy<Value = LineSegment<i32>> {
  (grid_point(range.clone()), grid_point(range)).prop_map(|(a, b)| LineSegment::new(a, b))
}

pub fn grid_segments(
  range: Range<i32>,
  count: Range<usize>,
) -> impl Strategy<Value = Vec<LineSegment<i32>>> {
  vec(grid_segment(range), count)
}

pub fn grid_circle(range: Range<i32>, radius: Range<i32>) -> impl Strategy<Value = Circle<i32>> {
  (grid_point(range), radius).prop_map(|(center, radius)| Circle::new(center, radius))
}

pub fn grid_rectangle(range: Range<i32>) -> impl Strategy<Value = Rectangle<i32>> {
  (grid_point(range.clone()), grid_point(range)).prop_map(|(a, b)| Rectangle::new(a, b))
}

pub fn grid_points(
  range: Range<i32>,
  count: Range<usize>,
) -> impl Strategy<Value = Vec<Point<i32>>> {
  vec(grid_point(range), count)
}

#[cfg(test)]
mod tests {
  use super::*;

  use test_strategy::proptest;

  #[proptest]
  fn nn_points_are_finite(#[strategy(any_nn())] pt: Point<NotNan<f64>>) {
    assert!(pt.array[0].is_finite());
    assert!(pt.array[1].is_finite());
  }

  #[proptest]
  fn grid_points_stay_on_grid(#[strategy(grid_point(0..4))] pt: Point<i32>) {
    assert!((0..4).contains(&pt.array[0]));
    assert!((0..4).contains(&pt.array[1]));
  }
}
