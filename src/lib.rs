#![deny(clippy::cast_lossless)]
#![doc(test(no_crate_inject))]
//! Robust two-dimensional predicates and shape relationships.
//!
//! The crate is organised leaf to root:
//!
//! * [`Tolerance`] carries the one configurable option, `epsilon`, and is passed by
//!   value into every comparison.
//! * [`Orientation`] classifies an ordered point triple from the sign of twice its
//!   signed area.
//! * [`data`] holds the primitives: points, vectors, line segments, circles and
//!   axis-aligned rectangles.
//! * [`classify`] (backed by the [`Relate`] trait) maps any two primitives onto one
//!   outcome of a closed, ordered relationship enum.
//! * [`algorithms`] builds on those: Graham-scan convex hulls, a sweep-line
//!   multi-segment intersection detector and point-in-ring location.
//!
//! ```rust
//! # use relate2d::data::LineSegment;
//! # use relate2d::{classify, SegmentRelationship, Tolerance};
//! let ab = LineSegment::from((0, 0)..(10, 0));
//! let cd = LineSegment::from((11, 0)..(15, 0));
//! assert_eq!(
//!   classify(&ab, &cd, Tolerance::EXACT),
//!   SegmentRelationship::CollinearDisjoint
//! );
//! ```
use num_traits::{AsPrimitive, NumOps, One, Zero};
use ordered_float::{NotNan, OrderedFloat};
use std::cmp::Ordering;
use std::ops::{BitXor, Neg};

pub mod algorithms;
pub mod data;
mod orientation;
mod relate;
mod tolerance;

pub use orientation::Orientation;
pub use relate::{
  classify, CircleCircle, PointCircle, PointSegment, Relate, Relationship, SegmentCircle,
  SegmentRelationship,
};
pub use tolerance::Tolerance;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// A rectangle needs exactly four corners.
  #[error("expected 4 rectangle corners, got {0}")]
  CornerCount(usize),
  /// The corners do not describe a rectangle with edges parallel to the axes.
  #[error("rectangle corners are not axis-aligned")]
  NotAxisAligned,
}

pub trait TotalOrd {
  fn total_cmp(&self, other: &Self) -> Ordering;

  fn total_min(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::min_by(self, other, TotalOrd::total_cmp)
  }

  fn total_max(self, other: Self) -> Self
  where
    Self: Sized,
  {
    std::cmp::max_by(self, other, TotalOrd::total_cmp)
  }
}

impl<A: TotalOrd> TotalOrd for &A {
  fn total_cmp(&self, other: &Self) -> Ordering {
    (*self).total_cmp(*other)
  }
}

impl<A: TotalOrd, B: TotalOrd> TotalOrd for (A, B) {
  fn total_cmp(&self, other: &Self) -> Ordering {
    self
      .0
      .total_cmp(&other.0)
      .then_with(|| self.1.total_cmp(&other.1))
  }
}

/// Coordinate type accepted by every primitive.
///
/// Integral coordinates get an exact, overflow-free orientation test and never pay for
/// epsilon handling; floating coordinates use an adaptive exact predicate when the
/// tolerance is zero and snap to the tolerance otherwise.
pub trait Scalar:
  std::fmt::Debug
  + Copy
  + PartialOrd
  + NumOps<Self, Self>
  + Neg<Output = Self>
  + Zero
  + One
  + TotalOrd
{
  /// `true` for integer types. Exact comparisons never need a tolerance for these.
  const INTEGRAL: bool;

  /// Sign of `(q - p) × (r - p)`: `Greater` for a counter-clockwise turn.
  fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering;

  fn as_f64(self) -> f64;
}

macro_rules! fixed_precision {
  ( $ty:ty, $uty:ty, $long:ty, $ulong: ty ) => {
    impl TotalOrd for $ty {
      fn total_cmp(&self, other: &Self) -> Ordering {
        self.cmp(other)
      }
    }

    impl Scalar for $ty {
      const INTEGRAL: bool = true;

      fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
        // Absolute difference widened to the unsigned long type, plus its sign:
        // diff(a, b) = (c, sign) where a = if sign { b - c } else { b + c }
        fn diff(a: $ty, b: $ty) -> ($ulong, bool) {
          if b > a {
            (b.wrapping_sub(a) as $uty as $ulong, true)
          } else {
            (a.wrapping_sub(b) as $uty as $ulong, false)
          }
        }
        let (ux, ux_neg) = diff(q[0], p[0]);
        let (vy, vy_neg) = diff(r[1], p[1]);
        let ux_vy_neg = ux_neg.bitxor(vy_neg) && ux != 0 && vy != 0;
        let (uy, uy_neg) = diff(q[1], p[1]);
        let (vx, vx_neg) = diff(r[0], p[0]);
        let uy_vx_neg = uy_neg.bitxor(vx_neg) && uy != 0 && vx != 0;
        match (ux_vy_neg, uy_vx_neg) {
          (true, false) => Ordering::Less,
          (false, true) => Ordering::Greater,
          (true, true) => (uy * vx).cmp(&(ux * vy)),
          (false, false) => (ux * vy).cmp(&(uy * vx)),
        }
      }

      fn as_f64(self) -> f64 {
        self.as_()
      }
    }
  };
}

macro_rules! floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          <$ty>::total_cmp(self, other)
        }
      }

      impl Scalar for $ty {
        const INTEGRAL: bool = false;

        // Adaptive exact orientation from `geometry_predicates`; the sign is always
        // correct for finite input.
        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d_sign(
            [p[0].as_f64(), p[1].as_f64()],
            [q[0].as_f64(), q[1].as_f64()],
            [r[0].as_f64(), r[1].as_f64()],
          )
        }

        fn as_f64(self) -> f64 {
          self.as_()
        }
      }
    )*
  };
}

macro_rules! wrapped_floating_precision {
  ( $( $ty:ty ),* ) => {
    $(
      impl TotalOrd for $ty {
        fn total_cmp(&self, other: &Self) -> Ordering {
          self.cmp(other)
        }
      }

      impl Scalar for $ty {
        const INTEGRAL: bool = false;

        fn cmp_turn(p: &[Self; 2], q: &[Self; 2], r: &[Self; 2]) -> Ordering {
          orient2d_sign(
            [p[0].as_f64(), p[1].as_f64()],
            [q[0].as_f64(), q[1].as_f64()],
            [r[0].as_f64(), r[1].as_f64()],
          )
        }

        fn as_f64(self) -> f64 {
          self.into_inner().as_()
        }
      }
    )*
  };
}

fn orient2d_sign(p: [f64; 2], q: [f64; 2], r: [f64; 2]) -> Ordering {
  let orient = geometry_predicates::predicates::orient2d(p, q, r);
  if orient > 0.0 {
    Ordering::Greater
  } else if orient < 0.0 {
    Ordering::Less
  } else {
    Ordering::Equal
  }
}

fixed_precision!(i8, u8, i16, u16);
fixed_precision!(i16, u16, i32, u32);
fixed_precision!(i32, u32, i64, u64);
fixed_precision!(i64, u64, i128, u128);
fixed_precision!(isize, usize, i128, u128);
floating_precision!(f32, f64);
wrapped_floating_precision!(OrderedFloat<f32>, OrderedFloat<f64>, NotNan<f32>, NotNan<f64>);

#[cfg(test)]
pub mod testing;
