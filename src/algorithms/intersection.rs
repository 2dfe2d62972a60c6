//! Intersections among a set of line segments.
//!
//! Both detectors report the same thing: every pair of segments that meets in a single
//! point (see [`LineSegment::intersection_point`]) and the set of those points.
//! Collinear overlaps have no single contact point and are not reported.
//!
//! [`LineSegment::intersection_point`]: crate::data::LineSegment::intersection_point
use std::collections::BTreeMap;

use crate::data::Point;
use crate::{Tolerance, TotalOrd};

mod event_queue;
pub mod naive;
pub mod sweep_line;
mod treap;

/// Unordered pair of segment indices, smallest first.
pub type PairKey = (usize, usize);

pub(crate) fn pair_key(a: usize, b: usize) -> PairKey {
  if a < b {
    (a, b)
  } else {
    (b, a)
  }
}

/// Result of a multi-segment intersection search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Intersections {
  /// Distinct intersection points, sorted by x then y. Points within epsilon of each
  /// other are merged into the first one.
  pub points: Vec<Point<f64>>,
  /// Every intersecting pair of input indices, sorted.
  pub pairs: Vec<PairKey>,
}

impl Intersections {
  pub(crate) fn from_pairs(
    found: BTreeMap<PairKey, Point<f64>>,
    tolerance: Tolerance,
  ) -> Intersections {
    let pairs: Vec<PairKey> = found.keys().copied().collect();
    let mut points: Vec<Point<f64>> = found.into_values().collect();
    points.sort_by(TotalOrd::total_cmp);

    let mut merged: Vec<Point<f64>> = Vec::with_capacity(points.len());
    for pt in points {
      // `merged` is sorted by x, so only its tail can be within epsilon of `pt`.
      let duplicate = merged
        .iter()
        .rev()
        .take_while(|kept| tolerance.approx_eq(kept.array[0], pt.array[0]))
        .any(|kept| tolerance.points_eq(kept, &pt));
      if !duplicate {
        merged.push(pt);
      }
    }
    Intersections {
      points: merged,
      pairs,
    }
  }

  /// Number of distinct intersection points.
  pub fn len(&self) -> usize {
    self.points.len()
  }

  pub fn is_empty(&self) -> bool {
    self.points.is_empty()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn merges_nearby_points() {
    let found: BTreeMap<PairKey, Point<f64>> = [
      ((0, 1), Point::new([1.0, 1.0])),
      ((0, 2), Point::new([1.0 + 1e-12, 1.0])),
      ((1, 2), Point::new([1.0, 1.0 - 1e-12])),
      ((2, 3), Point::new([0.5, 7.0])),
    ]
    .into_iter()
    .collect();

    let exact = Intersections::from_pairs(found.clone(), Tolerance::EXACT);
    assert_eq!(exact.len(), 4);

    let merged = Intersections::from_pairs(found, Tolerance::new(1e-9));
    assert_eq!(merged.points, vec![Point::new([0.5, 7.0]), Point::new([1.0, 1.0 - 1e-12])]);
    assert_eq!(merged.pairs, vec![(0, 1), (0, 2), (1, 2), (2, 3)]);
  }

  #[test]
  fn pair_keys_are_ordered() {
    assert_eq!(pair_key(3, 1), (1, 3));
    assert_eq!(pair_key(1, 3), (1, 3));
  }
}
