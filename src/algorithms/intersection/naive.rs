use std::collections::BTreeMap;

use super::{Intersections, PairKey};
use crate::data::{LineSegment, Point};
use crate::{Scalar, Tolerance};

/// Find all line segment intersections by testing every pair.
///
/// Segments are compared as `f64` copies so the result is directly comparable with
/// [`sweep_line::segment_intersections`](super::sweep_line::segment_intersections).
///
/// # Time complexity
/// $O(n^2)$
pub fn segment_intersections<T: Scalar>(
  segments: &[LineSegment<T>],
  tolerance: Tolerance,
) -> Intersections {
  let lines: Vec<LineSegment<f64>> = segments.iter().map(LineSegment::to_f64).collect();
  let found: BTreeMap<PairKey, Point<f64>> = pairs(lines.len())
    .filter_map(|(a, b)| {
      let point = lines[a].intersection_point(&lines[b], tolerance)?;
      Some(((a, b), point))
    })
    .collect();
  Intersections::from_pairs(found, tolerance)
}

fn pairs(n: usize) -> impl Iterator<Item = PairKey> {
  (0..n).flat_map(move |b| (0..b).map(move |a| (a, b)))
}
