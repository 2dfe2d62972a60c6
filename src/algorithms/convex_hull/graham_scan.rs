use crate::data::Point;
use crate::{Orientation, Scalar, TotalOrd};

// https://en.wikipedia.org/wiki/Graham_scan

// Properties:
//    No panics.
//    Every output point is an input point.
//    No input point lies outside the output polygon.
/// $O(n \log n)$ Convex hull of a set of points.
///
/// [Graham scan][wiki] algorithm for finding the smallest convex polygon which
/// contains all the given points. The hull is returned in counter-clockwise order,
/// starting at the lowest point (ties broken by lowest x). Only strict corners are
/// kept: duplicates and points in the middle of a hull edge are dropped.
///
/// Inputs with fewer than three points have no hull and are returned unchanged.
///
/// # Examples
///
/// ```rust
/// # use relate2d::algorithms::convex_hull;
/// # use relate2d::data::Point;
/// let pts = vec![
///   Point::new([0, 0]),
///   Point::new([4, 0]),
///   Point::new([2, 1]),
///   Point::new([4, 4]),
///   Point::new([0, 4]),
///   Point::new([2, 4]),
/// ];
/// assert_eq!(
///   convex_hull(pts),
///   vec![
///     Point::new([0, 0]),
///     Point::new([4, 0]),
///     Point::new([4, 4]),
///     Point::new([0, 4]),
///   ]
/// );
/// ```
///
/// ```rust
/// # use relate2d::algorithms::convex_hull;
/// # use relate2d::data::Point;
/// let pair = vec![Point::new([1, 1]), Point::new([0, 0])];
/// assert_eq!(convex_hull(pair.clone()), pair);
/// ```
///
/// [wiki]: https://en.wikipedia.org/wiki/Graham_scan
pub fn convex_hull<T>(mut pts: Vec<Point<T>>) -> Vec<Point<T>>
where
  T: Scalar,
{
  if pts.len() < 3 {
    return pts;
  }
  let input_len = pts.len();
  let Some(smallest) = smallest_point(&pts) else {
    return pts;
  };

  pts.sort_unstable_by(|a, b| {
    smallest
      .ccw_cmp_around(a, b)
      .then_with(|| smallest.cmp_distance_to(a, b))
  });
  pts.dedup();

  // Points on the final ray out of the pivot are visited farthest first, so that the
  // wrap-around back to the pivot walks inwards along the hull edge.
  let last_ray = pts
    .iter()
    .rposition(|pt| !smallest.orientation(&pts[pts.len() - 1], pt).is_colinear())
    .map_or(pts.len(), |idx| idx + 1);
  pts[last_ray..].reverse();

  // Slide a window of three over the (cyclic) sequence. Whenever the window fails to
  // turn counter-clockwise its middle point is dropped and the window moves back three
  // places, since the removal can expose concave triples further back.
  let mut idx = 0;
  while idx < pts.len() && pts.len() >= 3 {
    let n = pts.len();
    let (a, b, c) = (idx % n, (idx + 1) % n, (idx + 2) % n);
    if pts[a].orientation(&pts[b], &pts[c]) == Orientation::CounterClockWise {
      idx += 1;
    } else {
      pts.remove(b);
      idx = idx.saturating_sub(3);
    }
  }

  log::debug!(
    "graham scan: {} input points, {} hull vertices",
    input_len,
    pts.len()
  );
  pts
}

// Lowest y, then lowest x.
// O(n)
fn smallest_point<T>(pts: &[Point<T>]) -> Option<Point<T>>
where
  T: Scalar,
{
  pts
    .iter()
    .min_by(|a, b| (a.y_coord(), a.x_coord()).total_cmp(&(b.y_coord(), b.x_coord())))
    .copied()
}
