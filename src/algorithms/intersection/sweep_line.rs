//! Sweep-line intersection detection.
//!
//! A vertical line sweeps the plane from left to right. The event queue is seeded with
//! every segment endpoint and enriched with intersection events as neighbouring
//! segments are discovered to cross ahead of the sweep. The status holds the segments
//! currently cut by the sweep line, ordered bottom to top at the sweep position.
//!
//! # High-level workflow
//! 1. **Event queue** – An indexed binary heap ordered by x, then y, then event kind
//!    (start before intersection before end). Pending intersection events are keyed by
//!    their segment pair so they can be cancelled once the pair is reported. All events
//!    at the same point are popped together and handled as one batch.
//! 2. **Status structure** – A treap over the active segments, ordered by their y-value
//!    at the sweep x. It is only ever searched at the current event point, where the
//!    stored order is still valid. Segments passing through that point tie and are
//!    ordered by slope, which is their order just right of the point.
//! 3. **Processing** – The segments through the event point form a contiguous run of
//!    the status, found by one search. They are taken out together with the segments
//!    ending there, then the survivors and the segments starting there are inserted
//!    again at the new sweep position. This reverses every crossing at the point. Only
//!    the pairs that just became neighbours are tested; a pair meeting ahead of the
//!    sweep gets an intersection event.
//! 4. **Reporting** – All segments touching the event point are paired up, and every
//!    candidate pair is confirmed with [`LineSegment::intersection_point`], the same
//!    test the [`naive`](super::naive) detector runs, so the two report identical pairs
//!    and points.
//!
//! Coordinates are converted to `f64` once up front. Candidate gathering (which active
//! segments pass through an event point, which status values tie) uses a slack scaled
//! to the input's magnitude so rounding in the computed crossing points cannot drop a
//! candidate; confirmation always uses the caller's tolerance.
//!
//! # Testing guidance
//! - **Common cases** – Random segments where crossings are easy to compare against
//!   the quadratic baseline.
//! - **Special cases** – Shared endpoints, vertical segments and events where more
//!   than two segments meet at the same point. These stress the event tie-breaking.
//! - **Tricky cases** – An endpoint sitting exactly on another segment, and crossings
//!   that only become neighbours after an earlier swap.
//! - **Property checks** – Compare against [`naive`](super::naive) on small grids.
use std::cmp::Ordering;
use std::collections::{BTreeMap, HashSet};

use super::event_queue::{EventKind, EventQueue, Owner};
use super::treap::Treap;
use super::{pair_key, Intersections, PairKey};
use crate::data::{LineSegment, Point};
use crate::{Scalar, Tolerance, TotalOrd};

/// Find all line segment intersections using a sweep line.
///
/// Returns every pair of segments that meet in a single point, together with the
/// distinct intersection points. Collinear overlaps are not reported.
///
/// ```rust
/// # use relate2d::algorithms::intersection::sweep_line::segment_intersections;
/// # use relate2d::data::{LineSegment, Point};
/// # use relate2d::Tolerance;
/// let segments = vec![
///   LineSegment::from((0, 0)..(10, 10)),
///   LineSegment::from((0, 10)..(10, 0)),
///   LineSegment::from((20, 20)..(30, 30)),
/// ];
/// let found = segment_intersections(&segments, Tolerance::EXACT);
/// assert_eq!(found.points, vec![Point::new([5.0, 5.0])]);
/// assert_eq!(found.pairs, vec![(0, 1)]);
/// ```
///
/// # Time complexity
/// $O((n+k) \log n)$ expected, where $k$ counts the intersecting pairs.
pub fn segment_intersections<T: Scalar>(
  segments: &[LineSegment<T>],
  tolerance: Tolerance,
) -> Intersections {
  let segments: Vec<Segment> = segments
    .iter()
    .enumerate()
    .map(|(index, segment)| Segment::new(index, segment.to_f64()))
    .collect();
  let slack = sweep_slack(&segments, tolerance);

  let mut queue = EventQueue::default();
  for segment in &segments {
    queue.push(segment.left, EventKind::Start, Owner::Segment(segment.index));
    queue.push(segment.right, EventKind::End, Owner::Segment(segment.index));
  }

  let mut status = Status::new(&segments, slack);
  let mut processor = PairProcessor {
    segments: &segments,
    tolerance,
    found: BTreeMap::new(),
    misses: HashSet::new(),
  };
  let mut events = 0_usize;
  let mut widest = 0_usize;

  while let Some(first) = queue.pop() {
    let point = first.point;
    let mut batch = vec![first];
    while queue
      .peek()
      .is_some_and(|next| next.point.total_cmp(&point) == Ordering::Equal)
    {
      batch.extend(queue.pop());
    }
    events += batch.len();

    status.set_sweep_point(point);
    let mut crossing = status.through();
    let mut starting = Vec::new();
    let mut ending = Vec::new();
    for event in &batch {
      match (event.kind, event.owner) {
        (EventKind::Start, Owner::Segment(index)) => starting.push(index),
        (EventKind::End, Owner::Segment(index)) => ending.push(index),
        (_, Owner::Pair((a, b))) => {
          crossing.extend([a, b].into_iter().filter(|&index| status.contains(index)));
        }
        _ => {}
      }
    }
    crossing.sort_unstable();
    crossing.dedup();
    ending.sort_unstable();
    log::trace!(
      "{} events at {}: {} starting, {} ending, {} through, {} pending",
      batch.len(),
      point,
      starting.len(),
      ending.len(),
      crossing.len(),
      queue.len()
    );

    let mut touching: Vec<usize> = crossing
      .iter()
      .chain(&starting)
      .chain(&ending)
      .copied()
      .collect();
    touching.sort_unstable();
    touching.dedup();
    for_each_pair(&touching, |pair| processor.report(pair, &mut queue));

    for &index in crossing.iter().chain(&ending) {
      status.remove(index);
    }
    let entering: Vec<usize> = crossing
      .into_iter()
      .chain(starting)
      .filter(|index| ending.binary_search(index).is_err())
      .collect();
    for &index in &entering {
      status.insert(index);
    }
    widest = widest.max(status.len());

    if entering.is_empty() {
      if let Some((below, above)) = status.straddling() {
        processor.process(pair_key(below, above), &point, &mut queue);
      }
    }
    for &index in &entering {
      let neighbours = [status.pred(index), status.succ(index)];
      for other in neighbours.into_iter().flatten() {
        processor.process(pair_key(index, other), &point, &mut queue);
      }
    }
  }

  log::debug!(
    "sweep over {} segments processed {} events with at most {} active and found {} \
     intersecting pairs",
    segments.len(),
    events,
    widest,
    processor.found.len()
  );
  Intersections::from_pairs(processor.found, tolerance)
}

// Relative slack for candidate gathering, never tighter than the caller's epsilon.
fn sweep_slack(segments: &[Segment], tolerance: Tolerance) -> Tolerance {
  let magnitude = segments
    .iter()
    .flat_map(|segment| [segment.left, segment.right])
    .flat_map(|point| point.array)
    .map(f64::abs)
    .fold(1.0_f64, f64::max);
  Tolerance::new(tolerance.epsilon().max(1e-9 * magnitude))
}

fn for_each_pair<F>(items: &[usize], mut f: F)
where
  F: FnMut(PairKey),
{
  for i in 0..items.len() {
    for j in (i + 1)..items.len() {
      f(pair_key(items[i], items[j]));
    }
  }
}

struct PairProcessor<'s> {
  segments: &'s [Segment],
  tolerance: Tolerance,
  found: BTreeMap<PairKey, Point<f64>>,
  misses: HashSet<PairKey>,
}

impl PairProcessor<'_> {
  fn is_settled(&self, pair: PairKey) -> bool {
    self.found.contains_key(&pair) || self.misses.contains(&pair)
  }

  fn confirm(&mut self, pair: PairKey) -> Option<Point<f64>> {
    let (a, b) = pair;
    let point = self.segments[a]
      .line
      .intersection_point(&self.segments[b].line, self.tolerance);
    match point {
      Some(point) => {
        self.found.insert(pair, point);
      }
      None => {
        self.misses.insert(pair);
      }
    }
    point
  }

  // Both segments touch the current event point, so any pending event for the pair is
  // at this point too.
  fn report(&mut self, pair: PairKey, queue: &mut EventQueue) {
    if !self.is_settled(pair) {
      self.confirm(pair);
    }
    if self.found.contains_key(&pair) && queue.cancel(pair).is_some() {
      log::trace!("cancelled {:?}", pair);
    }
  }

  // The segments just became neighbours in the status.
  fn process(&mut self, pair: PairKey, current: &Point<f64>, queue: &mut EventQueue) {
    if self.is_settled(pair) {
      return;
    }
    if let Some(point) = self.confirm(pair) {
      if point.total_cmp(current) == Ordering::Greater && queue.schedule(point, pair) {
        log::trace!("scheduled {:?} at {}", pair, point);
      }
    }
  }
}

/// Active segments in bottom-to-top order at the sweep point.
struct Status<'s> {
  tree: Treap,
  order: SweepOrder<'s>,
}

impl<'s> Status<'s> {
  fn new(segments: &'s [Segment], slack: Tolerance) -> Self {
    Status {
      tree: Treap::new(segments.len()),
      order: SweepOrder {
        segments,
        slack,
        current: Point::new([f64::NEG_INFINITY, f64::NEG_INFINITY]),
      },
    }
  }

  fn set_sweep_point(&mut self, point: Point<f64>) {
    self.order.current = point;
  }

  fn len(&self) -> usize {
    self.tree.len()
  }

  fn contains(&self, segment: usize) -> bool {
    self.tree.contains(segment)
  }

  fn insert(&mut self, segment: usize) {
    let order = &self.order;
    self.tree.insert(segment, |a, b| order.cmp(a, b) == Ordering::Less);
  }

  fn remove(&mut self, segment: usize) {
    self.tree.remove(segment);
  }

  fn pred(&self, segment: usize) -> Option<usize> {
    self.tree.pred(segment)
  }

  fn succ(&self, segment: usize) -> Option<usize> {
    self.tree.succ(segment)
  }

  // First segment at or above the sweep point.
  fn lowest_not_below(&self) -> Option<usize> {
    self.tree.first_not(|segment| self.order.is_below(segment))
  }

  /// Active segments passing through the sweep point. They sit next to each other in
  /// the status, right after the last segment below the point.
  fn through(&self) -> Vec<usize> {
    let mut found = Vec::new();
    let mut cursor = self.lowest_not_below();
    while let Some(segment) = cursor {
      if !self.order.passes_through(segment) {
        break;
      }
      found.push(segment);
      cursor = self.tree.succ(segment);
    }
    found
  }

  /// The segments right below and right above the sweep point.
  fn straddling(&self) -> Option<(usize, usize)> {
    let above = self.lowest_not_below()?;
    let below = self.tree.pred(above)?;
    Some((below, above))
  }

  #[cfg(test)]
  fn in_order(&self) -> Vec<usize> {
    let mut out = Vec::new();
    let mut cursor = self.tree.first_not(|_| false);
    while let Some(segment) = cursor {
      out.push(segment);
      cursor = self.tree.succ(segment);
    }
    out
  }
}

struct SweepOrder<'s> {
  segments: &'s [Segment],
  slack: Tolerance,
  current: Point<f64>,
}

impl SweepOrder<'_> {
  fn value(&self, segment: usize) -> f64 {
    self.segments[segment].value_at(&self.current)
  }

  fn passes_through(&self, segment: usize) -> bool {
    self.slack.approx_eq(self.value(segment), self.current.array[1])
  }

  fn is_below(&self, segment: usize) -> bool {
    let value = self.value(segment);
    value < self.current.array[1] && !self.slack.approx_eq(value, self.current.array[1])
  }

  // Segments through the sweep point compare by slope, i.e. by height just past it.
  fn cmp(&self, a: usize, b: usize) -> Ordering {
    let by_value = if self.passes_through(a) && self.passes_through(b) {
      Ordering::Equal
    } else {
      self.value(a).total_cmp(&self.value(b))
    };
    by_value
      .then_with(|| {
        self.segments[a]
          .slope()
          .total_cmp(&self.segments[b].slope())
      })
      .then(a.cmp(&b))
  }
}

#[derive(Debug, Clone, Copy)]
struct Segment {
  index: usize,
  line: LineSegment<f64>,
  left: Point<f64>,
  right: Point<f64>,
}

impl Segment {
  fn new(index: usize, line: LineSegment<f64>) -> Self {
    let (left, right) = line.lexicographic_endpoints();
    Segment {
      index,
      line,
      left,
      right,
    }
  }

  fn is_vertical(&self) -> bool {
    self.left.array[0] == self.right.array[0]
  }

  /// Height of the segment at the sweep x. Vertical segments sit at the sweep point.
  fn value_at(&self, sweep: &Point<f64>) -> f64 {
    if self.is_vertical() {
      return sweep.array[1];
    }
    let x = sweep.array[0];
    if x <= self.left.array[0] {
      return self.left.array[1];
    }
    if x >= self.right.array[0] {
      return self.right.array[1];
    }
    self.left.array[1] + (x - self.left.array[0]) * self.slope()
  }

  fn slope(&self) -> f64 {
    if self.is_vertical() {
      return f64::INFINITY;
    }
    (self.right.array[1] - self.left.array[1]) / (self.right.array[0] - self.left.array[0])
  }
}
