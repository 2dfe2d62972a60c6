use std::cmp::Ordering;
use std::collections::HashMap;

use super::PairKey;
use crate::data::Point;

/// Kinds of sweep events. At a shared point starts are processed first and ends last,
/// so every segment touching that point is active while its pairs are examined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub(crate) enum EventKind {
  Start,
  Intersection,
  End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Owner {
  Segment(usize),
  Pair(PairKey),
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct SweepEvent {
  pub point: Point<f64>,
  pub kind: EventKind,
  pub owner: Owner,
  seq: u64,
}

impl SweepEvent {
  // x, then y, then kind, then insertion order.
  fn cmp_priority(&self, other: &SweepEvent) -> Ordering {
    self.point.array[0]
      .total_cmp(&other.point.array[0])
      .then_with(|| self.point.array[1].total_cmp(&other.point.array[1]))
      .then_with(|| self.kind.cmp(&other.kind))
      .then_with(|| self.seq.cmp(&other.seq))
  }
}

/// Binary min-heap of sweep events.
///
/// Intersection events are indexed by their segment pair, so a scheduled intersection
/// can be found and cancelled in $O(\log n)$.
#[derive(Debug, Default)]
pub(crate) struct EventQueue {
  heap: Vec<SweepEvent>,
  slots: HashMap<PairKey, usize>,
  next_seq: u64,
}

impl EventQueue {
  pub fn push(&mut self, point: Point<f64>, kind: EventKind, owner: Owner) {
    let event = SweepEvent {
      point,
      kind,
      owner,
      seq: self.next_seq,
    };
    self.next_seq += 1;
    let slot = self.heap.len();
    self.heap.push(event);
    self.track(slot);
    self.sift_up(slot);
  }

  /// Schedule the intersection of `pair` at `point`. A pair is scheduled at most once;
  /// returns `false` if it already was.
  pub fn schedule(&mut self, point: Point<f64>, pair: PairKey) -> bool {
    if self.is_scheduled(pair) {
      return false;
    }
    self.push(point, EventKind::Intersection, Owner::Pair(pair));
    true
  }

  pub fn is_scheduled(&self, pair: PairKey) -> bool {
    self.slots.contains_key(&pair)
  }

  /// Remove the pending intersection event for `pair`, if any.
  pub fn cancel(&mut self, pair: PairKey) -> Option<SweepEvent> {
    let slot = *self.slots.get(&pair)?;
    Some(self.remove_at(slot))
  }

  pub fn pop(&mut self) -> Option<SweepEvent> {
    if self.heap.is_empty() {
      None
    } else {
      Some(self.remove_at(0))
    }
  }

  pub fn peek(&self) -> Option<&SweepEvent> {
    self.heap.first()
  }

  pub fn len(&self) -> usize {
    self.heap.len()
  }

  #[cfg(test)]
  pub fn is_empty(&self) -> bool {
    self.heap.is_empty()
  }

  fn remove_at(&mut self, slot: usize) -> SweepEvent {
    let last = self.heap.len() - 1;
    self.swap(slot, last);
    let removed = self.heap.swap_remove(last);
    if let Owner::Pair(pair) = removed.owner {
      self.slots.remove(&pair);
    }
    if slot < self.heap.len() {
      self.sift_down(slot);
      self.sift_up(slot);
    }
    removed
  }

  fn less(&self, a: usize, b: usize) -> bool {
    self.heap[a].cmp_priority(&self.heap[b]) == Ordering::Less
  }

  fn sift_up(&mut self, mut slot: usize) {
    while slot > 0 {
      let parent = (slot - 1) / 2;
      if !self.less(slot, parent) {
        break;
      }
      self.swap(slot, parent);
      slot = parent;
    }
  }

  fn sift_down(&mut self, mut slot: usize) {
    loop {
      let left = 2 * slot + 1;
      let right = left + 1;
      let mut smallest = slot;
      if left < self.heap.len() && self.less(left, smallest) {
        smallest = left;
      }
      if right < self.heap.len() && self.less(right, smallest) {
        smallest = right;
      }
      if smallest == slot {
        break;
      }
      self.swap(slot, smallest);
      slot = smallest;
    }
  }

  fn swap(&mut self, a: usize, b: usize) {
    if a == b {
      return;
    }
    self.heap.swap(a, b);
    self.track(a);
    self.track(b);
  }

  fn track(&mut self, slot: usize) {
    if let Owner::Pair(pair) = self.heap[slot].owner {
      self.slots.insert(pair, slot);
    }
  }
}
