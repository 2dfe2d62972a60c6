use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, Copy, Default)]
struct Node {
  parent: Option<usize>,
  left: Option<usize>,
  right: Option<usize>,
  priority: u64,
  linked: bool,
}

/// Balanced search tree over the ids `0..capacity`, stored in an arena.
///
/// The tree does not know how its ids compare. Insertion and search take the order as a
/// closure, which lets the sweep compare segments at the current sweep position. The
/// caller must keep that order consistent with the in-order sequence already stored.
/// Removal, predecessor and successor only follow links, so they never consult it.
///
/// Priorities come from a seeded generator: the shape of the tree is reproducible.
#[derive(Debug)]
pub(crate) struct Treap {
  nodes: Vec<Node>,
  root: Option<usize>,
  len: usize,
}

impl Treap {
  pub fn new(capacity: usize) -> Treap {
    let mut rng = SmallRng::seed_from_u64(capacity as u64);
    let nodes = (0..capacity)
      .map(|_| Node {
        priority: rng.gen(),
        ..Node::default()
      })
      .collect();
    Treap {
      nodes,
      root: None,
      len: 0,
    }
  }

  pub fn len(&self) -> usize {
    self.len
  }

  pub fn contains(&self, id: usize) -> bool {
    self.nodes[id].linked
  }

  /// $O(\log n)$ expected. `before(a, b)` is true when `a` sorts strictly before `b`.
  pub fn insert<F>(&mut self, id: usize, before: F)
  where
    F: Fn(usize, usize) -> bool,
  {
    if self.contains(id) {
      return;
    }
    let mut parent = None;
    let mut go_left = false;
    let mut cursor = self.root;
    while let Some(node) = cursor {
      parent = Some(node);
      go_left = before(id, node);
      cursor = if go_left {
        self.nodes[node].left
      } else {
        self.nodes[node].right
      };
    }

    let priority = self.nodes[id].priority;
    self.nodes[id] = Node {
      parent,
      left: None,
      right: None,
      priority,
      linked: true,
    };
    match parent {
      None => self.root = Some(id),
      Some(p) if go_left => self.nodes[p].left = Some(id),
      Some(p) => self.nodes[p].right = Some(id),
    }
    while let Some(p) = self.nodes[id].parent {
      if self.nodes[p].priority >= priority {
        break;
      }
      self.rotate_up(id);
    }
    self.len += 1;
  }

  /// $O(\log n)$ expected. Removing an id that is not stored does nothing.
  pub fn remove(&mut self, id: usize) {
    if !self.contains(id) {
      return;
    }
    // Rotate the node down until it is a leaf, then unlink it.
    loop {
      let child = match (self.nodes[id].left, self.nodes[id].right) {
        (None, None) => break,
        (Some(child), None) | (None, Some(child)) => child,
        (Some(l), Some(r)) => {
          if self.nodes[l].priority > self.nodes[r].priority {
            l
          } else {
            r
          }
        }
      };
      self.rotate_up(child);
    }
    self.replace_child(self.nodes[id].parent, id, None);
    let priority = self.nodes[id].priority;
    self.nodes[id] = Node {
      priority,
      ..Node::default()
    };
    self.len -= 1;
  }

  /// In-order predecessor of a stored id.
  pub fn pred(&self, id: usize) -> Option<usize> {
    if let Some(mut node) = self.nodes[id].left {
      while let Some(right) = self.nodes[node].right {
        node = right;
      }
      return Some(node);
    }
    let mut node = id;
    while let Some(parent) = self.nodes[node].parent {
      if self.nodes[parent].right == Some(node) {
        return Some(parent);
      }
      node = parent;
    }
    None
  }

  /// In-order successor of a stored id.
  pub fn succ(&self, id: usize) -> Option<usize> {
    if let Some(mut node) = self.nodes[id].right {
      while let Some(left) = self.nodes[node].left {
        node = left;
      }
      return Some(node);
    }
    let mut node = id;
    while let Some(parent) = self.nodes[node].parent {
      if self.nodes[parent].left == Some(node) {
        return Some(parent);
      }
      node = parent;
    }
    None
  }

  /// First stored id, in order, for which `below` is false. `below` must be true on a
  /// prefix of the in-order sequence and false on the rest.
  pub fn first_not<F>(&self, below: F) -> Option<usize>
  where
    F: Fn(usize) -> bool,
  {
    let mut found = None;
    let mut cursor = self.root;
    while let Some(node) = cursor {
      if below(node) {
        cursor = self.nodes[node].right;
      } else {
        found = Some(node);
        cursor = self.nodes[node].left;
      }
    }
    found
  }

  // Lift `x` above its parent. The in-order sequence is unchanged.
  fn rotate_up(&mut self, x: usize) {
    let Some(p) = self.nodes[x].parent else {
      return;
    };
    let grand = self.nodes[p].parent;
    let moved = if self.nodes[p].left == Some(x) {
      let moved = self.nodes[x].right;
      self.nodes[p].left = moved;
      self.nodes[x].right = Some(p);
      moved
    } else {
      let moved = self.nodes[x].left;
      self.nodes[p].right = moved;
      self.nodes[x].left = Some(p);
      moved
    };
    if let Some(m) = moved {
      self.nodes[m].parent = Some(p);
    }
    self.nodes[p].parent = Some(x);
    self.nodes[x].parent = grand;
    self.replace_child(grand, p, Some(x));
  }

  fn replace_child(&mut self, parent: Option<usize>, old: usize, new: Option<usize>) {
    match parent {
      None => self.root = new,
      Some(p) if self.nodes[p].left == Some(old) => self.nodes[p].left = new,
      Some(p) => self.nodes[p].right = new,
    }
  }
}
