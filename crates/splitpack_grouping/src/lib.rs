//! Deterministic, key-sorted grouping of sized items.
//!
//! Partitions an ordered item list into size-constrained groups by recursive
//! bisection. The input is sorted by key before any split decision, so the
//! output depends only on the item set, never on dependency-graph traversal
//! order, and is reproducible across builds.
//!
//! The max constraint is soft: a group that cannot be split without leaving a
//! side below the minimum is emitted whole. The min constraint is hard: no
//! split ever produces a side below it.

mod namer;

use std::collections::HashSet;

use splitpack_core::size::SizeVector;

/// One item wrapped with its sort key and measured size. Immutable once
/// created.
struct Node<T> {
  item: T,
  key: String,
  size: SizeVector,
}

/// Ordered run of nodes under consideration, with its aggregate size and the
/// adjacent-pair similarity scores of its keys.
///
/// Similarities only ever feed naming diagnostics; split boundaries are
/// decided purely by size.
struct Group<T> {
  nodes: Vec<Node<T>>,
  similarities: Vec<u64>,
  size: SizeVector,
}

impl<T> Group<T> {
  fn new(nodes: Vec<Node<T>>) -> Self {
    let size = SizeVector::sum(nodes.iter().map(|node| &node.size));
    let similarities = similarities(&nodes);

    Group {
      nodes,
      similarities,
      size,
    }
  }
}

/// One finalized group: a stable name, the member items in key order, and the
/// aggregate size of the members.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupedItems<T> {
  pub key: String,
  pub items: Vec<T>,
  pub size: SizeVector,
}

/// Partitions `items` into groups whose aggregate sizes respect `min_size`
/// and `max_size` wherever possible.
///
/// Every input item appears in exactly one output group. Items whose own size
/// already exceeds the maximum without violating the minimum are emitted as
/// singleton groups up front; splitting a single item is undefined.
pub fn group_items<T>(
  items: Vec<T>,
  get_key: impl Fn(&T) -> String,
  get_size: impl Fn(&T) -> SizeVector,
  min_size: &SizeVector,
  max_size: &SizeVector,
) -> Vec<GroupedItems<T>> {
  let mut nodes: Vec<Node<T>> = items
    .into_iter()
    .map(|item| {
      let key = get_key(&item);
      let size = get_size(&item);

      Node { item, key, size }
    })
    .collect();

  // Byte-wise lexicographic order, deliberately not locale collation.
  nodes.sort_by(|a, b| a.key.cmp(&b.key));

  let mut result: Vec<Group<T>> = Vec::new();

  let mut initial_nodes: Vec<Node<T>> = Vec::new();
  for node in nodes {
    if node.size.exceeds(max_size) && !node.size.is_below(min_size) {
      result.push(Group::new(vec![node]));
    } else {
      initial_nodes.push(node);
    }
  }

  if !initial_nodes.is_empty() {
    let mut stack = vec![Group::new(initial_nodes)];

    while let Some(group) = stack.pop() {
      if !group.size.exceeds(max_size) {
        result.push(group);
        continue;
      }

      // Smallest left prefix that satisfies the minimum.
      let mut left = 1;
      let mut left_size = group.nodes[0].size.clone();
      while left < group.nodes.len() && left_size.is_below(min_size) {
        left_size.add_assign(&group.nodes[left].size);
        left += 1;
      }

      // Largest right suffix start that satisfies the minimum.
      let mut right = group.nodes.len() as i64 - 2;
      let mut right_size = group.nodes[group.nodes.len() - 1].size.clone();
      while right >= 0 && right_size.is_below(min_size) {
        right_size.add_assign(&group.nodes[right as usize].size);
        right -= 1;
      }

      if left as i64 - 1 > right {
        // No split leaves both sides at the minimum. Emit the oversized
        // group whole.
        tracing::trace!(
          nodes = group.nodes.len(),
          "unsplittable oversized group retained"
        );
        result.push(group);
        continue;
      }

      // Split at the prefix boundary. The suffix from `left` contains the
      // valid right suffix, so both sides satisfy the minimum and the two
      // slices partition the group exactly.
      let mut left_nodes = group.nodes;
      let right_nodes = left_nodes.split_off(left);

      stack.push(Group::new(right_nodes));
      stack.push(Group::new(left_nodes));
    }
  }

  let mut used_names: HashSet<String> = HashSet::new();

  result
    .into_iter()
    .map(|group| {
      let first = &group.nodes[0];
      let last = &group.nodes[group.nodes.len() - 1];
      let key = namer::assign_name(&first.key, &last.key, &mut used_names);

      tracing::trace!(
        key = %key,
        nodes = group.nodes.len(),
        similarities = ?group.similarities,
        "finalized group"
      );

      GroupedItems {
        key,
        items: group.nodes.into_iter().map(|node| node.item).collect(),
        size: group.size,
      }
    })
    .collect()
}

fn similarities<T>(nodes: &[Node<T>]) -> Vec<u64> {
  nodes
    .windows(2)
    .map(|pair| similarity(&pair[0].key, &pair[1].key))
    .collect()
}

/// Per shared character position, score `max(0, 10 - |code delta|)` and sum.
fn similarity(a: &str, b: &str) -> u64 {
  a.chars()
    .zip(b.chars())
    .map(|(ca, cb)| {
      let delta = (ca as i64 - cb as i64).unsigned_abs();
      10u64.saturating_sub(delta)
    })
    .sum()
}
