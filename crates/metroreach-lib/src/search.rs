//! Bounded search primitives shared by the reachability strategies.
//!
//! [`relax`] is a priority-ordered (Dijkstra-style) relaxation over any state
//! type and any totally ordered, additive cost. Strategies specialize it by
//! supplying an expansion callback that lists outgoing edges and their
//! non-negative costs. [`breadth_first`] covers the unit-cost case with a
//! plain FIFO frontier.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

/// Travel time in minutes with a total order, so it can key a heap.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Minutes(pub f64);

impl Eq for Minutes {}

impl PartialOrd for Minutes {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Minutes {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl Add for Minutes {
    type Output = Minutes;

    fn add(self, rhs: Self) -> Self::Output {
        Minutes(self.0 + rhs.0)
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
struct QueueEntry<S, C> {
    node: S,
    cost: C,
}

impl<S: Ord, C: Ord> Ord for QueueEntry<S, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering so BinaryHeap becomes a min-heap by cost.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.node.cmp(&self.node))
    }
}

impl<S: Ord, C: Ord> PartialOrd for QueueEntry<S, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Settle every state reachable from `seeds` at a cost no greater than `limit`.
///
/// `expand` is called once per settled state with its final cost and pushes
/// `(next, edge_cost)` pairs into the provided buffer. Edge costs must be
/// non-negative. Seeds are settled regardless of `limit`.
///
/// Returns the minimum cost found for every settled state.
pub fn relax<S, C, I, F>(seeds: I, limit: C, mut expand: F) -> HashMap<S, C>
where
    S: Copy + Eq + Hash + Ord + Debug,
    C: Copy + Ord + Add<Output = C> + Debug,
    I: IntoIterator<Item = (S, C)>,
    F: FnMut(S, C, &mut Vec<(S, C)>),
{
    let mut best: HashMap<S, C> = HashMap::new();
    let mut queue = BinaryHeap::new();

    for (node, cost) in seeds {
        if best.get(&node).map_or(true, |&known| cost < known) {
            best.insert(node, cost);
            queue.push(QueueEntry { node, cost });
        }
    }

    let mut edges = Vec::new();
    while let Some(entry) = queue.pop() {
        if best.get(&entry.node).is_some_and(|&known| known < entry.cost) {
            continue;
        }
        tracing::trace!("settled {:?} at {:?}", entry.node, entry.cost);

        edges.clear();
        expand(entry.node, entry.cost, &mut edges);
        for &(next, step) in &edges {
            let tentative = entry.cost + step;
            if tentative > limit {
                continue;
            }
            if best.get(&next).map_or(true, |&known| tentative < known) {
                best.insert(next, tentative);
                queue.push(QueueEntry {
                    node: next,
                    cost: tentative,
                });
            }
        }
    }

    best
}

/// Unit-cost variant of [`relax`]: FIFO breadth-first search bounded by `limit` hops.
///
/// The first time a state is discovered fixes its hop count.
pub fn breadth_first<S, N, F>(seed: S, limit: u64, mut neighbours: F) -> HashMap<S, u64>
where
    S: Copy + Eq + Hash,
    N: IntoIterator<Item = S>,
    F: FnMut(S) -> N,
{
    let mut hops: HashMap<S, u64> = HashMap::new();
    let mut queue = VecDeque::new();

    hops.insert(seed, 0);
    queue.push_back((seed, 0u64));

    while let Some((current, depth)) = queue.pop_front() {
        if depth >= limit {
            continue;
        }
        for next in neighbours(current) {
            if hops.contains_key(&next) {
                continue;
            }
            hops.insert(next, depth + 1);
            queue.push_back((next, depth + 1));
        }
    }

    hops
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1 -> 2 (5), 1 -> 3 (1), 3 -> 2 (1), 2 -> 4 (1)
    fn weighted_edges(node: u32, out: &mut Vec<(u32, u64)>) {
        match node {
            1 => out.extend([(2, 5), (3, 1)]),
            3 => out.push((2, 1)),
            2 => out.push((4, 1)),
            _ => {}
        }
    }

    #[test]
    fn relax_prefers_cheaper_detour() {
        let best = relax([(1u32, 0u64)], 10, |node, _, out| weighted_edges(node, out));
        assert_eq!(best.get(&2), Some(&2));
        assert_eq!(best.get(&4), Some(&3));
    }

    #[test]
    fn relax_respects_limit() {
        let best = relax([(1u32, 0u64)], 2, |node, _, out| weighted_edges(node, out));
        assert_eq!(best.get(&2), Some(&2));
        assert!(!best.contains_key(&4));
    }

    #[test]
    fn relax_expands_each_state_once() {
        let mut expansions = HashMap::new();
        relax([(1u32, 0u64)], 10, |node, _, out| {
            *expansions.entry(node).or_insert(0) += 1;
            weighted_edges(node, out);
        });
        assert!(expansions.values().all(|&count| count == 1));
        assert_eq!(expansions.len(), 4);
    }

    #[test]
    fn relax_keeps_cheapest_duplicate_seed() {
        let best = relax([(1u32, 4u64), (1, 0)], 0, |_, _, _| {});
        assert_eq!(best.get(&1), Some(&0));
    }

    #[test]
    fn relax_supports_zero_cost_edges() {
        // 1 -0-> 2 -1-> 3 -0-> 4
        let best = relax([(1u32, 0u64)], 1, |node, _, out| match node {
            1 => out.push((2, 0)),
            2 => out.push((3, 1)),
            3 => out.push((4, 0)),
            _ => {}
        });
        assert_eq!(best.get(&2), Some(&0));
        assert_eq!(best.get(&4), Some(&1));
    }

    #[test]
    fn relax_over_minutes() {
        let best = relax([('a', Minutes(1.0))], Minutes(3.0), |node, _, out| {
            if node == 'a' {
                out.push(('b', Minutes(1.5)));
                out.push(('c', Minutes(2.5)));
            }
        });
        assert_eq!(best.get(&'b'), Some(&Minutes(2.5)));
        assert!(!best.contains_key(&'c'));
    }

    #[test]
    fn minutes_order_is_total() {
        assert!(Minutes(1.0) < Minutes(2.0));
        assert!(Minutes(f64::INFINITY) < Minutes(f64::NAN));
    }

    #[test]
    fn breadth_first_counts_hops() {
        // Path 0 - 1 - 2 - 3
        let hops = breadth_first(0i32, 2, |n| {
            [n - 1, n + 1]
                .into_iter()
                .filter(|m| (0..=3).contains(m))
                .collect::<Vec<_>>()
        });
        assert_eq!(hops.get(&0), Some(&0));
        assert_eq!(hops.get(&2), Some(&2));
        assert!(!hops.contains_key(&3));
    }

    #[test]
    fn breadth_first_zero_limit_is_seed_only() {
        let hops = breadth_first(7u8, 0, |n| vec![n + 1]);
        assert_eq!(hops.len(), 1);
    }
}
