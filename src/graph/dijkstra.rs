use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::fmt::Debug;
use std::ops::Add;

use rustc_hash::{FxHashMap, FxHashSet};
use tracing::debug;

use crate::path::{Leg, Path};
use crate::{Edge, Graph, Kilometers, Minutes, NodeId};

/// Cost minimized by the search: non-negative, totally ordered and additive.
pub trait Cost: Debug + Copy + Ord + Add<Output = Self> {
    const ZERO: Self;
}

impl Cost for Kilometers {
    const ZERO: Self = Kilometers::ZERO;
}

impl Cost for Minutes {
    const ZERO: Self = Minutes::ZERO;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HeapElement<'a, C> {
    /// Current lowest cost from origin to this node.
    cost: C,
    node: &'a NodeId,
}

// The priority queue depends on the implementation of the Ord trait.
// By default std::BinaryHeap is a max heap.
// Explicitly implement the trait so the queue becomes a min heap.
impl<C: Ord> Ord for HeapElement<'_, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .cmp(&self.cost)
            // breaking ties in a deterministic way: lowest node name first
            .then_with(|| other.node.cmp(self.node))
    }
}

impl<C: Ord> PartialOrd for HeapElement<'_, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Previous node (and the road taken from it) on the best known path to a node.
type PreviousMap<'a> = FxHashMap<&'a NodeId, (&'a NodeId, &'a str)>;

/// Computes the lowest cost path from origin to destination following only the edges accepted
/// by `is_allowed`. Returns None if the destination cannot be reached.
///
/// Nodes are settled in increasing cost order, ties are settled by node name. Once settled a node
/// is never relaxed again, and a node is only relaxed by a strictly cheaper path, so the result
/// is the same for every call with the same graph.
pub fn dijkstra<'a, C, F, P>(
    graph: &'a Graph,
    origin: &'a NodeId,
    destination: &NodeId,
    edge_cost: F,
    is_allowed: P,
) -> Option<Path<C>>
where
    C: Cost,
    F: Fn(&Edge) -> C,
    P: Fn(&Edge) -> bool,
{
    debug!("Computing lowest cost path {origin} -> {destination}");

    // (current) lowest cost from origin to this node
    let mut costs: FxHashMap<&NodeId, C> = FxHashMap::from_iter([(origin, C::ZERO)]);
    let mut settled: FxHashSet<&NodeId> = FxHashSet::default();
    let mut previous_map: PreviousMap<'a> = FxHashMap::default();

    // priority queue of discovered nodes that may need to be settled
    let mut frontier = BinaryHeap::from([HeapElement {
        cost: C::ZERO,
        node: origin,
    }]);

    while let Some(HeapElement { cost, node }) = frontier.pop() {
        if !settled.insert(node) {
            // outdated element, the node was already settled with a lower cost
            continue;
        }

        if node == destination {
            debug!("Settled {} nodes, found cost {cost:?}", settled.len());
            return Some(unpack_path(&previous_map, origin, destination, cost));
        }

        for edge in graph.neighbors(node.as_str()) {
            if !is_allowed(edge) {
                continue;
            }

            let neighbor = edge.destination();
            if settled.contains(neighbor) {
                continue;
            }

            let cost = cost + edge_cost(edge);
            // check if we can follow the current path to reach the neighbor in a cheaper way
            if costs.get(neighbor).is_none_or(|&lowest| cost < lowest) {
                // Relax: we have now found a better way that we are going to explore
                costs.insert(neighbor, cost);
                previous_map.insert(neighbor, (node, edge.road()));
                frontier.push(HeapElement {
                    cost,
                    node: neighbor,
                });
            }
        }
    }

    debug!("Settled {} nodes, {destination} is unreachable", settled.len());
    None
}

/// Unpacks the path from destination back to origin.
fn unpack_path<C>(
    previous_map: &PreviousMap<'_>,
    origin: &NodeId,
    destination: &NodeId,
    cost: C,
) -> Path<C> {
    let mut legs = vec![];
    let mut next = destination;

    while let Some(&(previous, road)) = previous_map.get(next) {
        legs.push(Leg {
            road: road.to_owned(),
            node: next.clone(),
        });
        next = previous;
    }

    debug_assert_eq!(next, origin);
    legs.reverse();

    Path {
        cost,
        start: origin.clone(),
        legs,
    }
}
