use std::fmt;

use crate::{Graph, NodeId};

/// One traversed edge of a path: the road taken and the node it leads to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Leg {
    pub road: String,
    pub node: NodeId,
}

/// Lowest cost path between two nodes of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<C> {
    /// Total cost of the path (distance or travel time).
    pub cost: C,
    pub start: NodeId,
    pub legs: Vec<Leg>,
}

impl<C> Path<C> {
    pub fn end(&self) -> &NodeId {
        self.legs.last().map_or(&self.start, |leg| &leg.node)
    }

    /// Gets an iterator over the nodes of the path, from start to end.
    pub fn nodes(&self) -> impl DoubleEndedIterator<Item = &NodeId> {
        std::iter::once(&self.start).chain(self.legs.iter().map(|leg| &leg.node))
    }

    pub fn roads(&self) -> impl DoubleEndedIterator<Item = &str> {
        self.legs.iter().map(|leg| leg.road.as_str())
    }

    /// Alternating node and road names: `[start, road1, node1, ..., end]`.
    pub fn to_sequence(&self) -> Vec<String> {
        let mut sequence = Vec::with_capacity(1 + 2 * self.legs.len());
        sequence.push(self.start.to_string());
        for Leg { road, node } in &self.legs {
            sequence.push(road.clone());
            sequence.push(node.to_string());
        }
        sequence
    }
}

impl<C: fmt::Display> fmt::Display for Path<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.start)?;
        for Leg { road, node } in &self.legs {
            write!(f, " -[{road}]-> {node}")?;
        }
        write!(f, " ({})", self.cost)
    }
}

/// Returns true only if every leg of the path follows a road of the graph that starts at the
/// previous node of the path.
pub fn is_path_connected<C>(graph: &Graph, path: &Path<C>) -> bool {
    if !graph.contains(path.start.as_str()) {
        return false;
    }

    path.nodes().zip(&path.legs).all(|(from, leg)| {
        graph
            .neighbors(from.as_str())
            .iter()
            .any(|e| e.destination() == &leg.node && e.road() == leg.road)
    })
}
