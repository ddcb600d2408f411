use rustc_hash::{FxHashMap, FxHashSet};

use crate::{Kilometers, Minutes, NodeId, RoadCategory, Speed};

/// Directed half of an undirected road segment.
/// Edges are immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Edge {
    destination: NodeId,
    distance: Kilometers,
    speed: Speed,
    road: String,
    category: RoadCategory,
}

impl Edge {
    pub fn new(
        destination: NodeId,
        distance: Kilometers,
        speed: Speed,
        road: impl Into<String>,
        category: RoadCategory,
    ) -> Self {
        Self {
            destination,
            distance,
            speed,
            road: road.into(),
            category,
        }
    }

    pub const fn destination(&self) -> &NodeId {
        &self.destination
    }

    pub const fn distance(&self) -> Kilometers {
        self.distance
    }

    pub const fn speed(&self) -> Speed {
        self.speed
    }

    pub fn road(&self) -> &str {
        &self.road
    }

    pub const fn category(&self) -> RoadCategory {
        self.category
    }

    pub fn is_highway(&self) -> bool {
        self.category == RoadCategory::Highway
    }

    /// Gets the time needed to drive the edge, rounded to a tenth of a minute.
    pub fn travel_time(&self) -> Minutes {
        Minutes::travel(self.distance, self.speed)
    }
}

/// Undirected road segment between two nodes, as supplied by a graph source.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub source: NodeId,
    pub destination: NodeId,
    pub distance: Kilometers,
    pub speed: Speed,
    pub road: String,
    pub category: RoadCategory,
}

/// Undirected weighted road graph.
///
/// Every segment is stored as two directed edges, one in each direction, so the graph is a
/// multigraph: adding the same segment twice creates parallel edges.
/// The graph holds no query state and is only read by the routing algorithms.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    nodes: FxHashSet<NodeId>,
    adjacency: FxHashMap<NodeId, Vec<Edge>>,
    segments: usize,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts both directed halves of the road segment between `a` and `b`.
    pub fn add_edge(
        &mut self,
        a: impl Into<NodeId>,
        b: impl Into<NodeId>,
        distance: Kilometers,
        speed: Speed,
        road: impl Into<String>,
        category: RoadCategory,
    ) {
        let (a, b) = (a.into(), b.into());
        let road = road.into();

        self.nodes.insert(a.clone());
        self.nodes.insert(b.clone());

        let forward = Edge::new(b.clone(), distance, speed, road.clone(), category);
        let backward = Edge::new(a.clone(), distance, speed, road, category);
        self.adjacency.entry(a).or_default().push(forward);
        self.adjacency.entry(b).or_default().push(backward);

        self.segments += 1;
    }

    /// Gets the edges exiting the node, in insertion order.
    /// Returns an empty slice if the node doesn't belong to the graph.
    pub fn neighbors(&self, node: &str) -> &[Edge] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn contains(&self, node: &str) -> bool {
        self.nodes.contains(node)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected segments (each one is stored as two directed edges).
    pub const fn edge_count(&self) -> usize {
        self.segments
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Gets the nodes of the graph sorted by name.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        let mut nodes: Vec<_> = self.nodes.iter().collect();
        nodes.sort_unstable();
        nodes.into_iter()
    }

    /// Gets the graph node with the given name.
    pub fn node(&self, name: &str) -> Option<&NodeId> {
        self.nodes.get(name)
    }
}

impl Extend<Segment> for Graph {
    fn extend<I: IntoIterator<Item = Segment>>(&mut self, segments: I) {
        for segment in segments {
            let Segment {
                source,
                destination,
                distance,
                speed,
                road,
                category,
            } = segment;
            self.add_edge(source, destination, distance, speed, road, category);
        }
    }
}

impl FromIterator<Segment> for Graph {
    fn from_iter<I: IntoIterator<Item = Segment>>(segments: I) -> Self {
        let mut graph = Self::new();
        graph.extend(segments);
        graph
    }
}

pub mod dijkstra;

#[cfg(test)]
pub mod tests {
    #![allow(clippy::unwrap_used)]

    mod network;

    pub use network::{REFERENCE_GRAPH, SMALL_GRAPH, kmh};

    use test_log::test;

    use super::*;

    #[test]
    fn graph_add_edge_001() {
        let mut graph = Graph::new();
        graph.add_edge(
            "Béziers",
            "Montpellier",
            Kilometers::new(83),
            kmh(70.0),
            "RN113",
            RoadCategory::Road,
        );

        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);

        let forward = graph.neighbors("Béziers");
        assert_eq!(forward.len(), 1);
        assert_eq!(forward[0].destination().as_str(), "Montpellier");
        assert_eq!(forward[0].distance(), Kilometers::new(83));
        assert_eq!(forward[0].road(), "RN113");

        let backward = graph.neighbors("Montpellier");
        assert_eq!(backward.len(), 1);
        assert_eq!(backward[0].destination().as_str(), "Béziers");
        assert_eq!(backward[0].speed(), kmh(70.0));
    }

    #[test]
    fn graph_add_edge_002() {
        let mut graph = Graph::new();
        for _ in 0..2 {
            graph.add_edge(
                "Arles",
                "Avignon",
                Kilometers::new(36),
                kmh(100.0),
                "RN96",
                RoadCategory::Road,
            );
        }

        // parallel edges are kept
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.neighbors("Arles").len(), 2);
        assert_eq!(graph.neighbors("Avignon").len(), 2);
    }

    #[test]
    fn graph_neighbors_001() {
        let mut graph = Graph::new();
        assert!(graph.is_empty());
        assert!(graph.neighbors("Nîmes").is_empty());

        graph.add_edge(
            "Béziers",
            "Avignon",
            Kilometers::new(150),
            kmh(130.0),
            "A9",
            RoadCategory::Highway,
        );
        graph.add_edge(
            "Béziers",
            "Montpellier",
            Kilometers::new(83),
            kmh(70.0),
            "RN113",
            RoadCategory::Road,
        );

        assert!(graph.neighbors("Nîmes").is_empty());
        assert!(!graph.contains("Nîmes"));
        assert!(graph.contains("Avignon"));

        // insertion order
        let roads: Vec<_> = graph.neighbors("Béziers").iter().map(Edge::road).collect();
        assert_eq!(roads, ["A9", "RN113"]);
        assert!(graph.neighbors("Béziers")[0].is_highway());
        assert!(!graph.neighbors("Béziers")[1].is_highway());
    }

    #[test]
    fn graph_nodes_001() {
        let graph: Graph = [
            ("Montpellier", "Avignon", 80, 80.0, "RN84"),
            ("Avignon", "Arles", 36, 100.0, "RN96"),
        ]
        .into_iter()
        .map(|(a, b, distance, speed, road)| Segment {
            source: a.into(),
            destination: b.into(),
            distance: Kilometers::new(distance),
            speed: kmh(speed),
            road: road.into(),
            category: RoadCategory::Road,
        })
        .collect();

        let nodes: Vec<_> = graph.nodes().map(NodeId::as_str).collect();
        assert_eq!(nodes, ["Arles", "Avignon", "Montpellier"]);
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.node("Arles"), Some(&NodeId::from("Arles")));
        assert_eq!(graph.node("Nîmes"), None);
    }

    #[test]
    fn edge_travel_time_001() {
        let edge = Edge::new(
            "Avignon".into(),
            Kilometers::new(150),
            kmh(130.0),
            "A9",
            RoadCategory::Highway,
        );

        // 150 * 60 / 130 = 69.23...
        assert_eq!(edge.travel_time(), Minutes::from_tenths(692));
        assert_eq!(edge.category(), RoadCategory::Highway);
    }
}
