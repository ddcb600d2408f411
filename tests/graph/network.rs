use std::path::PathBuf;
use std::sync::LazyLock;

use road_route::{CsvConfig, Edge, Graph, Kilometers, NodeId, RoadCategory, Speed, read_graph_file};

/// Béziers, Montpellier, Avignon and Arles connected by national roads plus the A9 highway.
pub static REFERENCE_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    read_graph_file(data_dir().join("big_map.csv"), &CsvConfig::default()).unwrap()
});

/// Same as the reference graph without the A9 highway.
pub static SMALL_GRAPH: LazyLock<Graph> = LazyLock::new(|| {
    read_graph_file(data_dir().join("small_map.csv"), &CsvConfig::default()).unwrap()
});

/// 4x4 grid of cities, every fourth road is a fast highway.
pub static GRID_GRAPH: LazyLock<Graph> = LazyLock::new(grid_graph);

pub fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("data")
}

const GRID_SIZE: u32 = 4;

fn grid_graph() -> Graph {
    let mut graph = Graph::new();
    let name = |row: u32, column: u32| format!("c{row}{column}");

    let mut road = 0;
    let mut add_road = |graph: &mut Graph, a: String, b: String| {
        road += 1;
        // deterministic pseudo random distances and speeds
        let distance = Kilometers::new((road * 37 + 11) % 23 + 5);
        let (speed, category) = if road % 4 == 0 {
            (130.0, RoadCategory::Highway)
        } else {
            (f64::from((road * 13) % 50 + 40), RoadCategory::Road)
        };
        let speed = Speed::from_kmh(speed).unwrap();
        let prefix = if category == RoadCategory::Highway { "A" } else { "D" };
        graph.add_edge(a, b, distance, speed, format!("{prefix}{road}"), category);
    };

    for row in 0..GRID_SIZE {
        for column in 0..GRID_SIZE {
            if column + 1 < GRID_SIZE {
                add_road(&mut graph, name(row, column), name(row, column + 1));
            }
            if row + 1 < GRID_SIZE {
                add_road(&mut graph, name(row, column), name(row + 1, column));
            }
        }
    }

    graph
}

/// Gets every ordered pair of distinct nodes of the graph.
pub fn node_pairs(graph: &Graph) -> Vec<(NodeId, NodeId)> {
    let nodes: Vec<_> = graph.nodes().cloned().collect();
    nodes
        .iter()
        .flat_map(|a| nodes.iter().map(move |b| (a.clone(), b.clone())))
        .filter(|(a, b)| a != b)
        .collect()
}

/// Exhaustively searches all the simple paths from start to end and returns the lowest cost,
/// None if the end cannot be reached.
pub fn lowest_cost_simple_path(
    graph: &Graph,
    start: &NodeId,
    end: &NodeId,
    edge_cost: &dyn Fn(&Edge) -> u64,
    is_allowed: &dyn Fn(&Edge) -> bool,
) -> Option<u64> {
    fn search(
        graph: &Graph,
        node: &NodeId,
        end: &NodeId,
        visited: &mut Vec<NodeId>,
        cost: u64,
        edge_cost: &dyn Fn(&Edge) -> u64,
        is_allowed: &dyn Fn(&Edge) -> bool,
    ) -> Option<u64> {
        if node == end {
            return Some(cost);
        }

        let mut lowest = None;
        for edge in graph.neighbors(node.as_str()) {
            if !is_allowed(edge) || visited.contains(edge.destination()) {
                continue;
            }

            visited.push(edge.destination().clone());
            let found = search(
                graph,
                edge.destination(),
                end,
                visited,
                cost + edge_cost(edge),
                edge_cost,
                is_allowed,
            );
            visited.pop();

            lowest = match (lowest, found) {
                (Some(a), Some(b)) => Some(u64::min(a, b)),
                (a, b) => a.or(b),
            };
        }

        lowest
    }

    let mut visited = vec![start.clone()];
    search(graph, start, end, &mut visited, 0, edge_cost, is_allowed)
}
