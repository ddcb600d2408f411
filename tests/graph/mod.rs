mod network;

pub use network::{
    GRID_GRAPH, REFERENCE_GRAPH, SMALL_GRAPH, data_dir, lowest_cost_simple_path, node_pairs,
};
