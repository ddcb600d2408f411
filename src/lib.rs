#![doc = include_str!("../README.md")]

mod error;
mod graph;
mod model;
mod path;
mod query;
mod routing;
mod source;

pub use error::{GraphError, RouteError, SourceError};
pub use graph::dijkstra::{Cost, dijkstra};
pub use graph::{Edge, Graph, Segment};
pub use model::{Kilometers, Minutes, NodeId, Objective, RoadCategory, Speed};
pub use path::{Leg, Path, is_path_connected};
pub use query::RouteQuery;
pub use routing::{Route, RouteConfig, fastest_time, route, shortest_distance};
pub use source::delimited::{CsvConfig, CsvSource, read_graph, read_graph_file, road_category};
pub use source::{GraphSource, MemorySource};
