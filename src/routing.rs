use std::fmt;

use tracing::debug;

use crate::graph::dijkstra::{Cost, dijkstra};
use crate::{Edge, Graph, Kilometers, Minutes, NodeId, Objective, Path, RouteError};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RouteConfig {
    /// Never drive on highway edges.
    pub exclude_highways: bool,
    /// The cost the route minimizes.
    pub objective: Objective,
}

/// Route computed for one of the objectives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Distance(Path<Kilometers>),
    Time(Path<Minutes>),
}

impl Route {
    pub const fn objective(&self) -> Objective {
        match self {
            Self::Distance(_) => Objective::Distance,
            Self::Time(_) => Objective::Time,
        }
    }

    /// Alternating node and road names: `[start, road1, node1, ..., end]`.
    pub fn to_sequence(&self) -> Vec<String> {
        match self {
            Self::Distance(path) => path.to_sequence(),
            Self::Time(path) => path.to_sequence(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Distance(path) => fmt::Display::fmt(path, f),
            Self::Time(path) => fmt::Display::fmt(path, f),
        }
    }
}

/// Computes the route from start to end that minimizes the configured objective.
pub fn route(
    config: &RouteConfig,
    graph: &Graph,
    start: &str,
    end: &str,
) -> Result<Route, RouteError> {
    match config.objective {
        Objective::Distance => {
            shortest_distance(graph, start, end, config.exclude_highways).map(Route::Distance)
        }
        Objective::Time => {
            fastest_time(graph, start, end, config.exclude_highways).map(Route::Time)
        }
    }
}

/// Computes the path from start to end with the minimum total distance.
pub fn shortest_distance(
    graph: &Graph,
    start: &str,
    end: &str,
    exclude_highways: bool,
) -> Result<Path<Kilometers>, RouteError> {
    lowest_cost_path(graph, start, end, exclude_highways, Edge::distance)
}

/// Computes the path from start to end with the minimum total travel time.
///
/// The travel time of every edge is rounded to a tenth of a minute before being added to the
/// path, therefore two paths whose exact times are very close may compare differently than
/// their unrounded times would.
pub fn fastest_time(
    graph: &Graph,
    start: &str,
    end: &str,
    exclude_highways: bool,
) -> Result<Path<Minutes>, RouteError> {
    lowest_cost_path(graph, start, end, exclude_highways, Edge::travel_time)
}

fn lowest_cost_path<C: Cost>(
    graph: &Graph,
    start: &str,
    end: &str,
    exclude_highways: bool,
    edge_cost: impl Fn(&Edge) -> C,
) -> Result<Path<C>, RouteError> {
    let origin = get_node(graph, start)?;
    let destination = get_node(graph, end)?;

    debug!("Routing {origin} -> {destination} (exclude highways: {exclude_highways})");

    let is_allowed = |edge: &Edge| !(exclude_highways && edge.is_highway());

    dijkstra(graph, origin, destination, edge_cost, is_allowed).ok_or_else(|| {
        RouteError::NoPathFound {
            start: origin.clone(),
            end: destination.clone(),
        }
    })
}

fn get_node<'a>(graph: &'a Graph, name: &str) -> Result<&'a NodeId, RouteError> {
    graph
        .node(name)
        .ok_or_else(|| RouteError::UnknownNode(name.into()))
}
