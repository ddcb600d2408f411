use tracing::{info, warn};

use crate::routing::route;
use crate::{GraphSource, Objective, Route, RouteConfig, RouteError};

/// Computes routes on the graphs supplied by a graph source.
///
/// Every query loads its own graph, the graph is only read while the route is computed and
/// dropped afterwards.
#[derive(Debug, Clone)]
pub struct RouteQuery<S> {
    source: S,
}

impl<S: GraphSource> RouteQuery<S> {
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Computes the route from start to end on the graph identified by `graph_id`.
    ///
    /// Returns the alternating sequence of node and road names `[start, road1, node1, ..., end]`.
    /// If `optimize_for_time` is true the route minimizes the travel time, otherwise the
    /// distance.
    pub fn execute(
        &self,
        graph_id: &str,
        start: &str,
        end: &str,
        exclude_highways: bool,
        optimize_for_time: bool,
    ) -> Result<Vec<String>, RouteError> {
        let objective = if optimize_for_time {
            Objective::Time
        } else {
            Objective::Distance
        };

        let config = RouteConfig {
            exclude_highways,
            objective,
        };

        self.route(graph_id, start, end, &config)
            .map(|route| route.to_sequence())
    }

    /// Computes the route from start to end on the graph identified by `graph_id`.
    pub fn route(
        &self,
        graph_id: &str,
        start: &str,
        end: &str,
        config: &RouteConfig,
    ) -> Result<Route, RouteError> {
        info!("Routing {start:?} -> {end:?} on graph {graph_id:?} with {config:?}");

        let graph = self.source.load(graph_id).inspect_err(|error| {
            warn!("Cannot load graph {graph_id:?}: {error}");
        })?;

        route(config, &graph, start, end)
    }
}
