//! Graph sources supply the road graph a route is computed on.
//!
//! A source maps a graph identifier to a fully built [`Graph`]. It fails when the identifier is
//! unknown or when the backing data cannot be read or parsed.

pub mod delimited;

use std::collections::HashMap;

use tracing::debug;

use crate::{Graph, SourceError};

/// Supplies a populated graph given its identifier.
pub trait GraphSource {
    fn load(&self, graph_id: &str) -> Result<Graph, SourceError>;
}

impl<S: GraphSource + ?Sized> GraphSource for &S {
    fn load(&self, graph_id: &str) -> Result<Graph, SourceError> {
        (**self).load(graph_id)
    }
}

impl<S: GraphSource + ?Sized> GraphSource for Box<S> {
    fn load(&self, graph_id: &str) -> Result<Graph, SourceError> {
        (**self).load(graph_id)
    }
}

/// Graphs registered in memory, every load returns a copy of the registered graph.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    graphs: HashMap<String, Graph>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_graph(mut self, graph_id: impl Into<String>, graph: Graph) -> Self {
        self.insert(graph_id, graph);
        self
    }

    /// Registers the graph, returns the graph previously registered with the same identifier.
    pub fn insert(&mut self, graph_id: impl Into<String>, graph: Graph) -> Option<Graph> {
        self.graphs.insert(graph_id.into(), graph)
    }
}

impl GraphSource for MemorySource {
    fn load(&self, graph_id: &str) -> Result<Graph, SourceError> {
        debug!("Loading graph {graph_id:?} from memory");
        self.graphs
            .get(graph_id)
            .cloned()
            .ok_or_else(|| SourceError::GraphNotFound(graph_id.to_owned()))
    }
}
