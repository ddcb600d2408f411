use std::io::ErrorKind;

use thiserror::Error;

use crate::NodeId;

#[derive(Error, Debug, PartialEq, Clone, Copy)]
pub enum GraphError {
    #[error("Speed must be a positive finite number of km/h: {0}")]
    InvalidSpeed(f64),
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum SourceError {
    #[error("Graph {0:?} not found")]
    GraphNotFound(String),
    #[error("Graph {graph:?} I/O error: {kind:?}")]
    Io { graph: String, kind: ErrorKind },
    #[error("Invalid edge at line {line}: {reason}")]
    Parse { line: u64, reason: String },
}

#[derive(Error, Debug, PartialEq, Clone)]
pub enum RouteError {
    #[error("Graph source unavailable: {0}")]
    SourceUnavailable(#[from] SourceError),
    #[error("Node {0} does not belong to the graph")]
    UnknownNode(NodeId),
    #[error("Cannot find route between {start} and {end}")]
    NoPathFound { start: NodeId, end: NodeId },
}

