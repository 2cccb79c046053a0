use thiserror::Error;

use crate::graph::Vertex;

/// Top-level error type for the gridlink crate.
#[derive(Debug, Error)]
pub enum GridlinkError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Errors related to the shape of caller-supplied input.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("insufficient input: need at least {required} vertices, got {actual}")]
    Insufficient { required: usize, actual: usize },
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),
}

/// Errors related to vertex/edge graphs.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("vertex not found in store")]
    VertexNotFound,

    #[error("start vertex ({}, {}) is not an endpoint of any edge", .0.position().x, .0.position().y)]
    StartNotInGraph(Vertex),

    #[error("graph is disconnected: {} vertices unreached from the start vertex", .unreached.len())]
    Disconnected { unreached: Vec<Vertex> },
}

/// Convenience type alias for results using [`GridlinkError`].
pub type Result<T> = std::result::Result<T, GridlinkError>;
