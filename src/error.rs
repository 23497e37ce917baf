//! Error types for grid construction, search and path reconstruction.

use grid_util::Point;
use thiserror::Error;

use crate::node::CellKind;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AstarError {
    #[error("invalid grid dimensions {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("coordinate {0} lies outside the grid")]
    OutOfBounds(Point),

    #[error("no path connects start and end")]
    NoPathFound,

    #[error("search aborted after {iterations} iterations")]
    SearchAborted { iterations: usize },

    #[error("grid has no {0:?} cell")]
    MissingEndpoint(CellKind),

    #[error("{kind:?} given twice, at {first} and {second}")]
    DuplicateEndpoint {
        kind: CellKind,
        first: Point,
        second: Point,
    },
}

pub type Result<T> = std::result::Result<T, AstarError>;
