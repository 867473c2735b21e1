use super::{Axis, Coord, CubeletId};

/// Errors produced by the cube model and the move pipeline.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CubeError {
    /// Move identifier is not one of the twelve canonical moves
    #[error("unknown move {0:?}")]
    UnknownMove(String),
    /// The cube state (or a requested change to it) broke the lattice invariant.
    /// Always a bug, never a transient condition.
    #[error("invariant violation: {0}")]
    InvariantViolation(Violation),
}

/// Which invariant was broken
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("layer {layer} on axis {axis} has {count} cubelets instead of 9")]
    LayerSize { axis: Axis, layer: i8, count: usize },
    #[error("coordinate {0} is outside the 3x3x3 lattice")]
    OutOfRange(Coord),
    #[error("two cubelets would occupy {0}")]
    DuplicateCoordinate(Coord),
    #[error("no cubelet with id {0}")]
    UnknownCubelet(CubeletId),
}

impl From<Violation> for CubeError {
    fn from(violation: Violation) -> Self {
        CubeError::InvariantViolation(violation)
    }
}

pub type Result<T, E = CubeError> = std::result::Result<T, E>;
