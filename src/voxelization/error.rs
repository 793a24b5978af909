use crate::math::{Point, Real, Vector};
use crate::query::MeshQueryError;

/// A parameter of the voxelization is out of its valid range.
///
/// These errors are raised before any allocation or mesh query takes place.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum InvalidParameter {
    /// The cell size is zero, negative, or not finite.
    #[error("the cell size must be positive and finite, got {0}")]
    NonPositiveCellSize(Real),
    /// A grid extent is negative or not finite.
    #[error("the grid extent along {axis} must be non-negative and finite, got {value}")]
    NegativeExtent {
        /// The name of the offending axis (`"x"`, `"y"` or `"z"`).
        axis: &'static str,
        /// The offending extent.
        value: Real,
    },
    /// The grid would contain more points than can be addressed.
    #[error("a grid of {counts:?} cells cannot be allocated")]
    TooManyCells {
        /// The number of cells along each axis.
        counts: [usize; 3],
    },
    /// A ray direction has a zero (or non-finite) length and cannot be normalized.
    #[error("the ray direction {0:?} cannot be normalized")]
    DegenerateDirection(Vector<Real>),
    /// The maximum travel distance of the rays is not positive.
    #[error("the ray maximum distance must be positive, got {0}")]
    NonPositiveMaxDistance(Real),
    /// No classification direction was given.
    #[error("at least one classification direction is required")]
    NoDirections,
}

/// Error aborting a voxelization run.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum VoxelizationError {
    /// A parameter of the run is invalid.
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    /// The mesh failed to answer a ray query.
    #[error("classification pass {pass} (direction {direction:?}) failed at point {point:?}: {source}")]
    MeshQuery {
        /// Index of the filter pass that was running.
        pass: usize,
        /// The candidate point the ray was cast from.
        point: Point<Real>,
        /// The normalized ray direction of the pass.
        direction: Vector<Real>,
        /// The error reported by the mesh.
        source: MeshQueryError,
    },
}
