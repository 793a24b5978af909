//! Voxelization of a closed mesh by directional ray casting.
//!
//! The pipeline has two steps:
//!
//! 1. [`build_grid`] (or [`VoxelGrid`]) lays out a regular lattice of candidate points, centered
//!    on the X and Z axes and starting at `y = 0`.
//! 2. [`classify`] keeps the candidates that lie inside of the mesh, according to the
//!    "multi-directional ray parity heuristic" implemented by [`DirectionalRayHeuristic`].
//!
//! The heuristic is not an exact point-in-mesh test: a point is kept if, for each of five fixed
//! directions, a ray cast from it hits the mesh at a positive distance. Each pass only sees the
//! survivors of the previous one, so the result depends on the order of the directions.

pub use self::classify::{
    classify, classify_with, filter_by_direction, is_inside_along_ray, Classification,
    DirectionalRayHeuristic, MembershipTest,
};
#[cfg(feature = "parallel")]
pub use self::classify::{par_classify, par_filter_by_direction};
pub use self::error::{InvalidParameter, VoxelizationError};
pub use self::grid::{build_grid, cell_counts, VoxelGrid};
pub use self::params::{default_directions, VoxelizationParams, DEFAULT_MAX_DISTANCE};

mod classify;
mod error;
mod grid;
mod params;
