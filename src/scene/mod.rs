//! Driving a scene host through the voxelization of one of its models.
//!
//! A [`SceneHost`] owns the models: it imports them, moves them around, answers ray queries
//! against their surface, and instantiates the cubes making up the result. [`MeshScene`] is an
//! in-memory host built on [`TriMesh`](crate::shape::TriMesh).
//!
//! [`voxelize_model`] runs the whole flow on a model: scale, floor alignment, grid sampling,
//! classification, and cube emission.

pub use self::driver::{
    align_with_floor, center_on_xz, emit_cubes, voxelize_model, ModelPlacement,
    VoxelizationReport,
};
pub use self::error::SceneError;
pub use self::host::{ModelId, SceneHost};
pub use self::mesh_scene::{MeshScene, PlacedCube};

mod driver;
mod error;
mod host;
mod mesh_scene;
