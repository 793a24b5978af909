use crate::math::Real;
use crate::scene::ModelId;
use crate::shape::TriMeshBuilderError;
use crate::voxelization::VoxelizationError;
use std::path::PathBuf;

/// Error raised by a scene host or by the voxelization driver.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    /// The scene contains no model with this identifier.
    #[error("the scene contains no model {0:?}")]
    UnknownModel(ModelId),
    /// The host cannot import files of this kind.
    #[error("the scene host cannot import {0:?}")]
    UnsupportedImport(PathBuf),
    /// The host failed to import a model.
    #[error("failed to import the model: {0}")]
    Import(String),
    /// A model scale factor is zero or not finite.
    #[error("the model scale factor must be finite and non-zero, got {0}")]
    InvalidScale(Real),
    /// The imported geometry is not a valid triangle mesh.
    #[error(transparent)]
    Mesh(#[from] TriMeshBuilderError),
    /// The voxelization of the model failed.
    #[error(transparent)]
    Voxelization(#[from] VoxelizationError),
}
