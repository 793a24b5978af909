use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::RayQuery;
use crate::scene::SceneError;
use std::path::Path;

/// Identifier of a model owned by a [`SceneHost`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ModelId(pub u32);

/// The services a content-creation host provides to the voxelization driver.
pub trait SceneHost {
    /// Imports a model from a file, and returns its identifier.
    fn import_model(&mut self, path: &Path) -> Result<ModelId, SceneError>;

    /// Scales a model uniformly by `factor`.
    fn scale_model(&mut self, id: ModelId, factor: Real) -> Result<(), SceneError>;

    /// Moves a model by `offset`.
    fn translate_model(&mut self, id: ModelId, offset: &Vector<Real>) -> Result<(), SceneError>;

    /// The world-space bounding box of a model.
    fn bounding_box(&self, id: ModelId) -> Result<Aabb, SceneError>;

    /// The ray-castable surface of a model, in world space.
    fn mesh(&self, id: ModelId) -> Result<&dyn RayQuery, SceneError>;

    /// Instantiates an axis-aligned cube of side `size` centered at `center`.
    fn create_cube(&mut self, center: &Point<Real>, size: Real) -> Result<(), SceneError>;
}
