use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::query::RayQuery;
use crate::scene::{ModelId, SceneError, SceneHost};
use crate::shape::TriMesh;
use std::path::Path;

/// A cube instantiated by [`MeshScene::create_cube`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct PlacedCube {
    /// The center of the cube.
    pub center: Point<Real>,
    /// The length of the cube sides.
    pub size: Real,
}

impl PlacedCube {
    /// The AABB occupied by this cube.
    pub fn aabb(&self) -> Aabb {
        Aabb::from_half_extents(self.center, Vector::repeat(self.size / 2.0))
    }
}

/// An in-memory scene made of triangle meshes.
///
/// Models are transformed about the world origin. Emitted cubes are only recorded.
#[derive(Clone, Debug, Default)]
pub struct MeshScene {
    models: Vec<TriMesh>,
    cubes: Vec<PlacedCube>,
}

impl MeshScene {
    /// Creates an empty scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model to the scene.
    pub fn insert_model(&mut self, mesh: TriMesh) -> ModelId {
        self.models.push(mesh);
        ModelId(self.models.len() as u32 - 1)
    }

    /// The mesh of a model.
    pub fn model(&self, id: ModelId) -> Result<&TriMesh, SceneError> {
        self.models
            .get(id.0 as usize)
            .ok_or(SceneError::UnknownModel(id))
    }

    fn model_mut(&mut self, id: ModelId) -> Result<&mut TriMesh, SceneError> {
        self.models
            .get_mut(id.0 as usize)
            .ok_or(SceneError::UnknownModel(id))
    }

    /// The cubes created so far, in creation order.
    pub fn cubes(&self) -> &[PlacedCube] {
        &self.cubes
    }

    /// Removes every cube from the scene.
    pub fn clear_cubes(&mut self) {
        self.cubes.clear();
    }
}

impl SceneHost for MeshScene {
    #[cfg(feature = "wavefront")]
    fn import_model(&mut self, path: &Path) -> Result<ModelId, SceneError> {
        let mesh = TriMesh::from_obj_file(path)
            .map_err(|e| SceneError::Import(format!("{}: {}", path.display(), e)))?;
        log::debug!(
            "imported {} triangles from {}",
            mesh.num_triangles(),
            path.display()
        );
        Ok(self.insert_model(mesh))
    }

    #[cfg(not(feature = "wavefront"))]
    fn import_model(&mut self, path: &Path) -> Result<ModelId, SceneError> {
        Err(SceneError::UnsupportedImport(path.to_path_buf()))
    }

    fn scale_model(&mut self, id: ModelId, factor: Real) -> Result<(), SceneError> {
        self.model_mut(id)?.scale(&Vector::repeat(factor));
        Ok(())
    }

    fn translate_model(&mut self, id: ModelId, offset: &Vector<Real>) -> Result<(), SceneError> {
        self.model_mut(id)?.translate(offset);
        Ok(())
    }

    fn bounding_box(&self, id: ModelId) -> Result<Aabb, SceneError> {
        self.model(id).map(|mesh| mesh.local_aabb())
    }

    fn mesh(&self, id: ModelId) -> Result<&dyn RayQuery, SceneError> {
        Ok(self.model(id)?)
    }

    fn create_cube(&mut self, center: &Point<Real>, size: Real) -> Result<(), SceneError> {
        self.cubes.push(PlacedCube {
            center: *center,
            size,
        });
        Ok(())
    }
}
