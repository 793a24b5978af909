use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::scene::{ModelId, SceneError, SceneHost};
use crate::voxelization::{
    cell_counts, DirectionalRayHeuristic, VoxelGrid, VoxelizationError, VoxelizationParams,
};

/// How a model is placed in the scene before being voxelized.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct ModelPlacement {
    /// Uniform scale factor applied to the model. Must be finite and non-zero.
    pub scale: Real,
    /// Whether the model is moved so its bounding box is centered on the Y axis.
    ///
    /// The voxel grid is always laid out around the Y axis: models which are not already
    /// centered there are only partially covered unless this is set.
    pub center_xz: bool,
}

impl Default for ModelPlacement {
    fn default() -> Self {
        Self {
            scale: 1.0,
            center_xz: false,
        }
    }
}

/// Summary of a [`voxelize_model`] run.
#[derive(Clone, Debug, PartialEq)]
pub struct VoxelizationReport {
    /// The voxelized model.
    pub model: ModelId,
    /// The bounding box of the model once placed.
    pub aabb: Aabb,
    /// The number of grid points along each axis.
    pub grid_counts: [usize; 3],
    /// The number of candidate points tested.
    pub candidates: usize,
    /// The number of points remaining after each classification pass.
    pub survivors_per_pass: Vec<usize>,
    /// The centers of the emitted cubes.
    pub inside: Vec<Point<Real>>,
}

/// Moves a model vertically so the bottom of its bounding box lies at `y = 0`.
///
/// Returns the bounding box of the moved model.
pub fn align_with_floor<H: SceneHost + ?Sized>(
    host: &mut H,
    id: ModelId,
) -> Result<Aabb, SceneError> {
    let aabb = host.bounding_box(id)?;
    let shift = Vector::new(0.0, -aabb.mins.y, 0.0);
    host.translate_model(id, &shift)?;
    Ok(aabb.translated(&shift))
}

/// Moves a model horizontally so its bounding box is centered on the Y axis.
///
/// Returns the bounding box of the moved model.
pub fn center_on_xz<H: SceneHost + ?Sized>(
    host: &mut H,
    id: ModelId,
) -> Result<Aabb, SceneError> {
    let aabb = host.bounding_box(id)?;
    let center = aabb.center();
    let shift = Vector::new(-center.x, 0.0, -center.z);
    host.translate_model(id, &shift)?;
    Ok(aabb.translated(&shift))
}

/// Creates one cube of side `cell_size` centered at each point.
pub fn emit_cubes<H: SceneHost + ?Sized>(
    host: &mut H,
    points: &[Point<Real>],
    cell_size: Real,
) -> Result<(), SceneError> {
    for point in points {
        host.create_cube(point, cell_size)?;
    }

    Ok(())
}

/// Voxelizes a model of the scene, and fills it with cubes.
///
/// The model is scaled, set on the floor, and optionally centered, before being sampled by a
/// grid covering its bounding box. The grid points kept by the [`DirectionalRayHeuristic`]
/// configured by `params` are emitted as cubes of side `params.cell_size`.
///
/// Every parameter is checked before the model is modified. The mesh queries run sequentially,
/// so hosts don't need to support concurrent reads.
pub fn voxelize_model<H: SceneHost + ?Sized>(
    host: &mut H,
    id: ModelId,
    placement: &ModelPlacement,
    params: &VoxelizationParams,
) -> Result<VoxelizationReport, SceneError> {
    if placement.scale == 0.0 || !placement.scale.is_finite() {
        return Err(SceneError::InvalidScale(placement.scale));
    }

    let heuristic = DirectionalRayHeuristic::from_params(params)?;
    // Extents scale linearly: the grid size can be checked before the model is modified.
    let placed_extents = host.bounding_box(id)?.extents() * placement.scale.abs();
    let _ = cell_counts(&placed_extents, params.cell_size).map_err(VoxelizationError::from)?;

    host.scale_model(id, placement.scale)?;
    let mut aabb = align_with_floor(host, id)?;

    if placement.center_xz {
        aabb = center_on_xz(host, id)?;
    }

    let grid = VoxelGrid::from_aabb(&aabb, params.cell_size).map_err(VoxelizationError::from)?;
    let classification = heuristic.run(host.mesh(id)?, grid.points())?;
    emit_cubes(host, &classification.inside, params.cell_size)?;

    log::info!(
        "voxelized model {:?}: {} of {} grid points kept ({:?} cells of size {})",
        id,
        classification.inside.len(),
        grid.len(),
        grid.counts(),
        params.cell_size
    );

    Ok(VoxelizationReport {
        model: id,
        aabb,
        grid_counts: grid.counts(),
        candidates: grid.len(),
        survivors_per_pass: classification.survivors_per_pass,
        inside: classification.inside,
    })
}
