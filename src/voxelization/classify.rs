use crate::math::{Point, Real, UnitVector, Vector};
use crate::query::{MeshQueryError, Ray, RayQuery};
use crate::voxelization::params::{
    normalize_direction, normalize_directions, validate_max_distance,
};
use crate::voxelization::{
    default_directions, VoxelizationError, VoxelizationParams, DEFAULT_MAX_DISTANCE,
};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// A strategy deciding which candidate points lie inside of a mesh.
pub trait MembershipTest {
    /// Returns the subset of `candidates` considered inside of `mesh`.
    ///
    /// The relative order of the kept points must match their order in `candidates`.
    fn retain_inside<M: RayQuery + ?Sized>(
        &self,
        mesh: &M,
        candidates: &[Point<Real>],
    ) -> Result<Vec<Point<Real>>, VoxelizationError>;
}

/// The outcome of a full classification run.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Classification {
    /// The points that survived every pass, in their original order.
    pub inside: Vec<Point<Real>>,
    /// The number of points remaining after each pass.
    pub survivors_per_pass: Vec<usize>,
}

/// The multi-directional ray heuristic.
///
/// The candidates go through one filter pass per direction. A pass keeps a point if the ray cast
/// from it along the pass direction hits the mesh at a strictly positive distance no larger than
/// the maximum distance. Each pass only tests the survivors of the previous one.
///
/// With a closed mesh, every point inside of the mesh survives every pass. The converse does not
/// hold: a point outside of a concave mesh is kept as soon as each ray happens to hit some part
/// of the mesh. Points lying exactly on the surface are generally dropped since their hits are
/// reported at a distance of zero.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalRayHeuristic {
    directions: Vec<UnitVector<Real>>,
    max_distance: Real,
}

impl Default for DirectionalRayHeuristic {
    fn default() -> Self {
        Self {
            directions: default_directions()
                .iter()
                .map(|dir| UnitVector::new_normalize(*dir))
                .collect(),
            max_distance: DEFAULT_MAX_DISTANCE,
        }
    }
}

impl DirectionalRayHeuristic {
    /// Creates a heuristic running one pass per direction, in the given order.
    ///
    /// The directions are normalized. Fails if there is no direction, if one of them cannot be
    /// normalized, or if `max_distance` is not positive.
    pub fn new(
        directions: &[Vector<Real>],
        max_distance: Real,
    ) -> Result<Self, VoxelizationError> {
        validate_max_distance(max_distance)?;
        Ok(Self {
            directions: normalize_directions(directions)?,
            max_distance,
        })
    }

    /// Creates the heuristic described by the ray parameters of `params`.
    pub fn from_params(params: &VoxelizationParams) -> Result<Self, VoxelizationError> {
        Self::new(&params.directions, params.max_distance)
    }

    /// The normalized directions of the passes.
    pub fn directions(&self) -> &[UnitVector<Real>] {
        &self.directions
    }

    /// The maximum travel distance of the rays.
    pub fn max_distance(&self) -> Real {
        self.max_distance
    }

    /// Runs every pass on `candidates`, and records the number of survivors of each pass.
    pub fn run<M: RayQuery + ?Sized>(
        &self,
        mesh: &M,
        candidates: &[Point<Real>],
    ) -> Result<Classification, VoxelizationError> {
        self.run_passes(candidates, |points, dir, pass| {
            filter_pass(mesh, points, dir, self.max_distance, pass)
        })
    }

    /// Same as [`Self::run`], but each pass tests its points in parallel.
    ///
    /// The result is the same as the one of [`Self::run`]. If several points fail, the reported
    /// error may come from any of them.
    #[cfg(feature = "parallel")]
    pub fn par_run<M: RayQuery + Sync + ?Sized>(
        &self,
        mesh: &M,
        candidates: &[Point<Real>],
    ) -> Result<Classification, VoxelizationError> {
        self.run_passes(candidates, |points, dir, pass| {
            par_filter_pass(mesh, points, dir, self.max_distance, pass)
        })
    }

    fn run_passes(
        &self,
        candidates: &[Point<Real>],
        mut filter: impl FnMut(
            &[Point<Real>],
            &UnitVector<Real>,
            usize,
        ) -> Result<Vec<Point<Real>>, VoxelizationError>,
    ) -> Result<Classification, VoxelizationError> {
        let mut inside = candidates.to_vec();
        let mut survivors_per_pass = Vec::with_capacity(self.directions.len());

        for (pass, dir) in self.directions.iter().enumerate() {
            let tested = inside.len();
            inside = filter(&inside, dir, pass)?;
            survivors_per_pass.push(inside.len());
            log::debug!(
                "classification pass {} along {:?}: kept {} of {} points",
                pass,
                dir.as_ref(),
                inside.len(),
                tested
            );
        }

        Ok(Classification {
            inside,
            survivors_per_pass,
        })
    }
}

impl MembershipTest for DirectionalRayHeuristic {
    fn retain_inside<M: RayQuery + ?Sized>(
        &self,
        mesh: &M,
        candidates: &[Point<Real>],
    ) -> Result<Vec<Point<Real>>, VoxelizationError> {
        self.run(mesh, candidates).map(|result| result.inside)
    }
}

fn cast_from<M: RayQuery + ?Sized>(
    mesh: &M,
    point: &Point<Real>,
    dir: &UnitVector<Real>,
    max_distance: Real,
) -> Result<bool, MeshQueryError> {
    let ray = Ray::new(*point, dir.into_inner());
    // A hit at zero means the point lies on the surface: it is not counted.
    Ok(mesh
        .any_intersection(&ray, max_distance)?
        .is_some_and(|hit| hit.time_of_impact > 0.0))
}

fn pass_error(
    pass: usize,
    point: &Point<Real>,
    dir: &UnitVector<Real>,
    source: MeshQueryError,
) -> VoxelizationError {
    VoxelizationError::MeshQuery {
        pass,
        point: *point,
        direction: dir.into_inner(),
        source,
    }
}

fn filter_pass<M: RayQuery + ?Sized>(
    mesh: &M,
    points: &[Point<Real>],
    dir: &UnitVector<Real>,
    max_distance: Real,
    pass: usize,
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    let mut kept = Vec::with_capacity(points.len());

    for point in points {
        if cast_from(mesh, point, dir, max_distance)
            .map_err(|source| pass_error(pass, point, dir, source))?
        {
            kept.push(*point);
        }
    }

    Ok(kept)
}

#[cfg(feature = "parallel")]
fn par_filter_pass<M: RayQuery + Sync + ?Sized>(
    mesh: &M,
    points: &[Point<Real>],
    dir: &UnitVector<Real>,
    max_distance: Real,
    pass: usize,
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    let kept: Vec<Option<Point<Real>>> = points
        .par_iter()
        .map(|point| {
            cast_from(mesh, point, dir, max_distance)
                .map(|inside| inside.then_some(*point))
                .map_err(|source| pass_error(pass, point, dir, source))
        })
        .collect::<Result<_, _>>()?;

    Ok(kept.into_iter().flatten().collect())
}

/// Tests whether a ray cast from `point` along `direction` hits `mesh` at a positive distance.
///
/// The direction doesn't need to be normalized. Errors raised by the mesh are reported as
/// failures of pass `0`.
pub fn is_inside_along_ray<M: RayQuery + ?Sized>(
    mesh: &M,
    point: &Point<Real>,
    direction: &Vector<Real>,
    max_distance: Real,
) -> Result<bool, VoxelizationError> {
    validate_max_distance(max_distance)?;
    let dir = normalize_direction(direction)?;
    cast_from(mesh, point, &dir, max_distance).map_err(|source| pass_error(0, point, &dir, source))
}

/// Runs a single filter pass: keeps the points for which [`is_inside_along_ray`] holds.
///
/// The kept points are in the same order as in `points`. Errors raised by the mesh are reported
/// as failures of pass `0`.
pub fn filter_by_direction<M: RayQuery + ?Sized>(
    mesh: &M,
    points: &[Point<Real>],
    direction: &Vector<Real>,
    max_distance: Real,
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    validate_max_distance(max_distance)?;
    let dir = normalize_direction(direction)?;
    filter_pass(mesh, points, &dir, max_distance, 0)
}

/// Parallel version of [`filter_by_direction`].
#[cfg(feature = "parallel")]
pub fn par_filter_by_direction<M: RayQuery + Sync + ?Sized>(
    mesh: &M,
    points: &[Point<Real>],
    direction: &Vector<Real>,
    max_distance: Real,
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    validate_max_distance(max_distance)?;
    let dir = normalize_direction(direction)?;
    par_filter_pass(mesh, points, &dir, max_distance, 0)
}

/// Keeps the candidate points lying inside of `mesh`.
///
/// This runs the [`DirectionalRayHeuristic`] with its default settings: five passes along
/// `+X`, `+Y`, `+Z`, `(1, 1, 0)` and `(-1, 1, 0)`, with rays limited to
/// [`DEFAULT_MAX_DISTANCE`].
///
/// # Example
///
/// ```
/// # #[cfg(feature = "f32")] {
/// use voxcast3d::math::{Point, Vector};
/// use voxcast3d::shape::Cuboid;
/// use voxcast3d::voxelization::classify;
///
/// let cube = Cuboid::new(Vector::new(1.0, 1.0, 1.0));
/// let candidates = [Point::new(0.0, 0.0, 0.0), Point::new(5.0, 5.0, 5.0)];
/// let inside = classify(&cube, &candidates).unwrap();
/// assert_eq!(inside, vec![Point::new(0.0, 0.0, 0.0)]);
/// # }
/// ```
pub fn classify<M: RayQuery + ?Sized>(
    mesh: &M,
    candidates: &[Point<Real>],
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    DirectionalRayHeuristic::default().retain_inside(mesh, candidates)
}

/// Same as [`classify`], with the ray directions and distance taken from `params`.
pub fn classify_with<M: RayQuery + ?Sized>(
    mesh: &M,
    candidates: &[Point<Real>],
    params: &VoxelizationParams,
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    DirectionalRayHeuristic::from_params(params)?.retain_inside(mesh, candidates)
}

/// Parallel version of [`classify`].
#[cfg(feature = "parallel")]
pub fn par_classify<M: RayQuery + Sync + ?Sized>(
    mesh: &M,
    candidates: &[Point<Real>],
) -> Result<Vec<Point<Real>>, VoxelizationError> {
    DirectionalRayHeuristic::default()
        .par_run(mesh, candidates)
        .map(|result| result.inside)
}
