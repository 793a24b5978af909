//! Traits and structure needed to cast rays.

use crate::math::{Point, Real, Vector};
use crate::query::MeshQueryError;
use crate::shape::FeatureId;

/// A ray for ray-casting queries.
///
/// A ray is a half-infinite line starting at an origin point and extending
/// in a direction.
///
/// # Direction Vector
///
/// The direction can be any non-zero vector:
/// - **Normalized**: `dir` with length 1.0 gives time-of-impact in world units
/// - **Not normalized**: Time-of-impact is scaled by `dir.norm()`
///
/// The voxelization passes always cast normalized rays, so their time-of-impact is a distance.
///
/// # Example
///
/// ```rust
/// # #[cfg(feature = "f32")] {
/// use voxcast3d::query::{Ray, RayCast};
/// use voxcast3d::shape::Cuboid;
/// use nalgebra::{Point3, Vector3};
///
/// let cuboid = Cuboid::new(Vector3::new(1.0, 1.0, 1.0));
/// let ray = Ray::new(Point3::new(-5.0, 0.0, 0.0), Vector3::x());
///
/// // The ray hits the -X face of the cuboid at x = -1.
/// assert_eq!(cuboid.cast_local_ray(&ray, 100.0, true), Some(4.0));
/// assert_eq!(ray.point_at(4.0), Point3::new(-1.0, 0.0, 0.0));
/// # }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
pub struct Ray {
    /// Starting point of the ray.
    pub origin: Point<Real>,
    /// Direction vector of the ray.
    pub dir: Vector<Real>,
}

impl Ray {
    /// Creates a new ray from an origin point and direction vector.
    pub fn new(origin: Point<Real>, dir: Vector<Real>) -> Ray {
        Ray { origin, dir }
    }

    /// Computes a point along the ray at parameter `t`.
    ///
    /// Returns `origin + dir * t`.
    #[inline]
    pub fn point_at(&self, t: Real) -> Point<Real> {
        self.origin + self.dir * t
    }

    /// Are all the components of the origin and direction of this ray finite?
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.origin.iter().all(|e| e.is_finite()) && self.dir.iter().all(|e| e.is_finite())
    }
}

/// Result of a successful ray cast against a shape.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct RayIntersection {
    /// The time of impact (parameter `t`) where the ray hits the shape.
    ///
    /// The exact hit point can be computed with `ray.point_at(time_of_impact)`.
    /// If the ray direction is normalized, this is the distance traveled.
    pub time_of_impact: Real,

    /// The surface normal at the intersection point.
    ///
    /// May be unreliable if `time_of_impact` is exactly zero.
    pub normal: Vector<Real>,

    /// The geometric feature that was hit.
    pub feature: FeatureId,
}

impl RayIntersection {
    /// Creates a new `RayIntersection`.
    #[inline]
    pub fn new(time_of_impact: Real, normal: Vector<Real>, feature: FeatureId) -> RayIntersection {
        RayIntersection {
            time_of_impact,
            normal,
            feature,
        }
    }
}

/// Traits of objects which can be tested for intersection with a ray.
///
/// If `solid` is `true`, a ray starting inside of the shape reports a hit at time zero.
/// Otherwise the shape is treated as hollow and the ray reports where it exits the surface.
pub trait RayCast {
    /// Computes the time of impact between this shape and a ray.
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real, solid: bool) -> Option<Real> {
        self.cast_local_ray_and_get_normal(ray, max_time_of_impact, solid)
            .map(|inter| inter.time_of_impact)
    }

    /// Computes the time of impact, and normal between this shape and a ray.
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<RayIntersection>;

    /// Tests whether a ray intersects this shape.
    #[inline]
    fn intersects_local_ray(&self, ray: &Ray, max_time_of_impact: Real) -> bool {
        self.cast_local_ray(ray, max_time_of_impact, true).is_some()
    }
}

/// The ray-intersection capability a mesh must expose to be voxelized.
///
/// This is the only service the classifier depends on. The query is single-sided: only hits
/// along `ray.dir` count, and the surface is hollow, so a ray starting inside the mesh reports
/// where it leaves it. Hits farther than `max_time_of_impact` are ignored.
///
/// Implementations are read-only. The parallel classification functions additionally require
/// `Sync`; a host that cannot answer concurrent queries must use the sequential ones.
pub trait RayQuery {
    /// Returns the nearest intersection of `ray` with the surface, if any.
    fn any_intersection(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Result<Option<RayIntersection>, MeshQueryError>;
}
