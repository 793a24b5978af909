//! Definition of the cuboid shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// Shape of a box centered at the origin.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cuboid {
    /// The half-extents of the cuboid.
    pub half_extents: Vector<Real>,
}

// NOTE: format of the cuboid feature id:
//
// FeatureId::Face(id): if `id` lies in [0, 2] it indicates the axis (x, y, z) of the face normal.
//                      If `id` lies in [3, 5], the negative axis (-x, -y, -z) is given by `id - 3`.
impl Cuboid {
    /// Creates a new box from its half-extents. Half-extents are the box half-width along each
    /// axis. Each half-extent must be positive.
    #[inline]
    pub fn new(half_extents: Vector<Real>) -> Cuboid {
        Cuboid { half_extents }
    }

    /// The AABB of this cuboid.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::from_half_extents(Point::origin(), self.half_extents)
    }
}
