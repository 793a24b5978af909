use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};

/// Computes the AABB of a set of points.
///
/// An empty set of points yields [`Aabb::new_invalid`].
pub fn local_point_cloud_aabb<I>(pts: I) -> Aabb
where
    I: IntoIterator<Item = Point<Real>>,
{
    pts.into_iter().fold(Aabb::new_invalid(), |mut aabb, pt| {
        aabb.take_point(pt);
        aabb
    })
}
