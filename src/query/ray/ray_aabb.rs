use core::mem;

use crate::bounding_volume::Aabb;
use crate::math::{Real, Vector, DIM};
use crate::query::{Ray, RayCast, RayIntersection};
use crate::shape::FeatureId;
use num::Zero;

impl RayCast for Aabb {
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real, solid: bool) -> Option<Real> {
        let mut tmin: Real = 0.0;
        let mut tmax: Real = max_time_of_impact;

        for i in 0usize..DIM {
            if ray.dir[i].is_zero() {
                if ray.origin[i] < self.mins[i] || ray.origin[i] > self.maxs[i] {
                    return None;
                }
            } else {
                let denom = 1.0 / ray.dir[i];
                let mut inter_with_near_halfspace = (self.mins[i] - ray.origin[i]) * denom;
                let mut inter_with_far_halfspace = (self.maxs[i] - ray.origin[i]) * denom;

                if inter_with_near_halfspace > inter_with_far_halfspace {
                    mem::swap(
                        &mut inter_with_near_halfspace,
                        &mut inter_with_far_halfspace,
                    )
                }

                tmin = tmin.max(inter_with_near_halfspace);
                tmax = tmax.min(inter_with_far_halfspace);

                if tmin > tmax {
                    // This covers the case where tmax is negative because tmin is
                    // initialized at zero.
                    return None;
                }
            }
        }

        if tmin.is_zero() && !solid {
            Some(tmax)
        } else {
            Some(tmin)
        }
    }

    #[inline]
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        ray_aabb(self, ray, max_time_of_impact, solid).map(|(t, n, i)| {
            let feature = if i < 0 {
                FeatureId::Face((-i) as u32 - 1 + 3)
            } else {
                FeatureId::Face(i as u32 - 1)
            };

            RayIntersection::new(t, n, feature)
        })
    }
}

// Sides are encoded as `±(axis + 1)`, the sign being the one of the outward face normal.
fn side_normal(side: isize) -> Vector<Real> {
    let mut normal = Vector::zeros();
    let axis = side.unsigned_abs() - 1;
    normal[axis] = if side < 0 { -1.0 } else { 1.0 };
    normal
}

fn ray_aabb(
    aabb: &Aabb,
    ray: &Ray,
    max_time_of_impact: Real,
    solid: bool,
) -> Option<(Real, Vector<Real>, isize)> {
    let mut near = (-Real::MAX, 0isize);
    let mut far = (Real::MAX, 0isize);

    for i in 0usize..DIM {
        if ray.dir[i].is_zero() {
            if ray.origin[i] < aabb.mins[i] || ray.origin[i] > aabb.maxs[i] {
                return None;
            }
        } else {
            let denom = 1.0 / ray.dir[i];
            let side = i as isize + 1;
            let mut t1 = ((aabb.mins[i] - ray.origin[i]) * denom, -side);
            let mut t2 = ((aabb.maxs[i] - ray.origin[i]) * denom, side);

            if t1.0 > t2.0 {
                mem::swap(&mut t1, &mut t2);
            }

            if t1.0 > near.0 {
                near = t1;
            }

            if t2.0 < far.0 {
                far = t2;
            }

            if near.0 > far.0 {
                return None;
            }
        }
    }

    if far.1 == 0 || far.0 < 0.0 {
        // Null direction, or the box is behind the ray.
        return None;
    }

    if near.0 < 0.0 {
        if solid {
            Some((0.0, Vector::zeros(), far.1))
        } else if far.0 <= max_time_of_impact {
            Some((far.0, side_normal(far.1), far.1))
        } else {
            None
        }
    } else if near.0 <= max_time_of_impact {
        Some((near.0, side_normal(near.1), near.1))
    } else {
        None
    }
}
