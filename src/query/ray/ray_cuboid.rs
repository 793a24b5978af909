use crate::math::Real;
use crate::query::{MeshQueryError, Ray, RayCast, RayIntersection, RayQuery};
use crate::shape::Cuboid;

impl RayCast for Cuboid {
    #[inline]
    fn cast_local_ray(&self, ray: &Ray, max_time_of_impact: Real, solid: bool) -> Option<Real> {
        self.local_aabb()
            .cast_local_ray(ray, max_time_of_impact, solid)
    }

    #[inline]
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        self.local_aabb()
            .cast_local_ray_and_get_normal(ray, max_time_of_impact, solid)
    }
}

impl RayQuery for Cuboid {
    fn any_intersection(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
    ) -> Result<Option<RayIntersection>, MeshQueryError> {
        if !ray.is_finite() {
            return Err(MeshQueryError::NonFiniteRay(*ray));
        }

        Ok(self.cast_local_ray_and_get_normal(ray, max_time_of_impact, false))
    }
}
