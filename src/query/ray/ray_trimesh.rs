use crate::math::Real;
use crate::query::{MeshQueryError, Ray, RayCast, RayIntersection, RayQuery};
use crate::shape::{FeatureId, TriMesh};

impl RayCast for TriMesh {
    fn cast_local_ray_and_get_normal(
        &self,
        ray: &Ray,
        max_time_of_impact: Real,
        solid: bool,
    ) -> Option<RayIntersection> {
        if !self.local_aabb().intersects_local_ray(ray, max_time_of_impact) {
            return None;
        }

        let mut best: Option<RayIntersection> = None;
        let mut best_toi = max_time_of_impact;

        for (i, tri) in self.triangles().enumerate() {
            // The triangle AABB is tested as a solid so rays starting inside of it are kept.
            if !self.triangle_aabb(i).intersects_local_ray(ray, best_toi) {
                continue;
            }

            if let Some(mut inter) = tri.cast_local_ray_and_get_normal(ray, best_toi, solid) {
                if best.is_none() || inter.time_of_impact < best_toi {
                    best_toi = inter.time_of_impact;
                    inter.feature = FeatureId::Face(i as u32);
                    best = Some(inter);
                }
            }
        }

        best
    }
}

impl RayQuery for TriMesh {
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

#[cfg(test)]
mod test {
    use crate::math::{Point, Real, Vector};
    use crate::query::{MeshQueryError, Ray, RayCast, RayQuery};
    use crate::shape::{Cuboid, FeatureId, TriMesh};

    fn cube_mesh() -> TriMesh {
        let (vtx, idx) = Cuboid::new(Vector::repeat(1.0)).to_trimesh();
        TriMesh::new(vtx, idx).unwrap()
    }

    #[test]
    fn nearest_triangle_is_reported() {
        let mesh = cube_mesh();
        let ray = Ray::new(Point::new(-5.0, 0.2, 0.3), Vector::x());
        let hit = mesh.cast_local_ray_and_get_normal(&ray, 100.0, false).unwrap();

        assert_relative_eq!(hit.time_of_impact, 4.0);
        assert_relative_eq!(hit.normal, -Vector::x());
        let face = hit.feature.face().unwrap();
        assert!(mesh.triangle(face).vertices().iter().all(|pt| pt.x == -1.0));
    }

    #[test]
    fn ray_from_inside_reports_exit() {
        let mesh = cube_mesh();
        let ray = Ray::new(Point::new(0.1, 0.2, 0.3), Vector::y());
        let hit = mesh.any_intersection(&ray, 1000.0).unwrap().unwrap();
        assert_relative_eq!(hit.time_of_impact, 0.8, epsilon = 1.0e-5);
        assert!(matches!(hit.feature, FeatureId::Face(_)));
    }

    #[test]
    fn non_finite_ray_is_an_error() {
        let mesh = cube_mesh();
        let ray = Ray::new(Point::new(Real::NAN, 0.0, 0.0), Vector::x());
        assert!(matches!(
            mesh.any_intersection(&ray, 1000.0),
            Err(MeshQueryError::NonFiniteRay(_))
        ));
    }

    #[test]
    fn max_time_of_impact_bounds_the_query() {
        let mesh = cube_mesh();
        let ray = Ray::new(Point::new(-5.0, 0.2, 0.3), Vector::x());
        assert_eq!(mesh.any_intersection(&ray, 3.0).unwrap(), None);
    }
}
