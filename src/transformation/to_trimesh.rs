use crate::bounding_volume::Aabb;
use crate::math::{Point, Real};
use crate::shape::Cuboid;

impl Aabb {
    /// Discretize the boundary of this AABB as a triangle-mesh.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let center = self.center();
        let half_extents = self.half_extents();
        let mut cube_mesh = Cuboid::new(half_extents).to_trimesh();
        cube_mesh.0.iter_mut().for_each(|p| *p += center.coords);
        cube_mesh
    }
}

impl Cuboid {
    /// Discretize the boundary of this cuboid as a triangle-mesh.
    pub fn to_trimesh(&self) -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
        let (mut vtx, idx) = unit_cuboid();
        let scale = self.half_extents * 2.0;
        vtx.iter_mut()
            .for_each(|p| p.coords.component_mul_assign(&scale));
        (vtx, idx)
    }
}

/// Generates a cuboid shape with a split index buffer.
///
/// The cuboid is centered at the origin, and has its half extents set to 0.5.
/// Its triangles are oriented counter-clockwise when seen from outside.
pub fn unit_cuboid() -> (Vec<Point<Real>>, Vec<[u32; 3]>) {
    let coords = vec![
        Point::new(-0.5, -0.5, 0.5),
        Point::new(-0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, -0.5),
        Point::new(0.5, -0.5, 0.5),
        Point::new(-0.5, 0.5, 0.5),
        Point::new(-0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, -0.5),
        Point::new(0.5, 0.5, 0.5),
    ];

    let faces = vec![
        [4, 5, 0],
        [5, 1, 0],
        [5, 6, 1],
        [6, 2, 1],
        [6, 7, 3],
        [2, 6, 3],
        [7, 4, 0],
        [3, 7, 0],
        [0, 1, 2],
        [3, 0, 2],
        [7, 6, 5],
        [4, 7, 5],
    ];

    (coords, faces)
}
