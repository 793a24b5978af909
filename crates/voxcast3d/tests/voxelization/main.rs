#[macro_use]
extern crate approx;

mod classify;
mod grid;
#[cfg(feature = "parallel")]
mod parallel;
mod scene;

use voxcast3d::math::{Point, Real, Vector};
use voxcast3d::shape::{Cuboid, TriMesh};

pub fn cube_mesh(half_extent: Real) -> TriMesh {
    let (vertices, indices) = Cuboid::new(Vector::repeat(half_extent)).to_trimesh();
    TriMesh::new(vertices, indices).unwrap()
}

/// Random points in `[-extent, extent]³`.
pub fn random_points(seed: u64, count: usize, extent: Real) -> Vec<Point<Real>> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| Point::from(Vector::from_fn(|_, _| (rng.rand_float() * 2.0 - 1.0) * extent)))
        .collect()
}
