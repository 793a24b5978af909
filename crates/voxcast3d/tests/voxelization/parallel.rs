use crate::{cube_mesh, random_points};
use voxcast3d::math::{Real, Vector};
use voxcast3d::query::MeshQueryError;
use voxcast3d::voxelization::{
    classify, filter_by_direction, par_classify, par_filter_by_direction, VoxelizationError,
};

#[test]
fn parallel_classification_matches_sequential() {
    let mesh = cube_mesh(1.0).translated(&Vector::new(0.0, 0.5, 0.0));
    let candidates = random_points(3, 5000, 2.0);

    assert_eq!(
        par_classify(&mesh, &candidates).unwrap(),
        classify(&mesh, &candidates).unwrap()
    );

    let dir = Vector::new(-1.0, 1.0, 0.0);
    assert_eq!(
        par_filter_by_direction(&mesh, &candidates, &dir, 1000.0).unwrap(),
        filter_by_direction(&mesh, &candidates, &dir, 1000.0).unwrap()
    );
}

#[test]
fn parallel_classification_reports_mesh_errors() {
    let mesh = cube_mesh(1.0);
    let mut candidates = random_points(5, 100, 0.5);
    candidates[17].y = Real::INFINITY;

    assert!(matches!(
        par_classify(&mesh, &candidates),
        Err(VoxelizationError::MeshQuery {
            pass: 0,
            source: MeshQueryError::NonFiniteRay(_),
            ..
        })
    ));
}
