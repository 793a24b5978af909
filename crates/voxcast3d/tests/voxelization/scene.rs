use crate::cube_mesh;
use voxcast3d::math::{Point, Vector};
use voxcast3d::scene::{voxelize_model, MeshScene, ModelPlacement, SceneHost};
use voxcast3d::voxelization::VoxelizationParams;

#[test]
fn voxelized_cube_sits_on_the_floor() {
    let mut scene = MeshScene::new();
    let id = scene.insert_model(cube_mesh(2.25).translated(&Vector::new(0.125, -3.0, 0.0)));

    let report = voxelize_model(
        &mut scene,
        id,
        &ModelPlacement::default(),
        &VoxelizationParams::default(),
    )
    .unwrap();

    let aabb = scene.bounding_box(id).unwrap();
    assert_eq!(aabb.mins.y, 0.0);
    assert_eq!(aabb.maxs.y, 4.5);
    assert_eq!(report.aabb, aabb);
    assert_eq!(report.grid_counts, [4, 4, 4]);
    assert_eq!(report.candidates, 64);
    assert_eq!(report.survivors_per_pass.len(), 5);

    // Every grid point but the ones lying on the floor is inside.
    assert_eq!(report.inside.len(), 48);
    assert!(report.inside.iter().all(|pt| pt.y >= 1.0));
    assert_eq!(*report.survivors_per_pass.last().unwrap(), 48);

    assert_eq!(scene.cubes().len(), report.inside.len());
    for (cube, pt) in scene.cubes().iter().zip(report.inside.iter()) {
        assert_eq!(cube.center, *pt);
        assert_eq!(cube.size, 1.0);
    }
}

#[test]
fn scaled_and_centered_placement() {
    let mut scene = MeshScene::new();
    let id = scene.insert_model(cube_mesh(0.5).translated(&Vector::new(10.0, 10.0, -4.0)));
    let placement = ModelPlacement {
        scale: 4.0,
        center_xz: true,
    };

    let report = voxelize_model(
        &mut scene,
        id,
        &placement,
        &VoxelizationParams::default().with_cell_size(0.5),
    )
    .unwrap();

    assert_eq!(report.aabb.mins, Point::new(-2.0, 0.0, -2.0));
    assert_eq!(report.aabb.maxs, Point::new(2.0, 4.0, 2.0));
    assert_eq!(report.grid_counts, [8, 8, 8]);
    assert!(!report.inside.is_empty());
    assert!(report
        .inside
        .iter()
        .all(|pt| report.aabb.contains_local_point(pt)));
    assert!(scene.cubes().iter().all(|cube| cube.size == 0.5));
}
