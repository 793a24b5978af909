use voxcast3d::math::{Point, Vector};
use voxcast3d::scene::{voxelize_model, MeshScene, ModelPlacement, SceneHost};
use voxcast3d::shape::{Cuboid, TriMesh};
use voxcast3d::voxelization::VoxelizationParams;

fn main() {
    let (vertices, indices) = Cuboid::new(Vector::new(2.5, 2.5, 2.5)).to_trimesh();
    let cube = TriMesh::new(vertices, indices)
        .unwrap()
        .translated(&Vector::new(0.0, -4.0, 0.0));

    let mut scene = MeshScene::new();
    let id = scene.insert_model(cube);

    let report = voxelize_model(
        &mut scene,
        id,
        &ModelPlacement::default(),
        &VoxelizationParams::default(),
    )
    .unwrap();

    // The cube now sits on the floor.
    let aabb = scene.bounding_box(id).unwrap();
    assert_eq!(aabb.mins, Point::new(-2.5, 0.0, -2.5));

    println!(
        "{:?} grid, {} candidates, survivors per pass: {:?}",
        report.grid_counts, report.candidates, report.survivors_per_pass
    );

    assert!(!report.inside.is_empty());
    assert_eq!(scene.cubes().len(), report.inside.len());
    assert!(report.inside.iter().all(|pt| aabb.contains_local_point(pt)));
}
