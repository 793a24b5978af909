use std::path::PathBuf;
use voxcast3d::math::{Real, Vector};
use voxcast3d::scene::{voxelize_model, MeshScene, ModelPlacement, SceneHost};
use voxcast3d::shape::{Cuboid, TriMesh};
use voxcast3d::voxelization::VoxelizationParams;

/// Usage: `obj_voxels3d [model.obj] [scale] [cell_size]`
///
/// Without a model, a cube is written to the temporary directory and voxelized instead.
fn main() {
    let mut args = std::env::args().skip(1);
    let path = args.next().map(PathBuf::from).unwrap_or_else(|| {
        let path = std::env::temp_dir().join("voxcast_cube.obj");
        let (vertices, indices) = Cuboid::new(Vector::new(0.05, 0.05, 0.05)).to_trimesh();
        TriMesh::new(vertices, indices)
            .unwrap()
            .to_obj_file(&path)
            .unwrap();
        path
    });
    let scale: Real = args.next().map_or(80.0, |s| s.parse().unwrap());
    let cell_size: Real = args.next().map_or(1.0, |s| s.parse().unwrap());

    let mut scene = MeshScene::new();
    let id = scene.import_model(&path).unwrap();
    let placement = ModelPlacement {
        scale,
        ..ModelPlacement::default()
    };
    let params = VoxelizationParams::default().with_cell_size(cell_size);
    let report = voxelize_model(&mut scene, id, &placement, &params).unwrap();

    println!("model: {}", path.display());
    println!("placed bounding box: {:?}", report.aabb);
    println!("grid: {:?} ({} points)", report.grid_counts, report.candidates);
    println!("survivors per pass: {:?}", report.survivors_per_pass);
    println!("cubes emitted: {}", scene.cubes().len());
}
