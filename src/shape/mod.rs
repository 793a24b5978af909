//! Shapes that can be voxelized.

pub use self::cuboid::Cuboid;
pub use self::feature_id::FeatureId;
pub use self::triangle::Triangle;
pub use self::trimesh::{TriMesh, TriMeshBuilderError};

mod cuboid;
mod feature_id;
mod triangle;
mod trimesh;
