//! Conversions between shapes and mesh buffers.

pub use self::to_trimesh::unit_cuboid;

mod to_trimesh;

#[cfg(feature = "wavefront")]
pub mod wavefront;
