//! Non-persistent geometric queries.
//!
//! Ray-casting is achieved by importing traits:
//!
//! * [`query::RayCast`](RayCast) for infallible ray-casting against the shapes of this crate.
//! * [`query::RayQuery`](RayQuery) for the fallible "any intersection" query the voxelization
//!   pipeline depends on. Implement it to voxelize a mesh owned by an external host.

pub use self::error::MeshQueryError;
pub use self::ray::{local_ray_intersection_with_triangle, Ray, RayCast, RayIntersection, RayQuery};

mod error;
mod ray;
