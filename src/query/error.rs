use crate::query::Ray;

/// Error reported by a mesh when it cannot answer a ray query.
///
/// The voxelization pipeline never swallows this error: it aborts the current run and reports
/// it to the caller together with the point and pass that triggered it.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum MeshQueryError {
    /// The ray origin or direction contains a NaN or infinite component.
    #[error("the ray {0:?} has a non-finite origin or direction")]
    NonFiniteRay(Ray),
    /// The external mesh host failed to answer the query.
    #[error("the mesh host failed to answer the ray query: {0}")]
    Host(String),
}
