//! Wavefront (`.obj`) import and export of triangle meshes.
//!
//! This module is enabled by the `wavefront` feature flag.

use crate::math::{Point, Real};
use crate::shape::{TriMesh, TriMeshBuilderError};
use obj::{Group, IndexTuple, Obj, ObjData, ObjError, Object, SimplePolygon};
use std::path::Path;

/// Error raised while reading or writing a Wavefront file.
#[derive(thiserror::Error, Debug)]
pub enum WavefrontError {
    /// The file could not be created.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The file could not be parsed or written.
    #[error(transparent)]
    Obj(#[from] ObjError),
    /// A polygon of the file has fewer than three vertices.
    #[error("the polygon {polygon} of the OBJ file has fewer than three vertices")]
    DegeneratePolygon {
        /// Index of the polygon, counted over all objects and groups.
        polygon: usize,
    },
    /// A polygon references a vertex index that does not fit in 32 bits.
    #[error("the polygon {polygon} of the OBJ file references the vertex {index}, which exceeds the supported index range")]
    IndexOverflow {
        /// Index of the polygon, counted over all objects and groups.
        polygon: usize,
        /// The offending vertex index.
        index: usize,
    },
    /// The file geometry does not form a valid triangle mesh.
    #[error(transparent)]
    Mesh(#[from] TriMeshBuilderError),
}

impl TriMesh {
    /// Loads a triangle mesh from a Wavefront (`.obj`) file.
    ///
    /// All the objects and groups of the file are merged into a single mesh. Polygons with more
    /// than three vertices are triangulated as fans around their first vertex.
    pub fn from_obj_file(path: impl AsRef<Path>) -> Result<Self, WavefrontError> {
        let obj = Obj::load(path)?;
        Self::from_obj_data(&obj.data)
    }

    /// Builds a triangle mesh from already parsed Wavefront data.
    #[allow(clippy::unnecessary_cast)]
    pub fn from_obj_data(data: &ObjData) -> Result<Self, WavefrontError> {
        let vertices: Vec<Point<Real>> = data
            .position
            .iter()
            .map(|p| Point::new(p[0] as Real, p[1] as Real, p[2] as Real))
            .collect();
        let mut indices = Vec::new();

        let polys = data
            .objects
            .iter()
            .flat_map(|object| object.groups.iter())
            .flat_map(|group| group.polys.iter());

        for (polygon, poly) in polys.enumerate() {
            if poly.0.len() < 3 {
                return Err(WavefrontError::DegeneratePolygon { polygon });
            }

            let ids = poly
                .0
                .iter()
                .map(|tuple| {
                    u32::try_from(tuple.0).map_err(|_| WavefrontError::IndexOverflow {
                        polygon,
                        index: tuple.0,
                    })
                })
                .collect::<Result<Vec<u32>, _>>()?;

            for k in 1..ids.len() - 1 {
                indices.push([ids[0], ids[k], ids[k + 1]]);
            }
        }

        Ok(TriMesh::new(vertices, indices)?)
    }

    /// Outputs a Wavefront (`.obj`) file at the given path.
    #[allow(clippy::unnecessary_cast)]
    pub fn to_obj_file(&self, path: impl AsRef<Path>) -> Result<(), WavefrontError> {
        let mut file = std::fs::File::create(path)?;

        ObjData {
            position: self
                .vertices()
                .iter()
                .map(|v| [v.x as f32, v.y as f32, v.z as f32])
                .collect(),
            objects: vec![Object {
                groups: vec![Group {
                    polys: self
                        .indices()
                        .iter()
                        .map(|tri| {
                            SimplePolygon(vec![
                                IndexTuple(tri[0] as usize, None, None),
                                IndexTuple(tri[1] as usize, None, None),
                                IndexTuple(tri[2] as usize, None, None),
                            ])
                        })
                        .collect(),
                    name: String::new(),
                    index: 0,
                    material: None,
                }],
                name: String::new(),
            }],
            ..Default::default()
        }
        .write_to_buf(&mut file)?;

        Ok(())
    }
}
