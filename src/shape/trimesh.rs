use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};
use crate::shape::Triangle;
use core::fmt;

/// Indicated an inconsistency while building a triangle mesh.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum TriMeshBuilderError {
    /// A triangle mesh must contain at least one triangle.
    #[error("A triangle mesh must contain at least one triangle.")]
    EmptyIndices,
    /// A triangle references a vertex that does not exist.
    #[error("the triangle {triangle} references the vertex {index} which is out of bounds.")]
    IndexOutOfBounds {
        /// The offending triangle.
        triangle: u32,
        /// The out-of-bounds vertex index.
        index: u32,
    },
}

/// A triangle mesh.
///
/// The mesh is treated as a surface: ray casts report hits on either side of its triangles.
/// Every triangle caches its own AABB so ray casts can skip most of them cheaply.
#[derive(Clone)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct TriMesh {
    vertices: Vec<Point<Real>>,
    indices: Vec<[u32; 3]>,
    triangle_aabbs: Vec<Aabb>,
    aabb: Aabb,
}

impl fmt::Debug for TriMesh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TriMesh")
            .field("num_vertices", &self.vertices.len())
            .field("num_triangles", &self.indices.len())
            .field("aabb", &self.aabb)
            .finish()
    }
}

impl TriMesh {
    /// Creates a new triangle mesh from a vertex buffer and an index buffer.
    pub fn new(
        vertices: Vec<Point<Real>>,
        indices: Vec<[u32; 3]>,
    ) -> Result<Self, TriMeshBuilderError> {
        if indices.is_empty() {
            return Err(TriMeshBuilderError::EmptyIndices);
        }

        for (triangle, idx) in indices.iter().enumerate() {
            if let Some(index) = idx.iter().find(|i| **i as usize >= vertices.len()) {
                return Err(TriMeshBuilderError::IndexOutOfBounds {
                    triangle: triangle as u32,
                    index: *index,
                });
            }
        }

        let mut result = Self {
            vertices,
            indices,
            triangle_aabbs: Vec::new(),
            aabb: Aabb::new_invalid(),
        };
        result.refresh_aabbs();
        Ok(result)
    }

    fn refresh_aabbs(&mut self) {
        self.triangle_aabbs = (0..self.indices.len() as u32)
            .map(|i| self.triangle(i).local_aabb())
            .collect();
        self.aabb = self
            .triangle_aabbs
            .iter()
            .fold(Aabb::new_invalid(), |acc, aabb| acc.merged(aabb));
    }

    /// The vertex buffer of this mesh.
    #[inline]
    pub fn vertices(&self) -> &[Point<Real>] {
        &self.vertices
    }

    /// The index buffer of this mesh.
    #[inline]
    pub fn indices(&self) -> &[[u32; 3]] {
        &self.indices
    }

    /// The number of triangles of this mesh.
    #[inline]
    pub fn num_triangles(&self) -> usize {
        self.indices.len()
    }

    /// Gets the i-th mesh element.
    ///
    /// Panics if `i` is not smaller than [`TriMesh::num_triangles`].
    #[inline]
    pub fn triangle(&self, i: u32) -> Triangle {
        let idx = self.indices[i as usize];
        Triangle::new(
            self.vertices[idx[0] as usize],
            self.vertices[idx[1] as usize],
            self.vertices[idx[2] as usize],
        )
    }

    /// An iterator through all the triangles of this mesh.
    pub fn triangles(&self) -> impl ExactSizeIterator<Item = Triangle> + '_ {
        (0..self.indices.len() as u32).map(move |i| self.triangle(i))
    }

    /// The AABB of the i-th triangle of this mesh.
    #[inline]
    pub(crate) fn triangle_aabb(&self, i: usize) -> &Aabb {
        &self.triangle_aabbs[i]
    }

    /// The AABB of this mesh.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        self.aabb
    }

    /// Scales the vertices of this mesh about the origin.
    ///
    /// Negative factors mirror the mesh.
    pub fn scale(&mut self, scale: &Vector<Real>) {
        self.vertices
            .iter_mut()
            .for_each(|pt| pt.coords.component_mul_assign(scale));
        self.refresh_aabbs();
    }

    /// Returns this mesh with its vertices scaled about the origin.
    #[must_use]
    pub fn scaled(mut self, scale: &Vector<Real>) -> Self {
        self.scale(scale);
        self
    }

    /// Translates the vertices of this mesh.
    pub fn translate(&mut self, translation: &Vector<Real>) {
        self.vertices.iter_mut().for_each(|pt| *pt += translation);
        self.triangle_aabbs
            .iter_mut()
            .for_each(|aabb| *aabb = aabb.translated(translation));
        self.aabb = self.aabb.translated(translation);
    }

    /// Returns this mesh with its vertices translated.
    #[must_use]
    pub fn translated(mut self, translation: &Vector<Real>) -> Self {
        self.translate(translation);
        self
    }
}
