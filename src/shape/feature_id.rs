/// An identifier of the feature of a shape hit by a ray.
///
/// This identifier is shape-dependent: for a [`TriMesh`](crate::shape::TriMesh) it is the
/// index of the triangle, for a [`Cuboid`](crate::shape::Cuboid) it identifies one of its
/// six faces.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, Hash, PartialEq, Eq, Default)]
pub enum FeatureId {
    /// Shape-dependent identifier of a face.
    Face(u32),
    /// Unknown identifier, typically reported by external mesh hosts.
    #[default]
    Unknown,
}

impl FeatureId {
    /// Retrieves the value of the identifier if `self` is a face.
    pub fn face(self) -> Option<u32> {
        match self {
            FeatureId::Face(id) => Some(id),
            FeatureId::Unknown => None,
        }
    }
}
