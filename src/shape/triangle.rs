//! Definition of the triangle shape.

use crate::bounding_volume::Aabb;
use crate::math::{Point, Real, Vector};

/// A triangle shape.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Triangle {
    /// The triangle first point.
    pub a: Point<Real>,
    /// The triangle second point.
    pub b: Point<Real>,
    /// The triangle third point.
    pub c: Point<Real>,
}

impl From<[Point<Real>; 3]> for Triangle {
    fn from(arr: [Point<Real>; 3]) -> Self {
        Self::new(arr[0], arr[1], arr[2])
    }
}

impl Triangle {
    /// Creates a triangle from three points.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Triangle {
        Triangle { a, b, c }
    }

    /// The three vertices of this triangle.
    #[inline]
    pub fn vertices(&self) -> [Point<Real>; 3] {
        [self.a, self.b, self.c]
    }

    /// A vector normal of this triangle, with a length equal to twice its area.
    ///
    /// The normal points such that it is collinear to `AB × AC` (where `×` denotes the cross
    /// product).
    #[inline]
    pub fn scaled_normal(&self) -> Vector<Real> {
        let ab = self.b - self.a;
        let ac = self.c - self.a;
        ab.cross(&ac)
    }

    /// The area of this triangle.
    #[inline]
    pub fn area(&self) -> Real {
        self.scaled_normal().norm() / 2.0
    }

    /// Checks if this triangle has zero area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.scaled_normal().norm_squared() == 0.0
    }

    /// The AABB of this triangle.
    #[inline]
    pub fn local_aabb(&self) -> Aabb {
        Aabb::new(
            self.a.inf(&self.b).inf(&self.c),
            self.a.sup(&self.b).sup(&self.c),
        )
    }
}

#[cfg(test)]
mod test {
    use super::Triangle;
    use crate::math::Point;

    #[test]
    fn triangle_area_and_aabb() {
        let tri = Triangle::new(
            Point::new(0.0, 0.0, 0.0),
            Point::new(2.0, 0.0, 0.0),
            Point::new(0.0, 2.0, 1.0),
        );
        let aabb = tri.local_aabb();

        assert_eq!(aabb.mins, Point::origin());
        assert_eq!(aabb.maxs, Point::new(2.0, 2.0, 1.0));
        assert!(!tri.is_degenerate());

        let flat = Triangle::new(Point::origin(), Point::new(1.0, 1.0, 1.0), Point::new(2.0, 2.0, 2.0));
        assert!(flat.is_degenerate());
        assert_eq!(flat.area(), 0.0);
    }
}
