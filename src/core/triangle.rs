//! Triangles produced by the triangulation engine.
//!
//! Triangles hold their vertices by value. Indices into the originating
//! [`PointSet`](crate::core::point_set::PointSet) are recovered only when the
//! result is encoded.

use serde::{Deserialize, Serialize};

use crate::geometry::point::Point;
use crate::geometry::predicates::{
    Orientation, edge_cross_product, is_degenerate, triangle_orientation,
};

/// An ordered triple of points.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::triangle::Triangle;
/// use pointset_triangulation::geometry::point::Point;
///
/// let t = Triangle::new(
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([0.0, 1.0]),
/// );
/// assert!(!t.is_degenerate());
/// assert_eq!(t.vertices()[1], Point::new([1.0, 0.0]));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Triangle {
    vertices: [Point; 3],
}

impl Triangle {
    /// Creates a triangle from its vertices in order.
    #[inline]
    #[must_use]
    pub const fn new(a: Point, b: Point, c: Point) -> Self {
        Self {
            vertices: [a, b, c],
        }
    }

    /// The vertices in order.
    #[inline]
    #[must_use]
    pub const fn vertices(&self) -> &[Point; 3] {
        &self.vertices
    }

    /// Cross product over the consecutive edges of the triangle.
    #[must_use]
    pub fn edge_cross_product(&self) -> f64 {
        let [a, b, c] = &self.vertices;
        edge_cross_product(a, b, c)
    }

    /// Returns `true` if the vertices are collinear under the fixed tolerance.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        is_degenerate(self.edge_cross_product())
    }

    /// Winding of the triangle.
    #[must_use]
    pub fn orientation(&self) -> Orientation {
        let [a, b, c] = &self.vertices;
        triangle_orientation(a, b, c)
    }
}

impl From<[Point; 3]> for Triangle {
    fn from(vertices: [Point; 3]) -> Self {
        Self { vertices }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tri(a: [f32; 2], b: [f32; 2], c: [f32; 2]) -> Triangle {
        Triangle::new(Point::new(a), Point::new(b), Point::new(c))
    }

    #[test]
    fn test_triangle_degeneracy() {
        assert!(!tri([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]).is_degenerate());
        assert!(tri([0.0, 0.0], [1.0, 1.0], [2.0, 2.0]).is_degenerate());
        assert!(tri([1.0, 1.0], [1.0, 1.0], [1.0, 1.0]).is_degenerate());
    }

    #[test]
    fn test_triangle_orientation() {
        assert_eq!(
            tri([0.0, 0.0], [1.0, 0.0], [0.0, 1.0]).orientation(),
            Orientation::POSITIVE
        );
        assert_eq!(
            tri([0.0, 0.0], [0.0, 1.0], [1.0, 0.0]).orientation(),
            Orientation::NEGATIVE
        );
    }

    #[test]
    fn test_triangle_from_array_keeps_order() {
        let vertices = [
            Point::new([2.0, 0.0]),
            Point::new([0.0, 0.0]),
            Point::new([0.0, 2.0]),
        ];
        let t = Triangle::from(vertices);
        assert_eq!(t.vertices(), &vertices);
        assert_eq!(t.edge_cross_product(), 4.0);
    }
}
