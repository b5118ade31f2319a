//! Geometric predicates for planar point sets.
//!
//! Both cross products used by the pipeline live here, together with the fixed
//! tolerance that decides when a cross product counts as zero. All arithmetic is
//! done in `f64` on coordinates widened from `f32`.

use crate::geometry::point::Point;

/// Magnitude at or below which a cross product is treated as zero.
pub const COLLINEARITY_TOLERANCE: f64 = 1e-9;

/// Represents the orientation of a triangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// Clockwise winding
    NEGATIVE,
    /// The points are collinear (|cross| ≤ [`COLLINEARITY_TOLERANCE`])
    DEGENERATE,
    /// Counter-clockwise winding
    POSITIVE,
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NEGATIVE => write!(f, "NEGATIVE"),
            Self::DEGENERATE => write!(f, "DEGENERATE"),
            Self::POSITIVE => write!(f, "POSITIVE"),
        }
    }
}

/// Returns `true` when `cross` is zero under [`COLLINEARITY_TOLERANCE`].
///
/// A `NaN` cross product is never degenerate.
#[inline]
#[must_use]
pub fn is_degenerate(cross: f64) -> bool {
    cross.abs() <= COLLINEARITY_TOLERANCE
}

/// Cross product of `point − origin` against the base vector `base_end − origin`.
///
/// Computes `(y − y0)·dx − (x − x0)·dy` where `(dx, dy) = base_end − origin`.
///
/// # Example
///
/// ```
/// use pointset_triangulation::geometry::point::Point;
/// use pointset_triangulation::geometry::predicates::base_cross_product;
///
/// let origin = Point::new([0.0, 0.0]);
/// let base_end = Point::new([1.0, 0.0]);
/// assert_eq!(base_cross_product(&origin, &base_end, &Point::new([5.0, 2.0])), 2.0);
/// assert_eq!(base_cross_product(&origin, &base_end, &Point::new([5.0, 0.0])), 0.0);
/// ```
#[must_use]
pub fn base_cross_product(origin: &Point, base_end: &Point, point: &Point) -> f64 {
    let [x0, y0] = origin.to_f64();
    let [x1, y1] = base_end.to_f64();
    let [x, y] = point.to_f64();
    let dx = x1 - x0;
    let dy = y1 - y0;
    (y - y0) * dx - (x - x0) * dy
}

/// Cross product over the consecutive edges `p2 − p1` and `p3 − p2`.
///
/// Computes `(y2 − y1)·(x3 − x2) − (y3 − y2)·(x2 − x1)`. The value is negative
/// for counter-clockwise triangles.
///
/// # Example
///
/// ```
/// use pointset_triangulation::geometry::point::Point;
/// use pointset_triangulation::geometry::predicates::edge_cross_product;
///
/// let cross = edge_cross_product(
///     &Point::new([0.0, 0.0]),
///     &Point::new([1.0, 0.0]),
///     &Point::new([0.0, 1.0]),
/// );
/// assert_eq!(cross, -1.0);
/// ```
#[must_use]
pub fn edge_cross_product(p1: &Point, p2: &Point, p3: &Point) -> f64 {
    let [x1, y1] = p1.to_f64();
    let [x2, y2] = p2.to_f64();
    let [x3, y3] = p3.to_f64();
    (y2 - y1) * (x3 - x2) - (y3 - y2) * (x2 - x1)
}

/// Orientation of the triangle `(p1, p2, p3)` derived from [`edge_cross_product`].
///
/// Non-finite input yields `NaN` internally and is reported as `DEGENERATE`,
/// since no winding can be assigned to it.
#[must_use]
pub fn triangle_orientation(p1: &Point, p2: &Point, p3: &Point) -> Orientation {
    let cross = edge_cross_product(p1, p2, p3);
    if cross.is_nan() || is_degenerate(cross) {
        Orientation::DEGENERATE
    } else if cross < 0.0 {
        Orientation::POSITIVE
    } else {
        Orientation::NEGATIVE
    }
}
