//! Fan triangulation anchored at the first point of a point set.
//!
//! # Algorithm
//!
//! 1. Reject sets with fewer than three points.
//! 2. Reject any point with a non-finite coordinate.
//! 3. Reject the set when every point `p[i]` for `i ≥ 2` is collinear with the
//!    base segment `(p[0], p[1])` under
//!    [`COLLINEARITY_TOLERANCE`](crate::geometry::predicates::COLLINEARITY_TOLERANCE).
//! 4. Emit `(p[0], p[i], p[i + 1])` for `i` in `1..=N − 2`.
//!
//! The collinearity test of step 3 only looks at the base segment; individual
//! fan triangles may still be degenerate when interior points are collinear with
//! the anchor. The encoder rejects such triangles.
//!
//! The result has no Delaunay or quality guarantees.

use thiserror::Error;

use crate::core::failure::{Classified, FailureCondition};
use crate::core::point_set::PointSet;
use crate::core::triangle::Triangle;
use crate::geometry::point::PointValidationError;
use crate::geometry::predicates::{base_cross_product, is_degenerate};

/// Minimum number of points a fan triangulation needs.
pub const MIN_POINTS: usize = 3;

/// Errors that can occur during fan triangulation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TriangulationError {
    /// Fewer than [`MIN_POINTS`] points.
    #[error("Point set has {found} points, at least 3 are required")]
    InsufficientPoints {
        /// Number of points supplied.
        found: usize,
    },
    /// A point has a NaN or infinite coordinate.
    #[error("Point {index} is invalid: {source}")]
    InvalidPoint {
        /// Index of the offending point.
        index: usize,
        /// Validation failure.
        #[source]
        source: PointValidationError,
    },
    /// Every point lies on the line through the first two points.
    #[error("All {count} points are collinear with the base segment")]
    Collinear {
        /// Number of points in the set.
        count: usize,
    },
    /// The output buffer could not hold the generated triangles.
    #[error("Failed to emit {requested} triangles: {reason}")]
    EmissionFailed {
        /// Number of triangles that were to be emitted.
        requested: usize,
        /// Underlying failure.
        reason: String,
    },
}

impl Classified for TriangulationError {
    fn condition(&self) -> FailureCondition {
        match self {
            Self::InsufficientPoints { .. } | Self::Collinear { .. } => {
                FailureCondition::InvalidPointset
            }
            Self::InvalidPoint { .. } => FailureCondition::InvalidPoint,
            Self::EmissionFailed { .. } => FailureCondition::ErrorTriangulation,
        }
    }
}

/// Triangulates `points` as a fan around `points[0]`.
///
/// Returns exactly `N − 2` triangles; the `i`-th (0-based) is
/// `(points[0], points[i + 1], points[i + 2])`.
///
/// # Errors
///
/// - [`TriangulationError::InsufficientPoints`] for fewer than three points
///   (`INVALID_POINTSET`).
/// - [`TriangulationError::InvalidPoint`] for a non-finite coordinate
///   (`INVALID_POINT`).
/// - [`TriangulationError::Collinear`] when no point leaves the base line
///   (`INVALID_POINTSET`).
/// - [`TriangulationError::EmissionFailed`] if the triangles cannot be stored
///   (`ERROR_TRIANGULATION`).
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::algorithms::fan_triangulation::triangulate;
/// use pointset_triangulation::core::point_set::PointSet;
/// use pointset_triangulation::geometry::point::Point;
///
/// let points: PointSet = [[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]
///     .into_iter()
///     .map(Point::new)
///     .collect();
///
/// let triangles = triangulate(&points).unwrap();
/// assert_eq!(triangles.len(), 2);
/// assert_eq!(triangles[1].vertices()[2], Point::new([0.0, 1.0]));
/// ```
pub fn triangulate(points: &PointSet) -> Result<Vec<Triangle>, TriangulationError> {
    let points = points.as_slice();
    let [anchor, base_end, rest @ ..] = points else {
        return Err(insufficient(points.len()));
    };
    if rest.is_empty() {
        return Err(insufficient(points.len()));
    }

    for (index, point) in points.iter().enumerate() {
        point.validate().map_err(|source| {
            tracing::warn!(index, %point, "rejecting non-finite point");
            TriangulationError::InvalidPoint { index, source }
        })?;
    }

    let collinear = rest
        .iter()
        .all(|point| is_degenerate(base_cross_product(anchor, base_end, point)));
    if collinear {
        tracing::warn!(count = points.len(), "point set is collinear");
        return Err(TriangulationError::Collinear {
            count: points.len(),
        });
    }

    let requested = points.len() - 2;
    let mut triangles = Vec::new();
    triangles
        .try_reserve_exact(requested)
        .map_err(|e| TriangulationError::EmissionFailed {
            requested,
            reason: e.to_string(),
        })?;
    triangles.extend(
        points[1..]
            .windows(2)
            .map(|pair| Triangle::new(*anchor, pair[0], pair[1])),
    );

    tracing::debug!(
        points = points.len(),
        triangles = triangles.len(),
        "fan triangulation complete"
    );
    Ok(triangles)
}

fn insufficient(found: usize) -> TriangulationError {
    tracing::warn!(found, "point set too small to triangulate");
    TriangulationError::InsufficientPoints { found }
}

// =============================================================================
// TESTS
// =============================================================================
