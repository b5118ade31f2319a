//! Data and operations on 2D points carried by the point-set wire format.
//!
//! # Float Equality Semantics
//!
//! [`Point`] equality is plain IEEE-754 equality on each component: `NaN` is never
//! equal to anything and `0.0 == -0.0`. Hash-based lookups go through
//! [`PointKey`], which wraps the components in [`OrderedFloat`] so that the key
//! agrees with float `==` on every finite value (signed zeros collapse to the same
//! key).

#![forbid(unsafe_code)]

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// ERRORS
// =============================================================================

/// Errors that can occur during point validation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum PointValidationError {
    /// A coordinate value is NaN or infinite.
    #[error("Non-finite {axis} coordinate: {coordinate_value}")]
    NonFiniteCoordinate {
        /// Which component failed.
        axis: Axis,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
}

/// Component selector for a 2D point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// The first component.
    X,
    /// The second component.
    Y,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("x"),
            Self::Y => f.write_str("y"),
        }
    }
}

// =============================================================================
// POINT STRUCT DEFINITION
// =============================================================================

/// A point in the plane with single-precision coordinates.
///
/// Points are values: they are copied freely and never mutated after
/// construction. A point is only *valid* when both coordinates are finite, see
/// [`Point::validate`].
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::geometry::point::Point;
///
/// let p = Point::new([1.0, 2.0]);
/// assert_eq!(p.coords(), &[1.0, 2.0]);
/// assert_eq!(p.x(), 1.0);
/// assert!(p.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    coords: [f32; 2],
}

impl Point {
    /// Creates a point from `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn new(coords: [f32; 2]) -> Self {
        Self { coords }
    }

    /// Returns a reference to the point's coordinates as `[x, y]`.
    #[inline]
    #[must_use]
    pub const fn coords(&self) -> &[f32; 2] {
        &self.coords
    }

    /// The x coordinate.
    #[inline]
    #[must_use]
    pub const fn x(&self) -> f32 {
        self.coords[0]
    }

    /// The y coordinate.
    #[inline]
    #[must_use]
    pub const fn y(&self) -> f32 {
        self.coords[1]
    }

    /// Returns the coordinates widened to `f64`.
    ///
    /// Widening is exact, so predicates evaluated on the result see the same
    /// values that were decoded from the wire.
    #[inline]
    #[must_use]
    pub fn to_f64(&self) -> [f64; 2] {
        [f64::from(self.x()), f64::from(self.y())]
    }

    /// Returns `true` if both coordinates are finite.
    #[inline]
    #[must_use]
    pub const fn is_finite(&self) -> bool {
        self.coords[0].is_finite() && self.coords[1].is_finite()
    }

    /// Validate that both coordinates are finite (no NaN or infinite values).
    ///
    /// # Errors
    ///
    /// Returns [`PointValidationError::NonFiniteCoordinate`] naming the first
    /// offending axis.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset_triangulation::geometry::point::{Axis, Point, PointValidationError};
    ///
    /// let p = Point::new([0.0, f32::NAN]);
    /// assert!(matches!(
    ///     p.validate(),
    ///     Err(PointValidationError::NonFiniteCoordinate { axis: Axis::Y, .. })
    /// ));
    /// ```
    pub fn validate(&self) -> Result<(), PointValidationError> {
        for (axis, value) in [(Axis::X, self.x()), (Axis::Y, self.y())] {
            if !value.is_finite() {
                return Err(PointValidationError::NonFiniteCoordinate {
                    axis,
                    coordinate_value: format!("{value:?}"),
                });
            }
        }
        Ok(())
    }

    /// Returns the hashable lookup key for this point's exact value.
    #[inline]
    #[must_use]
    pub fn key(&self) -> PointKey {
        PointKey([OrderedFloat(self.x()), OrderedFloat(self.y())])
    }
}

impl From<[f32; 2]> for Point {
    #[inline]
    fn from(coords: [f32; 2]) -> Self {
        Self::new(coords)
    }
}

impl From<(f32, f32)> for Point {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new([x, y])
    }
}

impl From<Point> for [f32; 2] {
    #[inline]
    fn from(point: Point) -> Self {
        point.coords
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x(), self.y())
    }
}

// =============================================================================
// LOOKUP KEY
// =============================================================================

/// Exact-value hash key for a [`Point`].
///
/// Two keys are equal exactly when the finite coordinates compare equal with
/// `==`; `OrderedFloat` hashes `0.0` and `-0.0` identically.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PointKey([OrderedFloat<f32>; 2]);

// =============================================================================
// TESTS
// =============================================================================
