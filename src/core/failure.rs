//! Failure vocabulary shared by every pipeline stage, and its mapping to
//! external response codes.
//!
//! Component errors carry diagnostic context (offsets, indices, offending
//! values) but each of them reduces to exactly one [`FailureCondition`]. Callers
//! that only need to route a failure inspect the tag through [`Classified`];
//! callers that need to explain it use the error's `Display`.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// FAILURE CONDITIONS
// =============================================================================

/// Closed set of named failure conditions.
///
/// The serialized and displayed form of each variant is its upper-case tag, e.g.
/// `FailureCondition::InvalidPointset` is `"INVALID_POINTSET"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FailureCondition {
    /// The point-set identifier is not a UUID.
    InvalidIdFormat,
    /// The upstream store has no point set for the identifier.
    NoPointsetFound,
    /// The upstream store could not be reached or answered with a failure.
    NoResponseServeur,
    /// The payload is too short to carry a point count.
    InvalidResponseFormat,
    /// The payload could not be decoded into finite points.
    DecodeError,
    /// The point set cannot be triangulated (too few points, or collinear).
    InvalidPointset,
    /// A point carries a non-finite coordinate.
    InvalidPoint,
    /// A triangle could not be emitted.
    ErrorTriangulation,
    /// The payload handed to the encoder does not decode.
    InvalidPointsetByteFormat,
    /// A triangle is degenerate or references a point not in the set.
    InvalidTriangle,
    /// A count or index could not be packed into the result format.
    EncodingError,
}

impl FailureCondition {
    /// Every condition, in declaration order.
    pub const ALL: [Self; 11] = [
        Self::InvalidIdFormat,
        Self::NoPointsetFound,
        Self::NoResponseServeur,
        Self::InvalidResponseFormat,
        Self::DecodeError,
        Self::InvalidPointset,
        Self::InvalidPoint,
        Self::ErrorTriangulation,
        Self::InvalidPointsetByteFormat,
        Self::InvalidTriangle,
        Self::EncodingError,
    ];

    /// The tag string for this condition.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidIdFormat => "INVALID_ID_FORMAT",
            Self::NoPointsetFound => "NO_POINTSET_FOUND",
            Self::NoResponseServeur => "NO_RESPONSE_SERVEUR",
            Self::InvalidResponseFormat => "INVALID_RESPONSE_FORMAT",
            Self::DecodeError => "DECODE_ERROR",
            Self::InvalidPointset => "INVALID_POINTSET",
            Self::InvalidPoint => "INVALID_POINT",
            Self::ErrorTriangulation => "ERROR_TRIANGULATION",
            Self::InvalidPointsetByteFormat => "INVALID_POINTSET_BYTE_FORMAT",
            Self::InvalidTriangle => "INVALID_TRIANGLE",
            Self::EncodingError => "ENCODING_ERROR",
        }
    }

    /// Maps this condition to the status and code the response layer must emit.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pointset_triangulation::core::failure::{ExternalCode, FailureCondition};
    ///
    /// let outcome = FailureCondition::InvalidPointset.classify();
    /// assert_eq!(outcome.status, 400);
    /// assert_eq!(outcome.code, ExternalCode::InvalidRequest);
    ///
    /// assert_eq!(FailureCondition::DecodeError.classify().status, 500);
    /// ```
    #[must_use]
    pub const fn classify(self) -> ExternalStatus {
        match self {
            Self::InvalidIdFormat => ExternalStatus::new(400, ExternalCode::InvalidIdFormat),
            Self::NoPointsetFound => ExternalStatus::new(404, ExternalCode::PointsetNotFound),
            Self::InvalidPointset | Self::InvalidTriangle | Self::InvalidPoint => {
                ExternalStatus::new(400, ExternalCode::InvalidRequest)
            }
            Self::NoResponseServeur => ExternalStatus::new(503, ExternalCode::ServiceUnavailable),
            Self::InvalidResponseFormat
            | Self::DecodeError
            | Self::ErrorTriangulation
            | Self::InvalidPointsetByteFormat
            | Self::EncodingError => ExternalStatus::new(500, ExternalCode::InternalError),
        }
    }
}

impl fmt::Display for FailureCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// EXTERNAL OUTCOMES
// =============================================================================

/// Code reported to clients in error bodies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExternalCode {
    /// Malformed identifier.
    InvalidIdFormat,
    /// No point set for the identifier.
    PointsetNotFound,
    /// The point set or the triangles derived from it are unusable.
    InvalidRequest,
    /// The upstream store is unavailable.
    ServiceUnavailable,
    /// Anything else.
    InternalError,
}

impl ExternalCode {
    /// The code string as it appears in response bodies.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::InvalidIdFormat => "INVALID_ID_FORMAT",
            Self::PointsetNotFound => "POINTSET_NOT_FOUND",
            Self::InvalidRequest => "INVALID_REQUEST",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ExternalCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// HTTP status and code pair selected for a failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ExternalStatus {
    /// HTTP status code.
    pub status: u16,
    /// Code reported in the error body.
    pub code: ExternalCode,
}

impl ExternalStatus {
    const fn new(status: u16, code: ExternalCode) -> Self {
        Self { status, code }
    }
}

// =============================================================================
// CLASSIFIED TRAIT
// =============================================================================

/// Errors that reduce to a single [`FailureCondition`].
pub trait Classified {
    /// The failure tag for this error.
    fn condition(&self) -> FailureCondition;

    /// Shorthand for `self.condition().classify()`.
    fn external_status(&self) -> ExternalStatus {
        self.condition().classify()
    }
}

impl Classified for FailureCondition {
    fn condition(&self) -> FailureCondition {
        *self
    }
}

// =============================================================================
// TESTS
// =============================================================================
