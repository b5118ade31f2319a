//! Encoding of point sets and triangulation results.
//!
//! [`encode_triangulation`] re-decodes the original payload to recover point
//! indices, so the encoder never trusts that the triangles and the payload
//! came from the same decode. The output is either complete or absent.
//!
//! # Duplicate Points
//!
//! When the same coordinate pair occurs more than once in the payload, the
//! reverse lookup resolves it to the **last** index at which it occurs.

use thiserror::Error;

use crate::core::collections::{FastHashMap, fast_hash_map_with_capacity};
use crate::core::failure::{Classified, FailureCondition};
use crate::core::point_set::PointSet;
use crate::core::triangle::Triangle;
use crate::geometry::point::PointKey;
use crate::geometry::predicates::is_degenerate;
use crate::io::decoder::{DecodeError, decode_point_set};
use crate::io::wire::{COUNT_FIELD_LEN, POINT_RECORD_LEN, TRIANGLE_RECORD_LEN};

/// Errors that can occur while encoding.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The original payload handed to the encoder does not decode.
    #[error("Original point-set payload is malformed: {source}")]
    InvalidPointSetBytes {
        /// The decoder's failure.
        #[from]
        source: DecodeError,
    },
    /// A triangle's vertices are collinear.
    #[error("Triangle {triangle_index} is degenerate (edge cross product {cross_product})")]
    DegenerateTriangle {
        /// Position of the triangle in the input.
        triangle_index: usize,
        /// The offending cross product, as a string.
        cross_product: String,
    },
    /// A triangle vertex does not occur in the original point set.
    #[error("Vertex {vertex_index} of triangle {triangle_index} is not in the point set: {vertex}")]
    UnknownVertex {
        /// Position of the triangle in the input.
        triangle_index: usize,
        /// Position of the vertex within the triangle.
        vertex_index: usize,
        /// The vertex, as a string.
        vertex: String,
    },
    /// A count or index does not fit the `u32` wire field.
    #[error("{field} value {value} does not fit in a u32 field")]
    FieldOverflow {
        /// Which field overflowed.
        field: &'static str,
        /// The value that did not fit.
        value: usize,
    },
    /// The output buffer could not be allocated.
    #[error("Failed to reserve {requested} bytes for the encoded output: {reason}")]
    AllocationFailed {
        /// Number of bytes requested.
        requested: usize,
        /// Underlying failure.
        reason: String,
    },
}

impl Classified for EncodeError {
    fn condition(&self) -> FailureCondition {
        match self {
            Self::InvalidPointSetBytes { .. } => FailureCondition::InvalidPointsetByteFormat,
            Self::DegenerateTriangle { .. } | Self::UnknownVertex { .. } => {
                FailureCondition::InvalidTriangle
            }
            Self::FieldOverflow { .. } | Self::AllocationFailed { .. } => {
                FailureCondition::EncodingError
            }
        }
    }
}

// =============================================================================
// POINT SETS
// =============================================================================

/// Encodes a point set in the wire format read by
/// [`decode_point_set`](crate::io::decoder::decode_point_set).
///
/// Coordinates are written as-is; no finiteness check is made here.
///
/// # Errors
///
/// Returns [`EncodeError::FieldOverflow`] if the point count does not fit in a
/// `u32`, or [`EncodeError::AllocationFailed`] if the buffer cannot be reserved
/// (both `ENCODING_ERROR`).
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::point_set::PointSet;
/// use pointset_triangulation::geometry::point::Point;
/// use pointset_triangulation::io::decoder::decode_point_set;
/// use pointset_triangulation::io::encoder::encode_point_set;
///
/// let points: PointSet = vec![Point::new([0.5, 1.5]), Point::new([-2.0, 8.0])].into();
/// let bytes = encode_point_set(&points).unwrap();
/// assert_eq!(bytes.len(), 4 + 2 * 8);
/// assert_eq!(decode_point_set(&bytes).unwrap(), points);
/// ```
pub fn encode_point_set(points: &PointSet) -> Result<Vec<u8>, EncodeError> {
    let count = to_u32_field("point count", points.len())?;
    let len = points
        .len()
        .checked_mul(POINT_RECORD_LEN)
        .and_then(|body| body.checked_add(COUNT_FIELD_LEN))
        .ok_or(EncodeError::FieldOverflow {
            field: "point-set length",
            value: points.len(),
        })?;

    let mut out = reserve(len)?;
    out.extend_from_slice(&count.to_le_bytes());
    for point in points {
        out.extend_from_slice(&point.x().to_le_bytes());
        out.extend_from_slice(&point.y().to_le_bytes());
    }
    Ok(out)
}

// =============================================================================
// TRIANGULATION RESULTS
// =============================================================================

/// Appends the index-encoded `triangles` to a verbatim copy of `original`.
///
/// Output layout: `original`, then the triangle count as a `u32`, then three
/// `u32` point indices per triangle in vertex order, all little-endian.
///
/// # Errors
///
/// - [`EncodeError::InvalidPointSetBytes`] if `original` does not decode
///   (`INVALID_POINTSET_BYTE_FORMAT`).
/// - [`EncodeError::DegenerateTriangle`] if a triangle's edge cross product is
///   within tolerance of zero (`INVALID_TRIANGLE`).
/// - [`EncodeError::UnknownVertex`] if a vertex is not in the point set by exact
///   value (`INVALID_TRIANGLE`).
/// - [`EncodeError::FieldOverflow`] or [`EncodeError::AllocationFailed`] for
///   packing faults (`ENCODING_ERROR`).
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::triangle::Triangle;
/// use pointset_triangulation::geometry::point::Point;
/// use pointset_triangulation::io::encoder::{encode_point_set, encode_triangulation};
///
/// let points = vec![
///     Point::new([0.0, 0.0]),
///     Point::new([1.0, 0.0]),
///     Point::new([0.0, 1.0]),
/// ];
/// let original = encode_point_set(&points.clone().into()).unwrap();
/// let triangle = Triangle::new(points[0], points[1], points[2]);
///
/// let out = encode_triangulation(&original, &[triangle]).unwrap();
/// assert_eq!(out.len(), 44);
/// assert_eq!(&out[..28], original.as_slice());
/// assert_eq!(&out[28..32], &1u32.to_le_bytes());
/// ```
pub fn encode_triangulation(
    original: &[u8],
    triangles: &[Triangle],
) -> Result<Vec<u8>, EncodeError> {
    let points = decode_point_set(original).map_err(|source| {
        tracing::warn!(%source, "original payload no longer decodes");
        EncodeError::from(source)
    })?;
    let index = reverse_index(&points)?;

    let count = to_u32_field("triangle count", triangles.len())?;
    let len = triangles
        .len()
        .checked_mul(TRIANGLE_RECORD_LEN)
        .and_then(|body| body.checked_add(original.len() + COUNT_FIELD_LEN))
        .ok_or(EncodeError::FieldOverflow {
            field: "result length",
            value: triangles.len(),
        })?;

    let mut out = reserve(len)?;
    out.extend_from_slice(original);
    out.extend_from_slice(&count.to_le_bytes());

    for (triangle_index, triangle) in triangles.iter().enumerate() {
        let cross = triangle.edge_cross_product();
        if is_degenerate(cross) {
            tracing::warn!(triangle_index, cross, "rejecting degenerate triangle");
            return Err(EncodeError::DegenerateTriangle {
                triangle_index,
                cross_product: format!("{cross:e}"),
            });
        }

        for (vertex_index, vertex) in triangle.vertices().iter().enumerate() {
            let Some(point_index) = index.get(&vertex.key()) else {
                tracing::warn!(
                    triangle_index,
                    vertex_index,
                    %vertex,
                    "triangle vertex not in point set"
                );
                return Err(EncodeError::UnknownVertex {
                    triangle_index,
                    vertex_index,
                    vertex: vertex.to_string(),
                });
            };
            out.extend_from_slice(&point_index.to_le_bytes());
        }
    }

    tracing::debug!(
        points = points.len(),
        triangles = triangles.len(),
        bytes = out.len(),
        "encoded triangulation"
    );
    Ok(out)
}

/// Maps each distinct point value to the last index at which it occurs.
fn reverse_index(points: &PointSet) -> Result<FastHashMap<PointKey, u32>, EncodeError> {
    let mut index = fast_hash_map_with_capacity(points.len());
    for (i, point) in points.iter().enumerate() {
        index.insert(point.key(), to_u32_field("point index", i)?);
    }
    Ok(index)
}

fn to_u32_field(field: &'static str, value: usize) -> Result<u32, EncodeError> {
    u32::try_from(value).map_err(|_| EncodeError::FieldOverflow { field, value })
}

fn reserve(requested: usize) -> Result<Vec<u8>, EncodeError> {
    let mut out = Vec::new();
    out.try_reserve_exact(requested)
        .map_err(|e| EncodeError::AllocationFailed {
            requested,
            reason: e.to_string(),
        })?;
    Ok(out)
}

// =============================================================================
// TESTS
// =============================================================================
