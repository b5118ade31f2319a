//! Decoding of point-set payloads.
//!
//! The decoder is a pure function of its input: it validates the declared point
//! count against the buffer length, reads every coordinate as a little-endian
//! `f32` and rejects non-finite values at the wire boundary.

use thiserror::Error;

use crate::core::failure::{Classified, FailureCondition};
use crate::core::point_set::PointSet;
use crate::geometry::point::{Point, PointValidationError};
use crate::io::wire::{
    COORDINATE_LEN, COUNT_FIELD_LEN, POINT_RECORD_LEN, point_set_len, read_f32_le, read_u32_le,
};

/// Errors that can occur while decoding a point-set payload.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// The buffer cannot hold the point count.
    #[error("Payload of {len} bytes is too short for the 4-byte point count")]
    MissingCount {
        /// Length of the rejected buffer.
        len: usize,
    },
    /// The buffer length disagrees with the declared point count.
    #[error("Payload declares {count} points ({expected} bytes) but holds {actual} bytes")]
    LengthMismatch {
        /// Declared point count.
        count: u32,
        /// Length implied by the count.
        expected: u64,
        /// Actual buffer length.
        actual: usize,
    },
    /// A point record could not be read.
    #[error("Point {index} at byte offset {offset} could not be read")]
    TruncatedPoint {
        /// Index of the unreadable point.
        index: usize,
        /// Byte offset of the point record.
        offset: usize,
    },
    /// A coordinate decoded to NaN or infinity.
    #[error("Point {index} is not finite: {source}")]
    NonFinitePoint {
        /// Index of the offending point.
        index: usize,
        /// Which coordinate failed.
        #[source]
        source: PointValidationError,
    },
}

impl Classified for DecodeError {
    fn condition(&self) -> FailureCondition {
        match self {
            Self::MissingCount { .. } => FailureCondition::InvalidResponseFormat,
            Self::LengthMismatch { .. }
            | Self::TruncatedPoint { .. }
            | Self::NonFinitePoint { .. } => FailureCondition::DecodeError,
        }
    }
}

/// Decodes a point-set payload into its ordered points.
///
/// # Errors
///
/// - [`DecodeError::MissingCount`] if the buffer is shorter than four bytes
///   (`INVALID_RESPONSE_FORMAT`).
/// - [`DecodeError::LengthMismatch`] if the length is not exactly `4 + 8·N`
///   (`DECODE_ERROR`).
/// - [`DecodeError::TruncatedPoint`] if a record cannot be read (`DECODE_ERROR`).
/// - [`DecodeError::NonFinitePoint`] if a coordinate is NaN or infinite
///   (`DECODE_ERROR`).
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::io::decoder::decode_point_set;
/// use pointset_triangulation::geometry::point::Point;
///
/// let mut bytes = 1u32.to_le_bytes().to_vec();
/// bytes.extend_from_slice(&2.5f32.to_le_bytes());
/// bytes.extend_from_slice(&(-1.0f32).to_le_bytes());
///
/// let points = decode_point_set(&bytes).unwrap();
/// assert_eq!(points.as_slice(), &[Point::new([2.5, -1.0])]);
/// ```
pub fn decode_point_set(bytes: &[u8]) -> Result<PointSet, DecodeError> {
    let count = read_u32_le(bytes, 0).ok_or(DecodeError::MissingCount { len: bytes.len() })?;

    let expected = point_set_len(count);
    if u64::try_from(bytes.len()).ok() != Some(expected) {
        tracing::warn!(count, expected, actual = bytes.len(), "point-set length mismatch");
        return Err(DecodeError::LengthMismatch {
            count,
            expected,
            actual: bytes.len(),
        });
    }

    // The length check bounds the count by the buffer size.
    let count = usize::try_from(count).map_err(|_| DecodeError::LengthMismatch {
        count,
        expected,
        actual: bytes.len(),
    })?;

    let mut points = Vec::with_capacity(count);
    for index in 0..count {
        let offset = COUNT_FIELD_LEN + index * POINT_RECORD_LEN;
        let (Some(x), Some(y)) = (
            read_f32_le(bytes, offset),
            read_f32_le(bytes, offset + COORDINATE_LEN),
        ) else {
            return Err(DecodeError::TruncatedPoint { index, offset });
        };

        let point = Point::new([x, y]);
        point
            .validate()
            .map_err(|source| DecodeError::NonFinitePoint { index, source })?;
        points.push(point);
    }

    tracing::debug!(points = points.len(), "decoded point set");
    Ok(PointSet::new(points))
}
