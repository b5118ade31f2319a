//! The core pipeline: decode, triangulate, encode.
//!
//! Every stage fails with its own error type; [`PipelineError`] carries
//! whichever one stopped the run, unchanged, so the failure tag seen by the
//! response layer is the one the failing stage produced.

use thiserror::Error;

use crate::core::algorithms::fan_triangulation::{TriangulationError, triangulate};
use crate::core::failure::{Classified, FailureCondition};
use crate::io::decoder::{DecodeError, decode_point_set};
use crate::io::encoder::{EncodeError, encode_triangulation};
use crate::service::id::IdFormatError;
use crate::service::source::FetchError;

/// The first failure raised by any pipeline stage.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum PipelineError {
    /// The identifier was rejected before any fetch.
    #[error(transparent)]
    Id(#[from] IdFormatError),
    /// The payload could not be fetched.
    #[error(transparent)]
    Fetch(#[from] FetchError),
    /// The payload could not be decoded.
    #[error(transparent)]
    Decode(#[from] DecodeError),
    /// The point set could not be triangulated.
    #[error(transparent)]
    Triangulation(#[from] TriangulationError),
    /// The result could not be encoded.
    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl Classified for PipelineError {
    fn condition(&self) -> FailureCondition {
        match self {
            Self::Id(e) => e.condition(),
            Self::Fetch(e) => e.condition(),
            Self::Decode(e) => e.condition(),
            Self::Triangulation(e) => e.condition(),
            Self::Encode(e) => e.condition(),
        }
    }
}

/// Triangulates a serialized point set and returns the serialized result.
///
/// # Errors
///
/// Returns the first stage failure wrapped in [`PipelineError`].
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::core::pipeline::triangulate_payload;
///
/// let mut payload = 3u32.to_le_bytes().to_vec();
/// for coord in [0.0f32, 0.0, 1.0, 0.0, 0.0, 1.0] {
///     payload.extend_from_slice(&coord.to_le_bytes());
/// }
///
/// let result = triangulate_payload(&payload).unwrap();
/// assert_eq!(result.len(), payload.len() + 4 + 12);
/// assert_eq!(&result[..payload.len()], &payload[..]);
/// ```
pub fn triangulate_payload(bytes: &[u8]) -> Result<Vec<u8>, PipelineError> {
    let points = decode_point_set(bytes)?;
    let triangles = triangulate(&points)?;
    let encoded = encode_triangulation(bytes, &triangles)?;
    tracing::debug!(
        points = points.len(),
        triangles = triangles.len(),
        bytes = encoded.len(),
        "triangulated payload"
    );
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(points: &[[f32; 2]]) -> Vec<u8> {
        let mut bytes = u32::try_from(points.len()).unwrap().to_le_bytes().to_vec();
        for [x, y] in points {
            bytes.extend_from_slice(&x.to_le_bytes());
            bytes.extend_from_slice(&y.to_le_bytes());
        }
        bytes
    }

    #[test]
    fn test_square_yields_two_triangles() {
        let original = payload(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]]);
        let result = triangulate_payload(&original).unwrap();

        assert_eq!(&result[..original.len()], &original[..]);
        let tail: Vec<u32> = result[original.len()..]
            .chunks_exact(4)
            .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        assert_eq!(tail, vec![2, 0, 1, 2, 0, 2, 3]);
    }

    #[test]
    fn test_stage_failures_keep_their_tag() {
        let cases: [(Vec<u8>, FailureCondition); 5] = [
            (vec![1, 0], FailureCondition::InvalidResponseFormat),
            (
                payload(&[[0.0, 0.0], [1.0, 1.0]])[..12].to_vec(),
                FailureCondition::DecodeError,
            ),
            (
                payload(&[[0.0, 0.0], [f32::NAN, 1.0], [0.0, 1.0]]),
                FailureCondition::DecodeError,
            ),
            (
                payload(&[[0.0, 0.0], [1.0, 1.0]]),
                FailureCondition::InvalidPointset,
            ),
            (
                payload(&[[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]),
                FailureCondition::InvalidPointset,
            ),
        ];
        for (bytes, expected) in cases {
            let err = triangulate_payload(&bytes).unwrap_err();
            assert_eq!(err.condition(), expected, "{err}");
        }
    }

    #[test]
    fn test_wrapped_errors_display_transparently() {
        let inner = FetchError::Unreachable {
            reason: "refused".to_string(),
        };
        let err = PipelineError::from(inner.clone());
        assert_eq!(err.to_string(), inner.to_string());
        assert_eq!(err.condition(), FailureCondition::NoResponseServeur);
    }
}
