//! The seam between the pipeline and the store that holds point-set payloads.
//!
//! A [`PointSetSource`] turns a validated [`PointSetId`] into raw payload bytes.
//! Sources own their own I/O policy (timeouts, retries); the pipeline treats a
//! fetched payload as opaque bytes and a failure as a [`FetchError`].

use thiserror::Error;

use crate::core::collections::FastHashMap;
use crate::core::failure::{Classified, FailureCondition};
use crate::service::id::PointSetId;

/// HTTP status the store answers with when a payload is served.
pub const STATUS_OK: u16 = 200;

/// HTTP status the store answers with when the identifier is unknown.
pub const STATUS_NOT_FOUND: u16 = 404;

/// Errors that can occur while fetching a payload.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum FetchError {
    /// The store holds no point set under this identifier.
    #[error("No point set found for id {id}")]
    NotFound {
        /// The requested identifier.
        id: PointSetId,
    },
    /// The store could not be reached or timed out.
    #[error("Point-set store unreachable: {reason}")]
    Unreachable {
        /// Transport diagnostic.
        reason: String,
    },
    /// The store answered with a status other than success or not-found.
    #[error("Point-set store answered with HTTP status {status}")]
    UnexpectedStatus {
        /// The status received.
        status: u16,
    },
}

impl Classified for FetchError {
    fn condition(&self) -> FailureCondition {
        match self {
            Self::NotFound { .. } => FailureCondition::NoPointsetFound,
            Self::Unreachable { .. } | Self::UnexpectedStatus { .. } => {
                FailureCondition::NoResponseServeur
            }
        }
    }
}

/// Maps the store's HTTP status for `id` to a fetch outcome.
///
/// # Errors
///
/// Returns [`FetchError::NotFound`] for 404 and [`FetchError::UnexpectedStatus`]
/// for any other status except 200.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::service::source::{FetchError, check_fetch_status};
///
/// let id = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
/// assert!(check_fetch_status(&id, 200).is_ok());
/// assert!(matches!(check_fetch_status(&id, 404), Err(FetchError::NotFound { .. })));
/// assert!(matches!(
///     check_fetch_status(&id, 502),
///     Err(FetchError::UnexpectedStatus { status: 502 })
/// ));
/// ```
pub fn check_fetch_status(id: &PointSetId, status: u16) -> Result<(), FetchError> {
    match status {
        STATUS_OK => Ok(()),
        STATUS_NOT_FOUND => Err(FetchError::NotFound { id: *id }),
        status => Err(FetchError::UnexpectedStatus { status }),
    }
}

/// Something that can serve point-set payloads by identifier.
pub trait PointSetSource {
    /// Returns the raw payload stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns a [`FetchError`] if the payload cannot be obtained.
    fn fetch(&self, id: &PointSetId) -> Result<Vec<u8>, FetchError>;
}

impl<S: PointSetSource + ?Sized> PointSetSource for &S {
    fn fetch(&self, id: &PointSetId) -> Result<Vec<u8>, FetchError> {
        (**self).fetch(id)
    }
}

/// A source backed by an in-process map.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::service::id::PointSetId;
/// use pointset_triangulation::service::source::{InMemoryPointSetSource, PointSetSource};
///
/// let id: PointSetId = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
/// let mut source = InMemoryPointSetSource::default();
/// source.insert(id, 0u32.to_le_bytes().to_vec());
///
/// assert_eq!(source.fetch(&id).unwrap(), vec![0, 0, 0, 0]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct InMemoryPointSetSource {
    payloads: FastHashMap<PointSetId, Vec<u8>>,
}

impl InMemoryPointSetSource {
    /// Stores `payload` under `id`, returning the payload it replaces.
    pub fn insert(&mut self, id: PointSetId, payload: Vec<u8>) -> Option<Vec<u8>> {
        self.payloads.insert(id, payload)
    }

    /// Removes the payload stored under `id`.
    pub fn remove(&mut self, id: &PointSetId) -> Option<Vec<u8>> {
        self.payloads.remove(id)
    }

    /// Number of stored payloads.
    #[must_use]
    pub fn len(&self) -> usize {
        self.payloads.len()
    }

    /// Returns `true` if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.payloads.is_empty()
    }
}

impl FromIterator<(PointSetId, Vec<u8>)> for InMemoryPointSetSource {
    fn from_iter<I: IntoIterator<Item = (PointSetId, Vec<u8>)>>(iter: I) -> Self {
        Self {
            payloads: iter.into_iter().collect(),
        }
    }
}

impl PointSetSource for InMemoryPointSetSource {
    fn fetch(&self, id: &PointSetId) -> Result<Vec<u8>, FetchError> {
        self.payloads
            .get(id)
            .cloned()
            .ok_or(FetchError::NotFound { id: *id })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn fetch_through<S: PointSetSource>(source: S, id: &PointSetId) -> Result<Vec<u8>, FetchError> {
        source.fetch(id)
    }

    fn random_id() -> PointSetId {
        PointSetId::from(Uuid::new_v4())
    }

    #[test]
    fn test_status_mapping() {
        let id = random_id();
        assert_eq!(check_fetch_status(&id, 200), Ok(()));
        assert_eq!(
            check_fetch_status(&id, 404).unwrap_err().condition(),
            FailureCondition::NoPointsetFound
        );
        for status in [201, 204, 301, 400, 401, 500, 503] {
            let err = check_fetch_status(&id, status).unwrap_err();
            assert_eq!(err, FetchError::UnexpectedStatus { status });
            assert_eq!(err.condition(), FailureCondition::NoResponseServeur);
        }
    }

    #[test]
    fn test_unreachable_is_no_response() {
        let err = FetchError::Unreachable {
            reason: "connection timed out".to_string(),
        };
        assert_eq!(err.condition(), FailureCondition::NoResponseServeur);
        assert!(err.to_string().contains("timed out"));
    }

    #[test]
    fn test_in_memory_source() {
        let present = random_id();
        let missing = random_id();
        let mut source: InMemoryPointSetSource =
            std::iter::once((present, vec![1, 2, 3])).collect();

        assert_eq!(source.len(), 1);
        assert_eq!(source.fetch(&present).unwrap(), vec![1, 2, 3]);
        assert_eq!(
            source.fetch(&missing),
            Err(FetchError::NotFound { id: missing })
        );

        assert_eq!(source.insert(present, vec![4]), Some(vec![1, 2, 3]));
        assert_eq!(fetch_through(&source, &present).unwrap(), vec![4]);
        assert_eq!(source.remove(&present), Some(vec![4]));
        assert!(source.is_empty());
    }
}
