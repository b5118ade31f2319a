//! Triangulation by point-set identifier.
//!
//! [`TriangulationService`] owns a [`PointSetSource`] and runs the full flow
//! for one request: parse the identifier, fetch the payload, triangulate it,
//! and turn the outcome into a [`ServiceResponse`]. The identifier is always
//! validated before the source is consulted.

use crate::core::failure::Classified;
use crate::core::pipeline::{PipelineError, triangulate_payload};
use crate::service::id::PointSetId;
use crate::service::response::ServiceResponse;
use crate::service::source::PointSetSource;

/// Request handler over a point-set source.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::service::source::InMemoryPointSetSource;
/// use pointset_triangulation::service::triangulation_service::TriangulationService;
///
/// let service = TriangulationService::new(InMemoryPointSetSource::default());
///
/// let response = service.respond("not-a-uuid");
/// assert_eq!(response.status, 400);
///
/// let response = service.respond("123e4567-e89b-12d3-a456-426614174000");
/// assert_eq!(response.status, 404);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TriangulationService<S> {
    source: S,
}

impl<S: PointSetSource> TriangulationService<S> {
    /// Creates a service reading payloads from `source`.
    #[must_use]
    pub const fn new(source: S) -> Self {
        Self { source }
    }

    /// The underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Fetches and triangulates the point set identified by `raw_id`.
    ///
    /// # Errors
    ///
    /// Returns [`PipelineError::Id`] if `raw_id` is not a UUID (the source is
    /// not consulted), [`PipelineError::Fetch`] if the payload cannot be
    /// fetched, and otherwise the failure of whichever stage stopped the run.
    pub fn triangulate_by_id(&self, raw_id: &str) -> Result<Vec<u8>, PipelineError> {
        let id = PointSetId::parse(raw_id).inspect_err(|e| {
            tracing::warn!(error = %e, "rejecting point-set id");
        })?;
        let payload = self.source.fetch(&id)?;
        tracing::debug!(%id, bytes = payload.len(), "fetched point set");
        triangulate_payload(&payload)
    }

    /// Runs [`Self::triangulate_by_id`] and builds the client response.
    #[must_use]
    pub fn respond(&self, raw_id: &str) -> ServiceResponse {
        let result = self.triangulate_by_id(raw_id);
        if let Err(e) = &result {
            let outcome = e.external_status();
            tracing::warn!(
                condition = %e.condition(),
                status = outcome.status,
                code = %outcome.code,
                error = %e,
                "triangulation request failed"
            );
        }
        ServiceResponse::from(result)
    }
}
