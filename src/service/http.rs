//! Blocking HTTP adapter for [`PointSetSource`].
//!
//! Fetches `GET {base_url}/{id}` with the configured timeout. Available with the
//! `http` cargo feature.

use crate::service::config::SourceConfig;
use crate::service::id::PointSetId;
use crate::service::source::{FetchError, PointSetSource, check_fetch_status};

/// A [`PointSetSource`] that reads payloads from the point-set store over HTTP.
#[derive(Clone, Debug)]
pub struct HttpPointSetSource {
    config: SourceConfig,
    client: reqwest::blocking::Client,
}

impl HttpPointSetSource {
    /// Creates a source for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError::Unreachable`] if the HTTP client cannot be
    /// initialised.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| FetchError::Unreachable {
                reason: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { config, client })
    }

    /// The configuration this source was built with.
    #[must_use]
    pub const fn config(&self) -> &SourceConfig {
        &self.config
    }
}

impl PointSetSource for HttpPointSetSource {
    fn fetch(&self, id: &PointSetId) -> Result<Vec<u8>, FetchError> {
        let url = self.config.endpoint_for(id);
        tracing::debug!(%url, "fetching point set");

        let response = self.client.get(&url).send().map_err(|e| {
            tracing::warn!(%url, error = %e, "point-set store request failed");
            FetchError::Unreachable {
                reason: if e.is_timeout() {
                    format!("timed out after {:?}", self.config.timeout)
                } else {
                    e.to_string()
                },
            }
        })?;

        check_fetch_status(id, response.status().as_u16())?;

        let body = response.bytes().map_err(|e| FetchError::Unreachable {
            reason: format!("failed to read response body: {e}"),
        })?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_unreachable_store_is_no_response() {
        use crate::core::failure::{Classified, FailureCondition};

        // Port 9 on loopback is discard; nothing listens there in test environments.
        let config = SourceConfig {
            base_url: "http://127.0.0.1:9/pointset".to_string(),
            timeout: Duration::from_millis(200),
        };
        let source = HttpPointSetSource::new(config.clone()).unwrap();
        assert_eq!(source.config(), &config);

        let id = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
        let err = source.fetch(&id).unwrap_err();
        assert_eq!(err.condition(), FailureCondition::NoResponseServeur);
    }
}
