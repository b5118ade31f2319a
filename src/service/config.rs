//! Configuration for the upstream point-set store.
//!
//! The store address is an explicit value handed to whichever
//! [`PointSetSource`](crate::service::source::PointSetSource) talks to the
//! store; nothing here is global.

use std::time::Duration;
use thiserror::Error;

use crate::service::id::PointSetId;

/// Default base address of the point-set store.
pub const DEFAULT_BASE_URL: &str = "http://pointset_manager:8080/pointset";

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Environment variable overriding [`SourceConfig::base_url`].
pub const BASE_URL_ENV: &str = "POINTSET_MANAGER_URL";

/// Environment variable overriding [`SourceConfig::timeout`], in milliseconds.
pub const TIMEOUT_MS_ENV: &str = "POINTSET_MANAGER_TIMEOUT_MS";

/// Errors that can occur while loading a [`SourceConfig`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// An environment variable holds an unusable value.
    #[error("Invalid value {value:?} for {variable}: {reason}")]
    InvalidValue {
        /// Name of the variable.
        variable: &'static str,
        /// The rejected value.
        value: String,
        /// Why it was rejected.
        reason: String,
    },
}

/// Where and how to reach the point-set store.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::service::config::SourceConfigBuilder;
/// use std::time::Duration;
///
/// let config = SourceConfigBuilder::default()
///     .base_url("http://localhost:9000/pointset/")
///     .timeout(Duration::from_millis(250))
///     .build()
///     .unwrap();
///
/// let id = "123e4567-e89b-12d3-a456-426614174000".parse().unwrap();
/// assert_eq!(
///     config.endpoint_for(&id),
///     "http://localhost:9000/pointset/123e4567-e89b-12d3-a456-426614174000"
/// );
/// ```
#[derive(Builder, Clone, Debug, PartialEq, Eq)]
#[builder(build_fn(validate = "Self::validate"))]
pub struct SourceConfig {
    /// Base address; the identifier is appended as the last path segment.
    #[builder(setter(into), default = "DEFAULT_BASE_URL.to_string()")]
    pub base_url: String,
    /// Per-request timeout.
    #[builder(default = "DEFAULT_TIMEOUT")]
    pub timeout: Duration,
}

impl SourceConfigBuilder {
    fn validate(&self) -> Result<(), String> {
        if self.base_url.as_ref().is_some_and(|url| url.trim().is_empty()) {
            return Err("base_url must not be empty".to_string());
        }
        if self.timeout.is_some_and(|timeout| timeout.is_zero()) {
            return Err("timeout must be non-zero".to_string());
        }
        Ok(())
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl SourceConfig {
    /// Builds a configuration from [`BASE_URL_ENV`] and [`TIMEOUT_MS_ENV`],
    /// falling back to the defaults for unset variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if a variable is set but empty or
    /// unparsable, or if the timeout is zero.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SourceConfig::from_env`], reading variables through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`SourceConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(BASE_URL_ENV) {
            if url.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    variable: BASE_URL_ENV,
                    value: url,
                    reason: "empty".to_string(),
                });
            }
            config.base_url = url.trim().to_string();
        }

        if let Some(raw) = lookup(TIMEOUT_MS_ENV) {
            let millis: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| {
                ConfigError::InvalidValue {
                    variable: TIMEOUT_MS_ENV,
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?;
            if millis == 0 {
                return Err(ConfigError::InvalidValue {
                    variable: TIMEOUT_MS_ENV,
                    value: raw,
                    reason: "timeout must be non-zero".to_string(),
                });
            }
            config.timeout = Duration::from_millis(millis);
        }

        tracing::debug!(
            base_url = %config.base_url,
            timeout = ?config.timeout,
            "loaded source config"
        );
        Ok(config)
    }

    /// Address of the point set `id`: `{base_url}/{id}`.
    #[must_use]
    pub fn endpoint_for(&self, id: &PointSetId) -> String {
        format!("{}/{id}", self.base_url.trim_end_matches('/'))
    }
}
