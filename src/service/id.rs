//! Point-set identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use uuid::Uuid;

use crate::core::failure::{Classified, FailureCondition};

/// Errors that can occur while parsing a [`PointSetId`].
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::service::id::{IdFormatError, PointSetId};
///
/// let err = "not-a-uuid".parse::<PointSetId>().unwrap_err();
/// assert!(matches!(err, IdFormatError::NotAUuid { .. }));
/// ```
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IdFormatError {
    /// The input is not a UUID in any accepted textual form.
    #[error("Invalid point-set id {input:?}: {reason}")]
    NotAUuid {
        /// The rejected input.
        input: String,
        /// Parser diagnostic.
        reason: String,
    },
}

impl Classified for IdFormatError {
    fn condition(&self) -> FailureCondition {
        FailureCondition::InvalidIdFormat
    }
}

/// Identifier of a point set in the upstream store.
///
/// Any textual UUID form is accepted (hyphenated, simple, braced or URN); the
/// identifier always displays in hyphenated lower-case form. The version is not
/// checked.
///
/// # Examples
///
/// ```rust
/// use pointset_triangulation::service::id::PointSetId;
///
/// let id: PointSetId = "{123E4567-E89B-12D3-A456-426614174000}".parse().unwrap();
/// assert_eq!(id.to_string(), "123e4567-e89b-12d3-a456-426614174000");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointSetId(Uuid);

impl PointSetId {
    /// Wraps an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Parses an identifier.
    ///
    /// # Errors
    ///
    /// Returns [`IdFormatError::NotAUuid`] if `input` is not a UUID.
    pub fn parse(input: &str) -> Result<Self, IdFormatError> {
        Uuid::parse_str(input)
            .map(Self)
            .map_err(|e| IdFormatError::NotAUuid {
                input: input.to_string(),
                reason: e.to_string(),
            })
    }
}

impl FromStr for PointSetId {
    type Err = IdFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for PointSetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.hyphenated().fmt(f)
    }
}

impl From<Uuid> for PointSetId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}
