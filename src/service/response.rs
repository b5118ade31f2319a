//! Response shapes produced at the service boundary.

use serde::{Deserialize, Serialize};

use crate::core::failure::{Classified, ExternalCode};
use crate::core::pipeline::PipelineError;

/// Status of a successful triangulation response.
pub const STATUS_SUCCESS: u16 = 200;

/// Content type of a successful triangulation response.
pub const BINARY_CONTENT_TYPE: &str = "application/octet-stream";

/// Content type of an error response.
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// JSON body of an error response: `{"code": ..., "message": ...}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// Client-facing error code.
    pub code: ExternalCode,
    /// Human-readable explanation.
    pub message: String,
}

impl ErrorBody {
    /// Builds the body for `error`.
    ///
    /// Requests rejected for their content and internal failures carry the
    /// failure tag (e.g. `INVALID_POINTSET`); the other codes use a fixed
    /// message.
    #[must_use]
    pub fn from_error(error: &PipelineError) -> Self {
        let code = error.external_status().code;
        let message = match code {
            ExternalCode::InvalidIdFormat => "Invalid ID format".to_string(),
            ExternalCode::PointsetNotFound => "PointSet not found".to_string(),
            ExternalCode::ServiceUnavailable => "PointSetManager unavailable".to_string(),
            ExternalCode::InvalidRequest | ExternalCode::InternalError => {
                error.condition().as_str().to_string()
            }
        };
        Self { code, message }
    }

    /// Renders the body as JSON.
    ///
    /// # Errors
    ///
    /// Returns the serializer's error; this only happens if the serializer
    /// itself fails to allocate.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Body of a [`ServiceResponse`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ResponseBody {
    /// Encoded triangulation result.
    Binary(Vec<u8>),
    /// Error description.
    Json(ErrorBody),
}

/// A transport-agnostic response: status plus body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body.
    pub body: ResponseBody,
}

impl ServiceResponse {
    /// A 200 response carrying `bytes`.
    #[must_use]
    pub const fn success(bytes: Vec<u8>) -> Self {
        Self {
            status: STATUS_SUCCESS,
            body: ResponseBody::Binary(bytes),
        }
    }

    /// The error response for `error`, per its failure classification.
    #[must_use]
    pub fn failure(error: &PipelineError) -> Self {
        Self {
            status: error.external_status().status,
            body: ResponseBody::Json(ErrorBody::from_error(error)),
        }
    }

    /// Content type matching the body.
    #[must_use]
    pub const fn content_type(&self) -> &'static str {
        match self.body {
            ResponseBody::Binary(_) => BINARY_CONTENT_TYPE,
            ResponseBody::Json(_) => JSON_CONTENT_TYPE,
        }
    }

    /// Returns `true` for a 200 response.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.status == STATUS_SUCCESS
    }
}

impl From<Result<Vec<u8>, PipelineError>> for ServiceResponse {
    fn from(result: Result<Vec<u8>, PipelineError>) -> Self {
        match result {
            Ok(bytes) => Self::success(bytes),
            Err(e) => Self::failure(&e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::algorithms::fan_triangulation::TriangulationError;
    use crate::io::decoder::DecodeError;
    use crate::service::id::PointSetId;
    use crate::service::source::FetchError;

    #[test]
    fn test_fixed_messages() {
        let id_err = PipelineError::from("nope".parse::<PointSetId>().unwrap_err());
        let body = ErrorBody::from_error(&id_err);
        assert_eq!(body.code, ExternalCode::InvalidIdFormat);
        assert_eq!(body.message, "Invalid ID format");

        let unreachable = PipelineError::from(FetchError::Unreachable {
            reason: "timeout".to_string(),
        });
        assert_eq!(
            ErrorBody::from_error(&unreachable).message,
            "PointSetManager unavailable"
        );
    }

    #[test]
    fn test_tag_messages() {
        let collinear = PipelineError::from(TriangulationError::Collinear { count: 3 });
        let body = ErrorBody::from_error(&collinear);
        assert_eq!(body.code, ExternalCode::InvalidRequest);
        assert_eq!(body.message, "INVALID_POINTSET");

        let decode = PipelineError::from(DecodeError::MissingCount { len: 2 });
        let response = ServiceResponse::failure(&decode);
        assert_eq!(response.status, 500);
        assert_eq!(response.content_type(), JSON_CONTENT_TYPE);
        let ResponseBody::Json(body) = response.body else {
            panic!("expected a JSON body");
        };
        assert_eq!(body.code, ExternalCode::InternalError);
        assert_eq!(body.message, "INVALID_RESPONSE_FORMAT");
    }

    #[test]
    fn test_error_body_json_shape() {
        let body = ErrorBody {
            code: ExternalCode::PointsetNotFound,
            message: "PointSet not found".to_string(),
        };
        let json: serde_json::Value = serde_json::from_str(&body.to_json().unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"code": "POINTSET_NOT_FOUND", "message": "PointSet not found"})
        );
    }

    #[test]
    fn test_success_response() {
        let response = ServiceResponse::from(Ok(vec![0, 0, 0, 0]));
        assert!(response.is_success());
        assert_eq!(response.content_type(), BINARY_CONTENT_TYPE);
        assert_eq!(response.body, ResponseBody::Binary(vec![0, 0, 0, 0]));
    }
}
