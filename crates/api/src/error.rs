use reqwest::StatusCode;
use serde::Deserialize;
use shared::IdError;
use thiserror::Error;
use wire::MappingError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Rate limited")]
    RateLimited,

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),
}

/// Error body returned by the backend, `{ "error": ..., "message": ... }`.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl ErrorBody {
    /// Parses a raw response body, tolerating non-JSON bodies.
    pub fn parse(raw: &str) -> Self {
        serde_json::from_str(raw).unwrap_or_else(|_| Self {
            error: None,
            message: Some(raw.trim().to_string()).filter(|m| !m.is_empty()),
        })
    }

    fn into_message(self, status: StatusCode) -> String {
        self.message
            .or(self.error)
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Unexpected response")
                    .to_string()
            })
    }
}

impl ApiError {
    /// Builds the error for a non-success HTTP response.
    pub fn from_status(status: StatusCode, body: ErrorBody) -> Self {
        let message = body.into_message(status);
        match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized(message),
            StatusCode::FORBIDDEN => ApiError::Forbidden(message),
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            StatusCode::CONFLICT => ApiError::Conflict(message),
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                ApiError::Validation(message)
            }
            StatusCode::TOO_MANY_REQUESTS => ApiError::RateLimited,
            StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY
            | StatusCode::GATEWAY_TIMEOUT => ApiError::ServiceUnavailable(message),
            _ => {
                tracing::error!(status = %status, message = %message, "Unexpected backend response");
                ApiError::Internal(format!("{}: {}", status.as_u16(), message))
            }
        }
    }

    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            ApiError::RateLimited | ApiError::ServiceUnavailable(_) => true,
            ApiError::Transport(e) => e.is_timeout() || e.is_connect(),
            _ => false,
        }
    }
}

impl From<IdError> for ApiError {
    fn from(err: IdError) -> Self {
        ApiError::Validation(err.to_string())
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let details: Vec<(String, String)> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |e| {
                    let message = e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    (field.to_string(), message)
                })
            })
            .collect();

        let message = if details.len() == 1 {
            format!("{}: {}", details[0].0, details[0].1)
        } else {
            format!("{} validation errors", details.len())
        };

        ApiError::Validation(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(message: &str) -> ErrorBody {
        ErrorBody {
            error: Some("error".to_string()),
            message: Some(message.to_string()),
        }
    }

    #[test]
    fn test_api_error_unauthorized() {
        let error = ApiError::from_status(StatusCode::UNAUTHORIZED, body("token expired"));
        assert!(matches!(error, ApiError::Unauthorized(ref m) if m == "token expired"));
    }

    #[test]
    fn test_api_error_forbidden() {
        let error = ApiError::from_status(StatusCode::FORBIDDEN, body("access denied"));
        assert!(matches!(error, ApiError::Forbidden(_)));
    }

    #[test]
    fn test_api_error_not_found() {
        let error = ApiError::from_status(StatusCode::NOT_FOUND, body("group not found"));
        assert!(matches!(error, ApiError::NotFound(_)));
    }

    #[test]
    fn test_api_error_conflict() {
        let error = ApiError::from_status(StatusCode::CONFLICT, body("already exists"));
        assert!(matches!(error, ApiError::Conflict(_)));
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::from_status(StatusCode::BAD_REQUEST, body("invalid input"));
        assert!(matches!(error, ApiError::Validation(_)));
        let error = ApiError::from_status(StatusCode::UNPROCESSABLE_ENTITY, body("bad name"));
        assert!(matches!(error, ApiError::Validation(_)));
    }

    #[test]
    fn test_api_error_rate_limited() {
        let error = ApiError::from_status(StatusCode::TOO_MANY_REQUESTS, ErrorBody::default());
        assert!(matches!(error, ApiError::RateLimited));
        assert!(error.is_retryable());
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::from_status(StatusCode::INTERNAL_SERVER_ERROR, ErrorBody::default());
        assert_eq!(
            error.to_string(),
            "Internal error: 500: Internal Server Error"
        );
        assert!(!error.is_retryable());
    }

    #[test]
    fn test_api_error_service_unavailable() {
        let error = ApiError::from_status(StatusCode::SERVICE_UNAVAILABLE, body("maintenance"));
        assert!(matches!(error, ApiError::ServiceUnavailable(ref m) if m == "maintenance"));
    }

    #[test]
    fn test_error_body_falls_back_to_error_code_and_raw_text() {
        let parsed = ErrorBody::parse(r#"{"error": "not_found"}"#);
        let error = ApiError::from_status(StatusCode::NOT_FOUND, parsed);
        assert_eq!(error.to_string(), "Not found: not_found");

        let parsed = ErrorBody::parse("upstream exploded");
        assert_eq!(parsed.message.as_deref(), Some("upstream exploded"));

        let parsed = ErrorBody::parse("");
        let error = ApiError::from_status(StatusCode::NOT_FOUND, parsed);
        assert_eq!(error.to_string(), "Not found: Not Found");
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::Unauthorized("test".to_string())),
            "Unauthorized: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
        assert_eq!(format!("{}", ApiError::RateLimited), "Rate limited");
        assert_eq!(
            format!("{}", ApiError::ServiceUnavailable("test".to_string())),
            "Service unavailable: test"
        );
    }

    #[test]
    fn test_from_id_error() {
        let error: ApiError = shared::parse_id("abc").unwrap_err().into();
        match error {
            ApiError::Validation(msg) => assert!(msg.contains("abc")),
            _ => panic!("Expected Validation error"),
        }
    }

    #[test]
    fn test_from_mapping_error() {
        let error: ApiError = MappingError::Rejected("Group not found".to_string()).into();
        assert!(matches!(error, ApiError::Mapping(_)));
    }
}
