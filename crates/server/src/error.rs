use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use crate::types::ErrorResponse;

/// Failures surfaced by the relay handler
#[derive(Debug, thiserror::Error)]
pub enum RelayError {
    /// Request carried no usable `audio` field
    #[error("No audio file provided")]
    MissingPayload,

    /// Body parsing, the upstream call or response decoding failed
    #[error("{0}")]
    UpstreamFailure(String),
}

impl RelayError {
    /// Create upstream failure
    pub fn upstream<S: Into<String>>(msg: S) -> Self {
        Self::UpstreamFailure(msg.into())
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::MissingPayload => StatusCode::BAD_REQUEST,
            Self::UpstreamFailure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
        })
    }
}

impl From<actix_multipart::MultipartError> for RelayError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        Self::upstream(err.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(err: reqwest::Error) -> Self {
        Self::upstream(err.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(err: serde_json::Error) -> Self {
        Self::upstream(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_missing_payload_response() {
        let resp = RelayError::MissingPayload.error_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"No audio file provided"}"#);
    }

    #[actix_web::test]
    async fn test_upstream_failure_message_is_verbatim() {
        let resp = RelayError::upstream("connection refused").error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            resp.headers().get("content-type").unwrap(),
            "application/json"
        );

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], br#"{"error":"connection refused"}"#);
    }

    #[test]
    fn test_json_error_maps_to_upstream_failure() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        let relay: RelayError = err.into();
        assert!(matches!(relay, RelayError::UpstreamFailure(_)));
    }
}
