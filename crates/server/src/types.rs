use actix_web::web::Bytes;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Audio file pulled out of an inbound multipart request
#[derive(Debug, Clone)]
pub struct AudioUpload {
    /// Raw file content
    pub bytes: Bytes,

    /// Filename from the part's content disposition
    pub file_name: Option<String>,

    /// Content type declared for the part
    pub content_type: Option<String>,
}

impl AudioUpload {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// Error body returned on every failure path
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub upstream: String,
    pub timestamp: DateTime<Utc>,
}
