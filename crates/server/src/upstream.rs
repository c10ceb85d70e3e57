use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info};

use crate::error::RelayError;
use crate::types::AudioUpload;
use crate::upload::AUDIO_FIELD;

/// Filename sent upstream when the client supplied none
const FALLBACK_FILE_NAME: &str = "audio";

/// External service that turns an audio upload into an analysis result
#[async_trait]
pub trait AnalysisService: Send + Sync {
    /// Forward the upload and return the decoded JSON reply
    async fn analyze(&self, upload: AudioUpload) -> Result<Value, RelayError>;

    /// URL uploads are forwarded to
    fn target(&self) -> &str;
}

/// Analysis service reached over HTTP with a multipart POST
#[derive(Debug, Clone)]
pub struct HttpAnalysisService {
    url: String,
    client: Client,
}

impl HttpAnalysisService {
    /// Create new analysis client; requests use the transport's default timeout
    pub fn new(url: impl Into<String>) -> Result<Self, RelayError> {
        let url = url.into();
        let client = Client::builder()
            .build()
            .map_err(|e| RelayError::upstream(format!("Failed to create HTTP client: {}", e)))?;

        info!("Analysis client initialized: {}", url);
        Ok(Self { url, client })
    }

    fn audio_part(upload: &AudioUpload) -> Part {
        let file_name = upload
            .file_name
            .clone()
            .unwrap_or_else(|| FALLBACK_FILE_NAME.to_string());

        Part::stream_with_length(upload.bytes.clone(), upload.len() as u64).file_name(file_name)
    }

    /// Rebuild the upload as a single-part form under the `audio` field
    fn build_form(upload: &AudioUpload) -> Form {
        let part = match upload.content_type.as_deref() {
            // An unparsable declared type is dropped rather than failing the relay
            Some(mime) => Self::audio_part(upload).mime_str(mime).unwrap_or_else(|e| {
                debug!("Ignoring content type {:?}: {}", mime, e);
                Self::audio_part(upload)
            }),
            None => Self::audio_part(upload),
        };

        Form::new().part(AUDIO_FIELD, part)
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    async fn analyze(&self, upload: AudioUpload) -> Result<Value, RelayError> {
        debug!(
            "Forwarding {} bytes to analysis service: {}",
            upload.len(),
            self.url
        );

        let response = self
            .client
            .post(&self.url)
            .multipart(Self::build_form(&upload))
            .send()
            .await?;

        let status = response.status();
        let result: Value = response.json().await?;

        debug!("Analysis service replied with status {}", status);
        Ok(result)
    }

    fn target(&self) -> &str {
        &self.url
    }
}
