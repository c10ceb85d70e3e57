use actix_multipart::Multipart;
use actix_web::http::header::HeaderMap;
use actix_web::web::{self, BytesMut};
use futures_util::StreamExt;
use tracing::debug;

use crate::error::RelayError;
use crate::types::AudioUpload;

/// Multipart field carrying the audio file
pub const AUDIO_FIELD: &str = "audio";

/// Pull the `audio` field out of a multipart request body
///
/// The first `audio` field wins; every other field is drained and ignored.
/// A missing or zero-length field is reported as `MissingPayload`.
pub async fn extract_audio(
    headers: &HeaderMap,
    payload: web::Payload,
) -> Result<AudioUpload, RelayError> {
    let mut multipart = Multipart::new(headers, payload);
    let mut upload: Option<AudioUpload> = None;

    while let Some(field) = multipart.next().await {
        let mut field = field?;
        let content_disposition = field.content_disposition();
        let is_audio = upload.is_none() && content_disposition.get_name() == Some(AUDIO_FIELD);

        if !is_audio {
            while let Some(chunk) = field.next().await {
                chunk?;
            }
            continue;
        }

        let file_name = content_disposition.get_filename().map(str::to_string);
        let content_type = field.content_type().map(|mime| mime.to_string());

        let mut buf = BytesMut::new();
        while let Some(chunk) = field.next().await {
            buf.extend_from_slice(&chunk?);
        }

        debug!(
            "Received {} field: {} bytes, filename={:?}",
            AUDIO_FIELD,
            buf.len(),
            file_name
        );

        upload = Some(AudioUpload {
            bytes: buf.freeze(),
            file_name,
            content_type,
        });
    }

    match upload {
        Some(upload) if !upload.is_empty() => Ok(upload),
        _ => Err(RelayError::MissingPayload),
    }
}
