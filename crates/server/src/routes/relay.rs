use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use tracing::{error, info};

use crate::error::RelayError;
use crate::state::AppState;
use crate::upload::extract_audio;

/// Relay an `audio` upload to the analysis service
///
/// Mounted as the default service, so it answers on any path. `OPTIONS`
/// short-circuits as a CORS preflight; every other method is relayed.
pub async fn relay(
    req: HttpRequest,
    payload: web::Payload,
    state: web::Data<AppState>,
) -> Result<HttpResponse, RelayError> {
    if req.method() == Method::OPTIONS {
        return Ok(preflight());
    }

    let upload = extract_audio(req.headers(), payload).await?;
    info!(
        "Relaying audio upload ({} bytes) to {}",
        upload.len(),
        state.analyzer.target()
    );

    let result = state.analyzer.analyze(upload).await.map_err(|e| {
        error!("Analysis relay failed: {}", e);
        e
    })?;

    Ok(HttpResponse::Ok().json(result))
}

/// Preflight reply; CORS headers come from the app-wide middleware
fn preflight() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}
