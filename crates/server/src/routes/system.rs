use actix_web::{web, HttpResponse};
use chrono::Utc;

use crate::state::AppState;
use crate::types::HealthResponse;

/// GET /health - Liveness of the relay and its configured upstream target
pub async fn health(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        service: "bandsync-relay".to_string(),
        upstream: state.analyzer.target().to_string(),
        timestamp: Utc::now(),
    })
}
