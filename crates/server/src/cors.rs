//! Cross-origin headers attached to every relay response

use actix_web::middleware::DefaultHeaders;

pub const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");

pub const ALLOW_HEADERS: (&str, &str) = (
    "Access-Control-Allow-Headers",
    "authorization, x-client-info, apikey, content-type",
);

/// Middleware adding the CORS header set to success, error and preflight responses alike
pub fn cors_headers() -> DefaultHeaders {
    DefaultHeaders::new().add(ALLOW_ORIGIN).add(ALLOW_HEADERS)
}
