pub mod relay;
pub mod system;

use actix_web::web;

/// Register the relay routes
///
/// Every path other than `GET /health` reaches the relay handler, including
/// preflight requests against `/health` itself.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/health")
            .route(web::get().to(system::health))
            .default_service(web::to(relay::relay)),
    )
    .default_service(web::to(relay::relay));
}
