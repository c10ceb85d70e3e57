//! Bandsync analysis relay
//!
//! Actix-web server that accepts an `audio` multipart upload, forwards it to
//! the analysis service and relays the JSON reply with permissive CORS headers.

pub mod cors;
pub mod error;
pub mod routes;
pub mod state;
pub mod types;
pub mod upload;
pub mod upstream;

use actix_web::{web, App, HttpServer};
use bandsync_common::{AppConfig, BandsyncError, Result, UPSTREAM_URL_ENV};
use tracing::{info, warn};
use tracing_actix_web::TracingLogger;

pub use error::RelayError;
pub use state::AppState;
pub use types::AudioUpload;
pub use upstream::{AnalysisService, HttpAnalysisService};

/// Start the relay server and run until shutdown
pub async fn start_server(config: AppConfig) -> Result<()> {
    if config.upstream_is_default() {
        warn!(
            "{} is not set; uploads will be forwarded to placeholder {}",
            UPSTREAM_URL_ENV, config.upstream_url
        );
    }

    let bind_addr = config.server_bind_address();
    let state = AppState::new(config).map_err(|e| BandsyncError::internal(e.to_string()))?;

    info!("Relaying uploads to {}", state.analyzer.target());
    info!("Starting HTTP server on {}", bind_addr);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors::cors_headers())
            .wrap(TracingLogger::default())
            .configure(routes::configure)
    })
    .bind(&bind_addr)?
    .run()
    .await?;

    info!("Server stopped gracefully");
    Ok(())
}
