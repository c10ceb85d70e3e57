use bandsync_common::AppConfig;
use std::sync::Arc;

use crate::error::RelayError;
use crate::upstream::{AnalysisService, HttpAnalysisService};

/// Shared application state, read-only after startup
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Service uploads are relayed to
    pub analyzer: Arc<dyn AnalysisService>,
}

impl AppState {
    /// Create state backed by the HTTP analysis client for `config.upstream_url`
    pub fn new(config: AppConfig) -> Result<Self, RelayError> {
        let analyzer = HttpAnalysisService::new(config.upstream_url.clone())?;
        Ok(Self::with_analyzer(config, Arc::new(analyzer)))
    }

    /// Create state around an existing analysis service
    pub fn with_analyzer(config: AppConfig, analyzer: Arc<dyn AnalysisService>) -> Self {
        Self { config, analyzer }
    }
}
