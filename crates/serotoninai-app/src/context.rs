//! Application context handed to every page.
//!
//! Built once at startup and kept for the life of the process. Holds the
//! backend service, the toast channel and display settings; pages own
//! their own request state.

use std::path::PathBuf;
use std::sync::Arc;

use serotoninai_client::{PredictionClient, PredictionService};

use crate::config::{BatchConfig, Config, DisplayConfig};
use crate::notify::Toaster;

#[derive(Clone)]
pub struct AppContext {
    pub service: Arc<dyn PredictionService>,
    pub toasts: Toaster,
    pub display: DisplayConfig,
    pub batch: BatchConfig,
    /// Base URL shown in the header; informational only.
    pub api_url: String,
}

impl AppContext {
    /// Connect to the backend described by `config`.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = PredictionClient::new(&config.api.base_url, config.api.timeout())?;
        Ok(Self::with_service(Arc::new(client), config))
    }

    pub fn with_service(service: Arc<dyn PredictionService>, config: &Config) -> Self {
        Self {
            service,
            toasts: Toaster::new(),
            display: config.display.clone(),
            batch: config.batch.clone(),
            api_url: config.api.base_url.clone(),
        }
    }

    pub fn svg_dir(&self) -> Option<PathBuf> {
        self.display.svg_dir.as_ref().map(PathBuf::from)
    }

    pub fn output_dir(&self) -> PathBuf {
        PathBuf::from(&self.batch.output_dir)
    }
}
