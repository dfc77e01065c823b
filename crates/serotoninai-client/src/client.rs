//! REST client for the prediction backend.
//!
//! Endpoints (all POST, JSON in / JSON out):
//!   /api/receptors/predict  pKi for one receptor subtype
//!   /api/sert/predict       serotonin transporter binding
//!   /api/hia/predict        human intestinal absorption
//!   /api/bbb/predict        blood-brain barrier penetration
//!   /api/batch/predict      many compounds × many models
//!
//! One best-effort request per call: no retries, no caching.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serotoninai_common::entities::{
    BatchRequest, BatchResponse, BbbPrediction, CompoundRequest, HiaPrediction, ModelSelection,
    ReceptorPrediction, ReceptorRequest, SertPrediction,
};
use serotoninai_common::error::{Result, SerotoninError};
use tracing::{debug, instrument, warn};
use url::Url;

use crate::service::PredictionService;

/// Fallback used when the backend does not tell us what went wrong.
pub const PREDICTION_FAILED: &str = "Prediction failed";
pub const BATCH_PREDICTION_FAILED: &str = "Batch prediction failed";

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// HTTP client bound to one backend base URL. Clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PredictionClient {
    base_url: String,
    client: reqwest::Client,
}

impl PredictionClient {
    /// Build a client. `timeout` of `None` means requests never time out.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let parsed = Url::parse(base_url)
            .map_err(|e| SerotoninError::Config(format!("Invalid API base URL {base_url:?}: {e}")))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(SerotoninError::Config(format!(
                "API base URL must be http or https, got {}",
                parsed.scheme()
            )));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!(url = %url, "POST");
        let resp = self.client.post(&url).json(body).send().await?;
        check_response_status(resp, fallback).await
    }

    #[instrument(skip(self))]
    pub async fn predict_receptor(&self, compound_name: &str, receptor: &str) -> Result<ReceptorPrediction> {
        let body = ReceptorRequest {
            compound_name: compound_name.to_string(),
            receptor: receptor.to_string(),
        };
        self.post_json("/api/receptors/predict", &body, PREDICTION_FAILED).await
    }

    #[instrument(skip(self))]
    pub async fn predict_sert(&self, compound_name: &str) -> Result<SertPrediction> {
        let body = CompoundRequest { compound_name: compound_name.to_string() };
        self.post_json("/api/sert/predict", &body, PREDICTION_FAILED).await
    }

    #[instrument(skip(self))]
    pub async fn predict_hia(&self, compound_name: &str) -> Result<HiaPrediction> {
        let body = CompoundRequest { compound_name: compound_name.to_string() };
        self.post_json("/api/hia/predict", &body, PREDICTION_FAILED).await
    }

    #[instrument(skip(self))]
    pub async fn predict_bbb(&self, compound_name: &str) -> Result<BbbPrediction> {
        let body = CompoundRequest { compound_name: compound_name.to_string() };
        self.post_json("/api/bbb/predict", &body, PREDICTION_FAILED).await
    }

    /// Score `compounds` against every backend model the selection expands to.
    #[instrument(skip(self, compounds), fields(compounds = compounds.len()))]
    pub async fn predict_batch(&self, compounds: &[String], selection: &ModelSelection) -> Result<BatchResponse> {
        let body = BatchRequest {
            compounds: compounds.to_vec(),
            models: selection.backend_models(),
        };
        debug!(models = ?body.models, "Submitting batch");
        self.post_json("/api/batch/predict", &body, BATCH_PREDICTION_FAILED).await
    }
}

#[async_trait]
impl PredictionService for PredictionClient {
    async fn predict_receptor(&self, compound_name: &str, receptor: &str) -> Result<ReceptorPrediction> {
        PredictionClient::predict_receptor(self, compound_name, receptor).await
    }

    async fn predict_sert(&self, compound_name: &str) -> Result<SertPrediction> {
        PredictionClient::predict_sert(self, compound_name).await
    }

    async fn predict_hia(&self, compound_name: &str) -> Result<HiaPrediction> {
        PredictionClient::predict_hia(self, compound_name).await
    }

    async fn predict_bbb(&self, compound_name: &str) -> Result<BbbPrediction> {
        PredictionClient::predict_bbb(self, compound_name).await
    }

    async fn predict_batch(&self, compounds: &[String], selection: &ModelSelection) -> Result<BatchResponse> {
        PredictionClient::predict_batch(self, compounds, selection).await
    }
}

// ── Helper: status check and error extraction ────────────────────────────────

async fn check_response_status<T: DeserializeOwned>(resp: reqwest::Response, fallback: &str) -> Result<T> {
    let status = resp.status();
    let body = resp.text().await?;

    if !status.is_success() {
        let message = extract_detail(&body).unwrap_or_else(|| fallback.to_string());
        warn!(status = status.as_u16(), "Backend rejected request: {}", message);
        return Err(SerotoninError::Api { status: status.as_u16(), message });
    }

    Ok(serde_json::from_str(&body)?)
}

/// Pull `detail` out of an error body. Non-string details (validation error
/// lists) come back as compact JSON.
pub fn extract_detail(body: &str) -> Option<String> {
    let json: serde_json::Value = serde_json::from_str(body).ok()?;
    match json.get("detail")? {
        serde_json::Value::Null => None,
        serde_json::Value::String(s) if s.is_empty() => None,
        serde_json::Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
