//! The seam between page controllers and the backend.

use async_trait::async_trait;
use serotoninai_common::entities::{
    BatchResponse, BbbPrediction, HiaPrediction, ModelSelection, ReceptorPrediction, SertPrediction,
};
use serotoninai_common::error::Result;

/// Anything that can answer prediction requests. Implemented by
/// [`crate::PredictionClient`] over HTTP; tests substitute in-memory fakes.
#[async_trait]
pub trait PredictionService: Send + Sync {
    async fn predict_receptor(&self, compound_name: &str, receptor: &str) -> Result<ReceptorPrediction>;
    async fn predict_sert(&self, compound_name: &str) -> Result<SertPrediction>;
    async fn predict_hia(&self, compound_name: &str) -> Result<HiaPrediction>;
    async fn predict_bbb(&self, compound_name: &str) -> Result<BbbPrediction>;
    async fn predict_batch(&self, compounds: &[String], selection: &ModelSelection) -> Result<BatchResponse>;
}
