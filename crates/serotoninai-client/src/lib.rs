//! serotoninai-client: typed access to the SerotoninAI prediction backend.

pub mod client;
pub mod service;

pub use client::{PredictionClient, DEFAULT_BASE_URL};
pub use service::PredictionService;
