//! serotoninai-common: shared entities and errors used across all SerotoninAI crates.

pub mod error;
pub mod entities;

// Re-export commonly used types
pub use entities::{
    BatchRecord, BatchResponse, BbbPrediction, HiaPrediction, ModelId, ModelSelection,
    MolecularProperties, Receptor, ReceptorPrediction, SertPrediction, RECEPTORS,
};
pub use error::{Result, SerotoninError};
