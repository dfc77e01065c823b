//! Core domain entities exchanged with the prediction backend.
//!
//! Field names follow the backend's camelCase JSON contract; the Rust side
//! uses snake_case and lets serde do the mapping.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SerotoninError;

// ── Molecular properties ──────────────────────────────────────────────────────

/// Physicochemical descriptors returned alongside every single-compound
/// prediction. Used by the drug-likeness panels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MolecularProperties {
    pub molecular_weight: f64,
    pub log_p: f64,
    /// Hydrogen-bond donors
    pub hbd: f64,
    /// Hydrogen-bond acceptors
    pub hba: f64,
    /// Topological polar surface area (Å²)
    pub tpsa: f64,
}

// ── Single-compound predictions ───────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceptorPrediction {
    #[serde(default = "default_true")]
    pub success: bool,
    pub compound_name: String,
    pub smiles: String,
    pub p_ki: f64,
    pub is_active: bool,
    pub receptor: String,
    pub applicability_domain: String,
    #[serde(flatten)]
    pub properties: MolecularProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SertPrediction {
    #[serde(default = "default_true")]
    pub success: bool,
    pub compound_name: String,
    pub smiles: String,
    pub p_ki: f64,
    pub is_active: bool,
    pub applicability_domain: String,
    #[serde(flatten)]
    pub properties: MolecularProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiaPrediction {
    #[serde(default = "default_true")]
    pub success: bool,
    pub compound_name: String,
    pub smiles: String,
    /// "High" or "Low"
    pub hia_classification: String,
    /// Absorbed fraction, in percent
    pub hia_value: f64,
    pub hia_probability: f64,
    #[serde(flatten)]
    pub properties: MolecularProperties,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BbbPrediction {
    #[serde(default = "default_true")]
    pub success: bool,
    pub compound_name: String,
    pub smiles: String,
    /// "BBB+" or "BBB-"
    pub bbb_classification: String,
    pub bbb_probability: f64,
    #[serde(flatten)]
    pub properties: MolecularProperties,
}

fn default_true() -> bool { true }

/// Applicability-domain label the backend uses for in-domain compounds.
pub const WITHIN_DOMAIN: &str = "Within";

// ── Request bodies ────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompoundRequest {
    pub compound_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReceptorRequest {
    pub compound_name: String,
    pub receptor: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchRequest {
    pub compounds: Vec<String>,
    pub models: Vec<String>,
}

// ── Batch results ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchResponse {
    #[serde(default)]
    pub results: Vec<BatchRecord>,
}

/// One row of a batch response, kept as the raw JSON object so it can be
/// exported verbatim in the backend's key order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BatchRecord(pub Map<String, Value>);

impl BatchRecord {
    pub fn compound(&self) -> Option<&str> {
        self.0.get("compound").and_then(Value::as_str)
    }

    /// Per-compound failure reported by the backend.
    pub fn error(&self) -> Option<String> {
        match self.0.get("error") {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(other) => Some(other.to_string()),
        }
    }

    /// Prediction object for a backend model name such as `SERT` or `5-HT2A`.
    pub fn prediction(&self, model: &str) -> Option<&Map<String, Value>> {
        self.0
            .get("predictions")
            .and_then(Value::as_object)
            .and_then(|preds| preds.get(model))
            .and_then(Value::as_object)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

// ── Models ────────────────────────────────────────────────────────────────────

/// Prediction model family a user can select for batch scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelId {
    Receptors,
    Sert,
    Hia,
    Bbb,
}

impl ModelId {
    pub const ALL: [ModelId; 4] = [ModelId::Receptors, ModelId::Sert, ModelId::Hia, ModelId::Bbb];

    pub fn as_str(&self) -> &'static str {
        match self {
            ModelId::Receptors => "receptors",
            ModelId::Sert => "sert",
            ModelId::Hia => "hia",
            ModelId::Bbb => "bbb",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ModelId::Receptors => "5-HT Receptors",
            ModelId::Sert => "SERT",
            ModelId::Hia => "HIA",
            ModelId::Bbb => "BBB",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ModelId::Receptors => "All serotonin receptor subtypes",
            ModelId::Sert => "Serotonin transporter binding",
            ModelId::Hia => "Human Intestinal Absorption",
            ModelId::Bbb => "Blood-Brain Barrier penetration",
        }
    }

    /// Backend model names this family expands to.
    pub fn backend_models(&self) -> Vec<&'static str> {
        match self {
            ModelId::Receptors => RECEPTORS.iter().map(|r| r.id).collect(),
            ModelId::Sert => vec!["SERT"],
            ModelId::Hia => vec!["HIA"],
            ModelId::Bbb => vec!["BBB"],
        }
    }
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelId {
    type Err = SerotoninError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "receptors" => Ok(ModelId::Receptors),
            "sert" => Ok(ModelId::Sert),
            "hia" => Ok(ModelId::Hia),
            "bbb" => Ok(ModelId::Bbb),
            other => Err(SerotoninError::validation(format!("Unknown prediction model: {other}"))),
        }
    }
}

/// Ordered set of selected model families. Order is the order in which the
/// user picked them, which is what the export filename uses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelSelection(Vec<ModelId>);

impl Default for ModelSelection {
    fn default() -> Self {
        Self(vec![ModelId::Receptors])
    }
}

impl ModelSelection {
    pub fn empty() -> Self {
        Self(Vec::new())
    }

    /// Build from a list, dropping duplicates but keeping first-seen order.
    pub fn from_ids(ids: impl IntoIterator<Item = ModelId>) -> Self {
        let mut selection = Self::empty();
        for id in ids {
            if !selection.contains(id) {
                selection.0.push(id);
            }
        }
        selection
    }

    /// Remove `id` when present, otherwise append it.
    pub fn toggle(&mut self, id: ModelId) {
        if let Some(pos) = self.0.iter().position(|m| *m == id) {
            self.0.remove(pos);
        } else {
            self.0.push(id);
        }
    }

    pub fn contains(&self, id: ModelId) -> bool {
        self.0.contains(&id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn ids(&self) -> &[ModelId] {
        &self.0
    }

    /// Backend model names in the fixed order receptors, SERT, HIA, BBB,
    /// independent of selection order.
    pub fn backend_models(&self) -> Vec<String> {
        ModelId::ALL
            .iter()
            .filter(|id| self.contains(**id))
            .flat_map(|id| id.backend_models())
            .map(str::to_string)
            .collect()
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.iter().map(ModelId::as_str).collect::<Vec<_>>().join(sep)
    }
}

impl FromStr for ModelSelection {
    type Err = SerotoninError;

    /// Parse a comma-separated list such as `sert,hia`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let ids = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(ModelId::from_str)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_ids(ids))
    }
}

// ── Receptor catalogue ────────────────────────────────────────────────────────

/// A serotonin receptor subtype with a backend model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Receptor {
    pub id: &'static str,
    pub name: &'static str,
    pub info: &'static str,
}

pub const RECEPTORS: [Receptor; 11] = [
    Receptor { id: "5-HT1A", name: "5-HT1A Receptor", info: "Modulates anxiety, mood, and stress response. Key target for antidepressants." },
    Receptor { id: "5-HT1B", name: "5-HT1B Receptor", info: "Regulates serotonin release and involved in migraine pathophysiology." },
    Receptor { id: "5-HT1D", name: "5-HT1D Receptor", info: "Implicated in migraine and vasoconstriction processes." },
    Receptor { id: "5-HT2A", name: "5-HT2A Receptor", info: "Primary target for psychedelics and atypical antipsychotics." },
    Receptor { id: "5-HT2B", name: "5-HT2B Receptor", info: "Linked to cardiac valvulopathy; important safety consideration." },
    Receptor { id: "5-HT2C", name: "5-HT2C Receptor", info: "Regulates appetite, mood, and energy balance." },
    Receptor { id: "5-HT3", name: "5-HT3 Receptor", info: "Ion channel receptor; target for anti-emetics." },
    Receptor { id: "5-HT4", name: "5-HT4 Receptor", info: "Involved in gastrointestinal motility and cognition." },
    Receptor { id: "5-HT5A", name: "5-HT5A Receptor", info: "Role in circadian rhythms and memory processes." },
    Receptor { id: "5-HT6", name: "5-HT6 Receptor", info: "Target for cognitive enhancement in neurodegenerative diseases." },
    Receptor { id: "5-HT7", name: "5-HT7 Receptor", info: "Modulates mood, circadian rhythms, and smooth muscle relaxation." },
];

/// Look up a receptor by id, case-insensitively (`5-ht2a` matches `5-HT2A`).
pub fn find_receptor(id: &str) -> Option<&'static Receptor> {
    let id = id.trim();
    RECEPTORS.iter().find(|r| r.id.eq_ignore_ascii_case(id))
}
