//! Configuration loading for SerotoninAI.
//! Reads serotoninai.toml from the current directory or the path in
//! SEROTONINAI_CONFIG. A missing default file is not an error.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use serde::{Deserialize, Serialize};
use serotoninai_client::DEFAULT_BASE_URL;
use serotoninai_common::entities::{ModelId, ModelSelection};

pub const CONFIG_ENV: &str = "SEROTONINAI_CONFIG";
pub const API_URL_ENV: &str = "SEROTONINAI_API_URL";
pub const DEFAULT_CONFIG_FILE: &str = "serotoninai.toml";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub batch: BatchConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Unset means requests never time out.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: default_base_url(), request_timeout_secs: None }
    }
}

impl ApiConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default = "default_models")]
    pub default_models: Vec<ModelId>,
    #[serde(default = "default_output_dir")]
    pub output_dir: String,
}

fn default_models()     -> Vec<ModelId> { vec![ModelId::Receptors] }
fn default_output_dir() -> String       { ".".to_string() }

impl Default for BatchConfig {
    fn default() -> Self {
        Self { default_models: default_models(), output_dir: default_output_dir() }
    }
}

impl BatchConfig {
    pub fn selection(&self) -> ModelSelection {
        ModelSelection::from_ids(self.default_models.iter().copied())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "bool_true")]
    pub color: bool,
    /// Write structure sketches as SVG files here when set.
    #[serde(default)]
    pub svg_dir: Option<String>,
}

fn bool_true() -> bool { true }

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true, svg_dir: None }
    }
}

mod tests;

impl Config {
    /// Load configuration. An explicit `path` (or SEROTONINAI_CONFIG) must
    /// exist; the default ./serotoninai.toml falls back to built-in defaults.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var(CONFIG_ENV).ok().map(PathBuf::from));

        let path = match explicit {
            Some(p) => {
                if !p.exists() {
                    anyhow::bail!("Config file not found: {}", p.display());
                }
                p
            }
            None => {
                let p = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !p.exists() {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                p
            }
        };

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("Invalid config in {}", path.display()))
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Apply base-URL overrides: command-line flag beats environment, which
    /// beats the file.
    pub fn apply_overrides(&mut self, env_url: Option<String>, cli_url: Option<String>) {
        if let Some(url) = cli_url.or(env_url).filter(|u| !u.trim().is_empty()) {
            self.api.base_url = url.trim().to_string();
        }
    }
}
