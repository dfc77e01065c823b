//! Command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use serotoninai_common::entities::ModelSelection;

use crate::config::{API_URL_ENV, CONFIG_ENV};

#[derive(Debug, Parser)]
#[command(name = "serotoninai")]
#[command(version, about = "SerotoninAI: serotonergic activity and ADME predictions from the terminal", long_about = None)]
pub struct Cli {
    /// Prediction backend base URL
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<String>,

    /// Configuration file (default ./serotoninai.toml)
    #[arg(long, global = true, value_name = "FILE", env = CONFIG_ENV)]
    pub config: Option<PathBuf>,

    /// Write structure sketches as SVG files into this directory
    #[arg(long, global = true, value_name = "DIR")]
    pub svg: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Predict binding affinity for one 5-HT receptor subtype
    Receptors {
        compound: String,
        /// Receptor id, e.g. 5-HT2A
        #[arg(long, short)]
        receptor: String,
    },
    /// Predict serotonin transporter binding
    Sert { compound: String },
    /// Predict human intestinal absorption
    Hia { compound: String },
    /// Predict blood-brain barrier penetration
    Bbb { compound: String },
    /// Score every compound in a CSV file and export the results
    Batch {
        file: PathBuf,
        /// Comma-separated model families: receptors, sert, hia, bbb
        #[arg(long, short)]
        models: Option<ModelSelection>,
        /// Directory for the exported CSV
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Show the landing page
    Home,
    /// Show the help and FAQ page
    HelpPage,
    /// Interactive shell (the default)
    Shell,
}

/// Environment override for the backend URL, read separately so the
/// precedence flag > environment > file stays explicit.
pub fn env_api_url() -> Option<String> {
    std::env::var(API_URL_ENV).ok()
}
