//! Batch calculation page: load a CSV of compound names, choose models,
//! run the batch endpoint, preview and export the results.

use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::NaiveDate;
use console::style;
use serotoninai_batch::{build_preview, export_filename, parse_compounds, to_csv, PreviewTable};
use serotoninai_batch::export::export_records;
use serotoninai_common::entities::{BatchRecord, ModelId, ModelSelection};

use super::state::PageController;
use super::{drive, status_line, Outcome};
use crate::context::AppContext;
use crate::render::{self, table::render_table};

pub const TITLE: &str = "Batch Calculation";
pub const SUBTITLE: &str = "Upload multiple compounds for bulk predictions";
pub const CONCEPT: &str = "Enables large-scale predictions for multiple molecules, useful for researchers \
screening compound libraries. Upload a CSV with compound names or SMILES, select your prediction types, \
and download comprehensive results.";

pub const NO_FILE: &str = "Please upload a file first";
pub const NO_MODELS: &str = "Please select at least one prediction model";
pub const BATCH_FAILED: &str = "Batch processing failed";

/// A loaded CSV, kept as text until the batch is processed.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadedFile {
    pub name: String,
    pub content: String,
}

/// Results together with the model selection they were requested for.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchResults {
    pub results: Vec<BatchRecord>,
    pub selection: ModelSelection,
}

#[derive(Debug)]
pub struct BatchPage {
    pub controller: PageController<BatchResults>,
    file: Option<UploadedFile>,
    selection: ModelSelection,
}

impl BatchPage {
    pub fn new(selection: ModelSelection) -> Self {
        Self { controller: PageController::new(), file: None, selection }
    }

    /// Drop the loaded file and results; the selection returns to `selection`.
    pub fn leave(&mut self, selection: ModelSelection) {
        self.controller.reset();
        self.file = None;
        self.selection = selection;
    }

    pub fn file(&self) -> Option<&UploadedFile> {
        self.file.as_ref()
    }

    pub fn selection(&self) -> &ModelSelection {
        &self.selection
    }

    pub fn set_selection(&mut self, selection: ModelSelection) {
        self.selection = selection;
    }

    pub fn toggle_model(&mut self, id: ModelId) {
        self.selection.toggle(id);
        tracing::debug!(selection = %self.selection.join(","), "Model selection changed");
    }

    /// Take `content` as the uploaded file; replaces any previous one.
    pub fn load_text(&mut self, ctx: &AppContext, name: impl Into<String>, content: impl Into<String>) {
        let name = name.into();
        ctx.toasts.success(format!("File \"{name}\" uploaded successfully"));
        self.file = Some(UploadedFile { name, content: content.into() });
    }

    pub fn load_file(&mut self, ctx: &AppContext, path: &Path) -> anyhow::Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        tracing::info!(file = %path.display(), bytes = content.len(), "Batch file loaded");
        self.load_text(ctx, name, content);
        Ok(())
    }

    /// Validate the upload and selection, then score every compound.
    pub async fn process(&mut self, ctx: &AppContext) -> Outcome {
        let Some(file) = &self.file else {
            ctx.toasts.error(NO_FILE);
            return Outcome::Rejected;
        };
        if self.selection.is_empty() {
            ctx.toasts.error(NO_MODELS);
            return Outcome::Rejected;
        }
        let compounds = match parse_compounds(&file.content) {
            Ok(c) => c,
            Err(e) => {
                ctx.toasts.error(e.to_string());
                return Outcome::Rejected;
            }
        };

        tracing::info!(compounds = compounds.len(), models = %self.selection.join(","), "Batch requested");
        let selection = self.selection.clone();
        let request = async {
            ctx.service
                .predict_batch(&compounds, &selection)
                .await
                .map(|resp| BatchResults { results: resp.results, selection: selection.clone() })
        };
        drive(
            &mut self.controller,
            &ctx.toasts,
            request,
            |done| format!("Predictions Complete! Processed {} compounds", done.results.len()),
            BATCH_FAILED,
        )
        .await
    }

    pub fn preview(&self) -> Option<PreviewTable> {
        self.controller
            .result()
            .map(|done| build_preview(&done.results, &done.selection))
    }

    /// Write the results as CSV into `dir`. `Ok(None)` when there is
    /// nothing to export.
    pub fn export(&self, ctx: &AppContext, dir: &Path, date: NaiveDate) -> anyhow::Result<Option<PathBuf>> {
        let Some(done) = self.controller.result() else {
            tracing::debug!("Export skipped: no results");
            return Ok(None);
        };
        let Some(csv) = to_csv(&export_records(&done.results)).context("Failed to serialize results")? else {
            tracing::debug!("Export skipped: empty result set");
            return Ok(None);
        };

        let filename = export_filename(&done.selection, date);
        let path = dir.join(&filename);
        let written = std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create {}", dir.display()))
            .and_then(|()| std::fs::write(&path, csv).with_context(|| format!("Failed to write {}", path.display())));
        if let Err(e) = written {
            ctx.toasts.error(format!("Could not write {filename}"));
            return Err(e);
        }
        tracing::info!("Exported {} rows to {}", done.results.len(), path.display());
        ctx.toasts.success(format!("Downloaded {filename}"));
        Ok(Some(path))
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}\n", render::title(TITLE, SUBTITLE), render::concept(CONCEPT));

        let file_line = match &self.file {
            Some(f) => style(&f.name).cyan().to_string(),
            None => style("none (use `load <file.csv>`)").dim().to_string(),
        };
        out.push_str(&format!("{} {}\n", style("File:").bold(), file_line));
        out.push_str(&format!("{}\n", style("Prediction models:").bold()));
        out.push_str(&model_checklist(&self.selection));

        if let Some(table) = self.preview() {
            out.push('\n');
            if table.is_empty() {
                out.push_str(&format!("{}\n", style("No results returned").dim()));
            } else {
                out.push_str(&render_table(&table));
            }
        } else if let Some(line) = status_line(&self.controller) {
            out.push_str(&format!("\n{line}\n"));
        }
        out
    }
}

fn model_checklist(selection: &ModelSelection) -> String {
    ModelId::ALL
        .iter()
        .map(|id| {
            let mark = if selection.contains(*id) { style("[x]").green().to_string() } else { "[ ]".to_string() };
            format!("  {mark} {:<15} {}\n", id.label(), style(id.description()).dim())
        })
        .collect()
}
