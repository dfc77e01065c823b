//! Page controllers, one per screen.
//!
//! Prediction pages wire compound input through the [`AppContext`] service
//! into a [`PageController`] and render the outcome. Static pages (home,
//! help, not-found) only render.

pub mod batch;
pub mod bbb;
pub mod help;
pub mod hia;
pub mod home;
pub mod receptors;
pub mod sert;
pub mod state;

#[cfg(test)]
mod flow_tests;

use std::future::Future;

use serotoninai_molecules::structure::StructureSketch;

use crate::context::AppContext;
use crate::notify::Toaster;
use crate::render;
use state::{PageController, Resolution};

pub use batch::BatchPage;
pub use bbb::BbbPage;
pub use hia::HiaPage;
pub use receptors::ReceptorsPage;
pub use sert::SertPage;

pub const PREDICTION_FAILED: &str = "Prediction failed";
pub const EMPTY_COMPOUND: &str = "Please enter a compound name";

/// What became of one submit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Shown,
    Failed,
    /// Validation failed; nothing was sent.
    Rejected,
    /// A request for this page is already in flight.
    Busy,
    /// Superseded by a later request or by leaving the page.
    Stale,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Shown)
    }
}

/// Trimmed compound name, or `None` when blank.
pub fn compound_name(raw: &str) -> Option<&str> {
    let name = raw.trim();
    (!name.is_empty()).then_some(name)
}

/// Message shown for a failed request, with `fallback` for errors that
/// carry no text.
pub fn error_message(err: &impl ToString, fallback: &str) -> String {
    let message = err.to_string();
    if message.trim().is_empty() { fallback.to_string() } else { message }
}

/// Run one request through `controller`: take a ticket, await the
/// backend, apply the answer if still current and toast the result.
/// `success` builds the success toast from the fresh value.
///
/// `controller` stays mutably borrowed across the await, so no `begin` or
/// `reset` can interleave while the request is out. Exclusivity here comes
/// from the borrow; the sequence check in [`PageController::resolve`]
/// covers callers that hold tickets across separate calls.
pub(crate) async fn drive<T, E, Fut>(
    controller: &mut PageController<T>,
    toasts: &Toaster,
    request: Fut,
    success: impl FnOnce(&T) -> String,
    fallback: &str,
) -> Outcome
where
    E: ToString,
    Fut: Future<Output = Result<T, E>>,
{
    let Ok(ticket) = controller.begin() else {
        tracing::debug!("Submit ignored: request already in flight");
        return Outcome::Busy;
    };

    let outcome = request.await;
    let notice = match &outcome {
        Ok(value) => Ok(success(value)),
        Err(e) => Err(error_message(e, fallback)),
    };

    match controller.resolve(ticket, outcome) {
        Resolution::Stale => Outcome::Stale,
        Resolution::Applied => match notice {
            Ok(message) => {
                toasts.success(message);
                Outcome::Shown
            }
            Err(message) => {
                tracing::warn!("Request failed: {}", message);
                toasts.error(message);
                Outcome::Failed
            }
        },
    }
}

/// SMILES panel plus structure placeholder, shared by every prediction page.
pub(crate) fn molecule_panels(compound_name: &str, smiles: &str) -> String {
    let sketch = StructureSketch::from_smiles(smiles);
    format!(
        "{}\n{}",
        render::smiles::render_smiles(compound_name, smiles),
        render::structure::render_structure(compound_name, &sketch)
    )
}

/// Write the structure sketch for a fresh result when an SVG directory is
/// configured. Failure is logged, never fatal.
pub(crate) fn save_structure(ctx: &AppContext, compound_name: &str, smiles: &str) {
    let Some(dir) = ctx.svg_dir() else { return };
    let sketch = StructureSketch::from_smiles(smiles);
    if let Err(e) = render::structure::write_svg(&dir, compound_name, &sketch) {
        tracing::warn!("Could not write structure SVG: {:#}", e);
    }
}

/// Loading line, error line or nothing, for a page without a result.
pub(crate) fn status_line<T>(controller: &PageController<T>) -> Option<String> {
    if controller.is_loading() {
        return Some(console::style("Predicting…").dim().to_string());
    }
    controller
        .last_error()
        .map(|e| console::style(format!("Last request failed: {e}")).red().to_string())
}

pub fn not_found(path: &str) -> String {
    format!(
        "{}\n{}\n",
        render::title("404", &format!("Oops! Page not found: {path}")),
        console::style("Type `go /` to return home.").dim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compound_name_trims() {
        assert_eq!(compound_name("  Serotonin \n"), Some("Serotonin"));
        assert_eq!(compound_name("   "), None);
        assert_eq!(compound_name(""), None);
    }

    #[test]
    fn test_error_message_fallback() {
        assert_eq!(error_message(&"", PREDICTION_FAILED), "Prediction failed");
        assert_eq!(error_message(&"Compound not found", PREDICTION_FAILED), "Compound not found");
    }

    #[tokio::test]
    async fn test_drive_toasts_success() {
        let toasts = Toaster::new();
        let mut rx = toasts.subscribe();
        let mut controller: PageController<f64> = PageController::new();

        let outcome = drive(&mut controller, &toasts, async { Ok::<_, String>(8.2) }, |v| format!("done {v}"), PREDICTION_FAILED).await;
        assert_eq!(outcome, Outcome::Shown);
        assert_eq!(controller.result(), Some(&8.2));
        assert_eq!(rx.try_recv().unwrap().message, "done 8.2");
    }

    #[tokio::test]
    async fn test_drive_toasts_failure() {
        let toasts = Toaster::new();
        let mut rx = toasts.subscribe();
        let mut controller: PageController<f64> = PageController::new();

        let outcome = drive(
            &mut controller,
            &toasts,
            async { Err::<f64, _>("Compound not found".to_string()) },
            |_| "done".to_string(),
            PREDICTION_FAILED,
        )
        .await;
        assert_eq!(outcome, Outcome::Failed);
        assert_eq!(controller.result(), None);
        let toast = rx.try_recv().unwrap();
        assert_eq!(toast.level, crate::notify::ToastLevel::Error);
        assert_eq!(toast.message, "Compound not found");
    }

    #[test]
    fn test_not_found_mentions_path() {
        let text = console::strip_ansi_codes(&not_found("/kinases")).to_string();
        assert!(text.contains("404"));
        assert!(text.contains("/kinases"));
    }
}
