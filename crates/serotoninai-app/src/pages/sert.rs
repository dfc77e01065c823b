//! SERT prediction page.

use serotoninai_common::entities::{SertPrediction, WITHIN_DOMAIN};

use super::state::PageController;
use super::{compound_name, drive, molecule_panels, save_structure, status_line, Outcome, EMPTY_COMPOUND, PREDICTION_FAILED};
use crate::context::AppContext;
use crate::render::{self, ResultCard, Tone};

pub const TITLE: &str = "SERT Prediction";
pub const SUBTITLE: &str = "Predict serotonin transporter (SERT) binding interaction";
pub const CONCEPT: &str = "SERT regulates serotonin reuptake in the brain. Drugs like SSRIs (Fluoxetine, \
Sertraline) block this transporter to increase serotonin levels, improving mood and reducing anxiety. \
High pKi indicates strong reuptake inhibition and potential antidepressant activity.";

#[derive(Debug, Default)]
pub struct SertPage {
    pub controller: PageController<SertPrediction>,
}

impl SertPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leaving the page drops its result and strands any request in flight.
    pub fn leave(&mut self) {
        self.controller.reset();
    }

    pub async fn submit(&mut self, ctx: &AppContext, raw: &str) -> Outcome {
        let Some(name) = compound_name(raw) else {
            ctx.toasts.error(EMPTY_COMPOUND);
            return Outcome::Rejected;
        };
        tracing::info!(compound = name, "SERT prediction requested");
        let outcome = drive(
            &mut self.controller,
            &ctx.toasts,
            ctx.service.predict_sert(name),
            |_| "SERT prediction complete!".to_string(),
            PREDICTION_FAILED,
        )
        .await;
        if let (Outcome::Shown, Some(pred)) = (outcome, self.controller.result()) {
            save_structure(ctx, &pred.compound_name, &pred.smiles);
        }
        outcome
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}", render::title(TITLE, SUBTITLE), render::concept(CONCEPT));
        if let Some(pred) = self.controller.result() {
            out.push('\n');
            for card in cards(pred) {
                out.push_str(&card.render());
            }
            out.push('\n');
            out.push_str(&molecule_panels(&pred.compound_name, &pred.smiles));
        } else if let Some(line) = status_line(&self.controller) {
            out.push_str(&format!("\n{line}\n"));
        }
        out
    }
}

/// Binding-affinity and applicability-domain cards.
pub fn cards(pred: &SertPrediction) -> Vec<ResultCard> {
    vec![
        ResultCard::new(
            Tone::from_flag(pred.is_active),
            "SERT Binding Affinity",
            "Predicted pKi value for serotonin transporter binding",
        )
        .with_value(pred.p_ki),
        applicability_card(&pred.applicability_domain),
    ]
}

pub(crate) fn applicability_card(domain: &str) -> ResultCard {
    ResultCard::new(
        Tone::from_flag(domain == WITHIN_DOMAIN),
        "Applicability Domain",
        format!("Prediction {} domain", domain.to_lowercase()),
    )
    .with_value(domain)
}
