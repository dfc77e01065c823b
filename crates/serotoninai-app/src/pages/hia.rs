//! Human Intestinal Absorption page.

use serotoninai_common::entities::HiaPrediction;

use super::state::PageController;
use super::{compound_name, drive, molecule_panels, save_structure, status_line, Outcome, EMPTY_COMPOUND, PREDICTION_FAILED};
use crate::context::AppContext;
use crate::render::{self, ResultCard, Tone};

pub const TITLE: &str = "HIA Prediction";
pub const SUBTITLE: &str = "Human Intestinal Absorption assessment";
pub const CONCEPT: &str = "HIA predicts how well a molecule is absorbed when taken orally. High absorption \
means it can be effective as a tablet or capsule drug. High HIA: suitable for oral use. Low HIA: may need \
injections or reformulation.";

const HIGH: &str = "High";

#[derive(Debug, Default)]
pub struct HiaPage {
    pub controller: PageController<HiaPrediction>,
}

impl HiaPage {
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
        tracing::info!(compound = name, "HIA prediction requested");
        let outcome = drive(
            &mut self.controller,
            &ctx.toasts,
            ctx.service.predict_hia(name),
            |_| "HIA prediction complete!".to_string(),
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

pub fn cards(pred: &HiaPrediction) -> Vec<ResultCard> {
    vec![
        ResultCard::new(
            Tone::from_flag(pred.hia_classification == HIGH),
            "HIA Classification",
            "Human Intestinal Absorption prediction",
        )
        .with_value(&pred.hia_classification),
        ResultCard::new(Tone::Success, "HIA Value", format!("Absorption value: {}%", pred.hia_value))
            .with_value(format!("{}%", pred.hia_value)),
    ]
}
