//! Blood-Brain Barrier page.

use serotoninai_common::entities::BbbPrediction;

use super::state::PageController;
use super::{compound_name, drive, molecule_panels, save_structure, status_line, Outcome, EMPTY_COMPOUND, PREDICTION_FAILED};
use crate::context::AppContext;
use crate::render::{self, ResultCard, Tone};

pub const TITLE: &str = "BBB Prediction";
pub const SUBTITLE: &str = "Blood-Brain Barrier penetration assessment";
pub const CONCEPT: &str = "The BBB protects the brain from harmful substances. For CNS (brain) drugs, the \
molecule must cross this barrier safely. Crosses BBB: suitable for neurological drugs. Does not cross: for \
peripheral (non-brain) action only.";

const PENETRATES: &str = "BBB+";

#[derive(Debug, Default)]
pub struct BbbPage {
    pub controller: PageController<BbbPrediction>,
}

impl BbbPage {
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
        tracing::info!(compound = name, "BBB prediction requested");
        let outcome = drive(
            &mut self.controller,
            &ctx.toasts,
            ctx.service.predict_bbb(name),
            |_| "BBB prediction complete!".to_string(),
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

pub fn cards(pred: &BbbPrediction) -> Vec<ResultCard> {
    let probability = format!("{:.1}%", pred.bbb_probability * 100.0);
    vec![
        ResultCard::new(
            Tone::from_flag(pred.bbb_classification == PENETRATES),
            "BBB Classification",
            "Blood-Brain Barrier penetration prediction",
        )
        .with_value(&pred.bbb_classification),
        ResultCard::new(Tone::Success, "BBB Probability", format!("Probability: {probability}"))
            .with_value(probability),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serotoninai_common::entities::MolecularProperties;

    fn prediction(class: &str, probability: f64) -> BbbPrediction {
        BbbPrediction {
            success: true,
            compound_name: "LSD".into(),
            smiles: "CCN(CC)C(=O)C1CN(C)C2Cc3c[nH]c4cccc(C2=C1)c34".into(),
            bbb_classification: class.into(),
            bbb_probability: probability,
            properties: MolecularProperties { molecular_weight: 323.4, log_p: 2.9, hbd: 1.0, hba: 2.0, tpsa: 39.3 },
        }
    }

    #[test]
    fn test_penetrating_compound() {
        let cards = cards(&prediction("BBB+", 0.8742));
        assert_eq!(cards[0].tone, Tone::Success);
        assert_eq!(cards[1].value.as_deref(), Some("87.4%"));
        assert_eq!(cards[1].description, "Probability: 87.4%");
    }

    #[test]
    fn test_non_penetrating_compound() {
        let cards = cards(&prediction("BBB-", 0.12));
        assert_eq!(cards[0].tone, Tone::Error);
        assert_eq!(cards[0].value.as_deref(), Some("BBB-"));
        assert_eq!(cards[1].value.as_deref(), Some("12.0%"));
    }
}
