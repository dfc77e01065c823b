//! 5-HT receptor binding page. The only page with drug-likeness panels.

use serotoninai_common::entities::{find_receptor, ReceptorPrediction, Receptor, RECEPTORS};
use serotoninai_molecules::druglikeness::{assess, RULE_OF_FIVE, RULE_OF_THREE};

use super::sert::applicability_card;
use super::state::PageController;
use super::{compound_name, drive, molecule_panels, save_structure, status_line, Outcome, EMPTY_COMPOUND, PREDICTION_FAILED};
use crate::context::AppContext;
use crate::render::{self, radar, ResultCard, Tone};

pub const TITLE: &str = "5-HT Receptor Prediction";
pub const SUBTITLE: &str = "Predict ligand binding affinity (pKi) for serotonin receptor subtypes";
pub const CONCEPT: &str = "Serotonin receptors (5-HT1 to 5-HT7) control emotion and cognition. Measuring pKi \
helps identify molecules with strong potential for antidepressant or neuroactive effects. Higher pKi values \
indicate stronger binding affinity, essential for effective drug action.";

pub const NO_RECEPTOR: &str = "Please select a receptor first";

#[derive(Debug, Default)]
pub struct ReceptorsPage {
    pub controller: PageController<ReceptorPrediction>,
    selected: Option<&'static Receptor>,
}

impl ReceptorsPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn leave(&mut self) {
        self.controller.reset();
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&'static Receptor> {
        self.selected
    }

    /// Select a receptor by id. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, ctx: &AppContext, id: &str) -> bool {
        match find_receptor(id) {
            Some(receptor) => {
                tracing::debug!(receptor = receptor.id, "Receptor selected");
                self.selected = Some(receptor);
                true
            }
            None => {
                ctx.toasts.error(format!("Unknown receptor: {}", id.trim()));
                false
            }
        }
    }

    pub async fn submit(&mut self, ctx: &AppContext, raw: &str) -> Outcome {
        let Some(receptor) = self.selected else {
            ctx.toasts.error(NO_RECEPTOR);
            return Outcome::Rejected;
        };
        let Some(name) = compound_name(raw) else {
            ctx.toasts.error(EMPTY_COMPOUND);
            return Outcome::Rejected;
        };
        tracing::info!(compound = name, receptor = receptor.id, "Receptor prediction requested");
        let outcome = drive(
            &mut self.controller,
            &ctx.toasts,
            ctx.service.predict_receptor(name, receptor.id),
            |_| "Prediction complete!".to_string(),
            PREDICTION_FAILED,
        )
        .await;
        if let (Outcome::Shown, Some(pred)) = (outcome, self.controller.result()) {
            save_structure(ctx, &pred.compound_name, &pred.smiles);
        }
        outcome
    }

    pub fn render(&self) -> String {
        let mut out = format!("{}\n{}\n", render::title(TITLE, SUBTITLE), render::concept(CONCEPT));
        out.push_str(&receptor_line(self.selected));

        if let Some(pred) = self.controller.result() {
            out.push('\n');
            for card in cards(pred) {
                out.push_str(&card.render());
            }
            out.push('\n');
            out.push_str(&molecule_panels(&pred.compound_name, &pred.smiles));
            out.push('\n');
            out.push_str(&radar::render_assessment(&assess(&RULE_OF_FIVE, &pred.properties)));
            out.push('\n');
            out.push_str(&radar::render_assessment(&assess(&RULE_OF_THREE, &pred.properties)));
        } else if let Some(line) = status_line(&self.controller) {
            out.push_str(&format!("\n{line}\n"));
        }
        out
    }
}

fn receptor_line(selected: Option<&Receptor>) -> String {
    match selected {
        Some(r) => format!(
            "{} {}\n    {}\n",
            console::style("Receptor:").bold(),
            r.name,
            console::style(r.info).dim()
        ),
        None => format!(
            "{} {}\n",
            console::style("Receptor:").bold(),
            console::style(format!("none selected ({} available)", RECEPTORS.len())).dim()
        ),
    }
}

pub fn cards(pred: &ReceptorPrediction) -> Vec<ResultCard> {
    vec![
        ResultCard::new(
            Tone::from_flag(pred.is_active),
            format!("{} Binding Affinity", pred.receptor),
            format!("Predicted pKi value for {} receptor binding", pred.receptor),
        )
        .with_value(pred.p_ki),
        applicability_card(&pred.applicability_domain),
    ]
}
