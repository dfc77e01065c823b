//! Landing page: core concepts, prediction tools and the workflow.

use console::style;

use crate::router::Route;

pub const TAGLINE: &str = "Decode Molecular Affinity for Smarter Drug Discovery";
pub const INTRO: &str =
    "Understand how molecules interact with serotonin receptors, and explore their drug-like potential.";

pub const CONCEPTS: [(&str, &str); 3] = [
    (
        "What Are Receptors?",
        "Receptors are biological 'locks' that drugs or neurotransmitters bind to. Binding changes how cells \
         behave, controlling functions like mood, memory, and alertness.",
    ),
    (
        "Why Binding Matters",
        "Drugs must bind strongly to their receptors to work. The pKi value measures that strength: higher \
         values mean stronger, more stable drug-receptor interactions.",
    ),
    (
        "How SerotoninAI Helps",
        "This tool predicts molecular binding strength, drug-likeness, absorption, and brain permeability, all \
         essential to understanding a compound's potential as a drug.",
    ),
];

/// Feature list; each entry links to a route.
pub const FEATURES: [(Route, &str, &str); 5] = [
    (Route::Receptors, "5-HT Receptors", "Predict pKi binding affinity for all 11 major serotonin receptor subtypes"),
    (Route::Sert, "SERT", "Evaluate serotonin transporter interaction potential"),
    (Route::Hia, "HIA", "Predict Human Intestinal Absorption for oral drugs"),
    (Route::Bbb, "BBB", "Assess Blood-Brain Barrier permeability"),
    (Route::Batch, "Batch Mode", "Upload multiple compounds for bulk predictions"),
];

pub const WORKFLOW: [(&str, &str); 4] = [
    ("Input", "Enter compound name"),
    ("Validate", "Verify structure"),
    ("Predict", "Run ML models"),
    ("Visualize", "View results"),
];

pub fn render() -> String {
    let mut out = format!(
        "{}\n{}\n{}\n\n",
        style("SerotoninAI").magenta().bold(),
        style(TAGLINE).bold(),
        style(INTRO).dim()
    );

    out.push_str(&format!("{}\n", style("Core Concepts").bold().underlined()));
    for (heading, text) in CONCEPTS {
        out.push_str(&format!("  {}\n    {}\n", style(heading).cyan(), text));
    }

    out.push_str(&format!("\n{}\n", style("Prediction Tools").bold().underlined()));
    for (route, heading, text) in &FEATURES {
        out.push_str(&format!(
            "  {:<15} {} {}\n",
            heading,
            style(format!("{:<11}", route.path())).dim(),
            text
        ));
    }

    out.push_str(&format!("\n{}\n", style("How It Works").bold().underlined()));
    let steps: Vec<String> = WORKFLOW
        .iter()
        .enumerate()
        .map(|(i, (step, text))| format!("{}. {} ({})", i + 1, step, text))
        .collect();
    out.push_str(&format!("  {}\n", steps.join("  →  ")));

    out.push_str(&format!(
        "\n{}\n",
        style("Start with `go /receptors`, or `go /help` to learn more.").dim()
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_feature_links_to_a_known_route() {
        for (route, _, _) in &FEATURES {
            assert_eq!(&Route::resolve(route.path()), route);
        }
    }

    #[test]
    fn test_render_lists_tools() {
        let text = console::strip_ansi_codes(&render()).to_string();
        assert!(text.contains("Prediction Tools"));
        assert!(text.contains("/batch"));
        assert!(text.contains("1. Input (Enter compound name)"));
    }
}
