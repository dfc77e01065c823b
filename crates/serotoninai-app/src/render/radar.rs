//! Rule-compliance panels. A radar chart does not survive the trip to a
//! terminal, so each axis becomes a horizontal bar scaled 0-100.

use console::style;
use serotoninai_molecules::druglikeness::{Badge, ComplianceLevel, RuleAssessment};

use super::card::Tone;

const BAR_WIDTH: usize = 20;

fn bar(score: f64) -> String {
    let filled = ((score / 100.0) * BAR_WIDTH as f64).round() as usize;
    let filled = filled.min(BAR_WIDTH);
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

fn badge_tone(badge: &Badge) -> Tone {
    match badge {
        Badge::Compliant => Tone::Success,
        Badge::Minor(_) => Tone::Warning,
        Badge::Major(_) => Tone::Error,
    }
}

fn level_tone(level: ComplianceLevel) -> Tone {
    match level {
        ComplianceLevel::Good => Tone::Success,
        ComplianceLevel::Fair => Tone::Warning,
        ComplianceLevel::Poor => Tone::Error,
    }
}

pub fn render_assessment(assessment: &RuleAssessment) -> String {
    let badge = assessment.badge();
    let mut out = format!(
        "{}  {}\n{}\n",
        style(assessment.rule.name).bold(),
        badge_tone(&badge).paint(&format!("[{}]", badge.label())),
        style(assessment.rule.description).dim()
    );

    for dim in &assessment.dimensions {
        let tone = Tone::from_flag(!dim.violated);
        out.push_str(&format!(
            "  {:<10} {} {:>5.1}%  {}\n",
            dim.parameter,
            bar(dim.score),
            dim.score,
            tone.paint(&format!("{:.1}", dim.actual)),
        ));
    }

    out.push_str(&format!(
        "  Overall compliance: {}  ({} of 5 criteria exceeded)\n",
        level_tone(assessment.level()).paint(&format!("{:.1}%", assessment.compliance)),
        assessment.violations
    ));
    out
}
