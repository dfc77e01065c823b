//! Drug-likeness rule panels.
//!
//! | Rule | MW | logP | HBD | HBA | TPSA |
//! |------|----|------|-----|-----|------|
//! | Lipinski Rule of Five | ≤ 500 | ≤ 5 | ≤ 5 | ≤ 10 | ≤ 140 |
//! | Rule of Three (fragments) | ≤ 300 | ≤ 3 | ≤ 3 | ≤ 3 | ≤ 60 |
//!
//! Each dimension gets a 0-100 score (ratio to its limit, capped) and a
//! violation flag (`actual > limit`). Compliance is the share of the five
//! dimensions within their limit.

use serde::Serialize;
use serotoninai_common::entities::MolecularProperties;

/// Number of dimensions every rule panel scores.
pub const DIMENSIONS: usize = 5;

// ── Rule definitions ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleDimension {
    /// Axis label, e.g. "MW ≤500"
    pub parameter: &'static str,
    pub limit: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RuleSet {
    pub name: &'static str,
    pub description: &'static str,
    /// MW, logP, HBD, HBA, TPSA, in that order.
    pub dimensions: [RuleDimension; DIMENSIONS],
    /// Violations still shown as a minor badge.
    pub minor_violations: usize,
}

pub const RULE_OF_FIVE: RuleSet = RuleSet {
    name: "Lipinski's Rule of Five",
    description: "Drug-likeness assessment based on molecular properties",
    dimensions: [
        RuleDimension { parameter: "MW ≤500", limit: 500.0 },
        RuleDimension { parameter: "logP ≤5", limit: 5.0 },
        RuleDimension { parameter: "HBD ≤5", limit: 5.0 },
        RuleDimension { parameter: "HBA ≤10", limit: 10.0 },
        RuleDimension { parameter: "TPSA ≤140", limit: 140.0 },
    ],
    minor_violations: 1,
};

pub const RULE_OF_THREE: RuleSet = RuleSet {
    name: "Rule of Three Compliance",
    description: "Fragment-based drug discovery guidelines for lead optimization",
    dimensions: [
        RuleDimension { parameter: "MW ≤300", limit: 300.0 },
        RuleDimension { parameter: "logP ≤3", limit: 3.0 },
        RuleDimension { parameter: "HBD ≤3", limit: 3.0 },
        RuleDimension { parameter: "HBA ≤3", limit: 3.0 },
        RuleDimension { parameter: "TPSA ≤60", limit: 60.0 },
    ],
    minor_violations: 2,
};

// ── Assessment ────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DimensionScore {
    pub parameter: &'static str,
    pub actual: f64,
    pub limit: f64,
    /// Normalized 0-100 score for the radar axis.
    pub score: f64,
    pub violated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComplianceLevel {
    Good,
    Fair,
    Poor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Badge {
    Compliant,
    Minor(usize),
    Major(usize),
}

impl Badge {
    pub fn label(&self) -> String {
        match self {
            Badge::Compliant => "Compliant".to_string(),
            Badge::Minor(n) | Badge::Major(n) => format!("{n} Violations"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RuleAssessment {
    pub rule: RuleSet,
    pub dimensions: Vec<DimensionScore>,
    pub violations: usize,
    pub compliance: f64,
}

impl RuleAssessment {
    pub fn badge(&self) -> Badge {
        match self.violations {
            0 => Badge::Compliant,
            n if n <= self.rule.minor_violations => Badge::Minor(n),
            n => Badge::Major(n),
        }
    }

    pub fn level(&self) -> ComplianceLevel {
        compliance_level(self.compliance)
    }
}

/// `(5 - violations) / 5 * 100`; violations beyond five count as five.
pub fn compliance_percentage(violations: usize) -> f64 {
    let within = DIMENSIONS - violations.min(DIMENSIONS);
    within as f64 / DIMENSIONS as f64 * 100.0
}

pub fn compliance_level(compliance: f64) -> ComplianceLevel {
    if compliance >= 80.0 {
        ComplianceLevel::Good
    } else if compliance >= 60.0 {
        ComplianceLevel::Fair
    } else {
        ComplianceLevel::Poor
    }
}

/// Ratio to `limit` as a percentage, clamped to 0-100.
pub fn normalized_score(actual: f64, limit: f64) -> f64 {
    if limit <= 0.0 || !actual.is_finite() {
        return 0.0;
    }
    (actual / limit * 100.0).clamp(0.0, 100.0)
}

/// Score a molecule against one rule panel.
pub fn assess(rule: &RuleSet, props: &MolecularProperties) -> RuleAssessment {
    let actuals = [props.molecular_weight, props.log_p, props.hbd, props.hba, props.tpsa];

    let dimensions: Vec<DimensionScore> = rule
        .dimensions
        .iter()
        .zip(actuals)
        .map(|(dim, actual)| DimensionScore {
            parameter: dim.parameter,
            actual,
            limit: dim.limit,
            score: normalized_score(actual, dim.limit),
            violated: actual > dim.limit,
        })
        .collect();

    let violations = dimensions.iter().filter(|d| d.violated).count();

    RuleAssessment {
        rule: *rule,
        dimensions,
        violations,
        compliance: compliance_percentage(violations),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn props(mw: f64, logp: f64, hbd: f64, hba: f64, tpsa: f64) -> MolecularProperties {
        MolecularProperties { molecular_weight: mw, log_p: logp, hbd, hba, tpsa }
    }

    #[test]
    fn test_compliance_steps() {
        let steps: Vec<f64> = (0..=5).map(compliance_percentage).collect();
        assert_eq!(steps, vec![100.0, 80.0, 60.0, 40.0, 20.0, 0.0]);
        assert_eq!(compliance_percentage(9), 0.0);
    }

    #[test]
    fn test_compliance_non_increasing() {
        for v in 0..8 {
            assert!(compliance_percentage(v + 1) <= compliance_percentage(v));
        }
    }

    #[test]
    fn test_fluoxetine_against_both_rules() {
        // Fluoxetine: MW 309.3, logP 4.1, HBD 1, HBA 2 (backend counts N/O), TPSA 21.3
        let p = props(309.3, 4.1, 1.0, 2.0, 21.3);

        let ro5 = assess(&RULE_OF_FIVE, &p);
        assert_eq!(ro5.violations, 0);
        assert_eq!(ro5.badge(), Badge::Compliant);
        assert_eq!(ro5.level(), ComplianceLevel::Good);

        let ro3 = assess(&RULE_OF_THREE, &p);
        assert_eq!(ro3.violations, 2);
        assert_eq!(ro3.compliance, 60.0);
        assert_eq!(ro3.badge(), Badge::Minor(2));
        assert_eq!(ro3.level(), ComplianceLevel::Fair);
    }

    #[test]
    fn test_scores_capped_at_100() {
        let ro5 = assess(&RULE_OF_FIVE, &props(1200.0, 8.0, 7.0, 15.0, 250.0));
        assert!(ro5.dimensions.iter().all(|d| d.score == 100.0 && d.violated));
        assert_eq!(ro5.violations, 5);
        assert_eq!(ro5.badge(), Badge::Major(5));
        assert_eq!(ro5.badge().label(), "5 Violations");
        assert_eq!(ro5.level(), ComplianceLevel::Poor);
    }

    #[test]
    fn test_at_limit_is_not_a_violation() {
        let ro3 = assess(&RULE_OF_THREE, &props(300.0, 3.0, 3.0, 3.0, 60.0));
        assert_eq!(ro3.violations, 0);
        assert!(ro3.dimensions.iter().all(|d| d.score == 100.0));
    }

    #[test]
    fn test_negative_logp_clamps_to_zero() {
        assert_eq!(normalized_score(-1.5, 5.0), 0.0);
        assert_eq!(normalized_score(250.0, 500.0), 50.0);
    }
}
