mod rules;

use serde::{Deserialize, Serialize};

use super::domain::{ClinicalRecord, RiskLevel};

/// The additive total is capped here, never rescaled. Persisted history
/// depends on this constant and the tier floors below staying put.
const SCORE_CEILING: u16 = 100;

const MODERATE_FLOOR: u8 = 30;
const HIGH_FLOOR: u8 = 60;

/// Names the scoring clause a contribution came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskClause {
    Age,
    Sex,
    ChestPain,
    RestingBloodPressure,
    Cholesterol,
    FastingBloodSugar,
    RestingEcg,
    MaxHeartRate,
    ExerciseAngina,
    Oldpeak,
    StSlope,
}

/// Discrete contribution to an assessment, allowing transparent audits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub clause: RiskClause,
    pub points: u8,
    pub label: Option<String>,
}

/// Scoring output: the clamped score, its tier, the factor labels in clause
/// order, and the per-clause contribution trail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskAssessment {
    pub score: u8,
    pub level: RiskLevel,
    pub factors: Vec<String>,
    pub components: Vec<ScoreComponent>,
}

/// Score a clinical record against the fixed rule table.
///
/// Total over its input: every clause either contributes points (with or
/// without a factor label) or contributes nothing. Factor labels surface in
/// the order their clauses appear in the table.
pub fn evaluate(record: &ClinicalRecord) -> RiskAssessment {
    let mut components = Vec::new();
    let mut factors = Vec::new();
    let mut raw_total: u16 = 0;

    for (clause, rule) in rules::SCORING_TABLE {
        let Some(contribution) = rule(record) else {
            continue;
        };

        raw_total += u16::from(contribution.points);
        if let Some(label) = contribution.label {
            factors.push(label.to_string());
        }
        components.push(ScoreComponent {
            clause,
            points: contribution.points,
            label: contribution.label.map(str::to_string),
        });
    }

    let score = raw_total.min(SCORE_CEILING) as u8;

    RiskAssessment {
        score,
        level: level_for(score),
        factors,
        components,
    }
}

fn level_for(score: u8) -> RiskLevel {
    if score < MODERATE_FLOOR {
        RiskLevel::Low
    } else if score < HIGH_FLOOR {
        RiskLevel::Moderate
    } else {
        RiskLevel::High
    }
}

#[cfg(test)]
mod level_tests {
    use super::{level_for, RiskLevel};

    #[test]
    fn tier_floors_are_exact() {
        assert_eq!(level_for(0), RiskLevel::Low);
        assert_eq!(level_for(29), RiskLevel::Low);
        assert_eq!(level_for(30), RiskLevel::Moderate);
        assert_eq!(level_for(59), RiskLevel::Moderate);
        assert_eq!(level_for(60), RiskLevel::High);
        assert_eq!(level_for(100), RiskLevel::High);
    }
}
