use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::evaluation::RiskAssessment;

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AssessmentId(pub String);

/// Biological sex as coded in the screening dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    M,
    F,
}

/// Chest pain presentation categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ChestPainType {
    /// Asymptomatic.
    Asy,
    /// Atypical angina.
    Ata,
    /// Non-anginal pain.
    Nap,
    /// Typical angina.
    Ta,
}

/// Fasting blood sugar flag, `"1"` when above 120 mg/dL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FastingBloodSugar {
    #[serde(rename = "1")]
    Elevated,
    #[serde(rename = "0")]
    Normal,
}

/// Resting electrocardiogram result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RestingEcg {
    Normal,
    /// ST-T wave abnormality.
    #[serde(rename = "ST")]
    St,
    /// Left ventricular hypertrophy.
    #[serde(rename = "LVH")]
    Lvh,
}

/// Whether angina was induced during exercise testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExerciseAngina {
    #[serde(rename = "Y")]
    Yes,
    #[serde(rename = "N")]
    No,
}

/// Slope of the peak-exercise ST segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StSlope {
    Up,
    Flat,
    Down,
}

/// One validated clinical measurement set, the unit of assessment.
///
/// Field codes follow the upstream screening dataset, so records serialize
/// with the same categorical values the intake forms collect. Range checks on
/// numeric fields are an intake responsibility; the scorer is total over
/// whatever arrives here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub age: u8,
    pub sex: Sex,
    pub chest_pain_type: ChestPainType,
    /// Resting blood pressure, mmHg.
    pub resting_bp: u16,
    /// Serum cholesterol, mg/dL.
    pub cholesterol: u16,
    pub fasting_bs: FastingBloodSugar,
    pub resting_ecg: RestingEcg,
    /// Maximum heart rate achieved during exercise testing.
    pub max_hr: u16,
    pub exercise_angina: ExerciseAngina,
    /// ST depression induced by exercise relative to rest. May be negative.
    pub oldpeak: f32,
    pub st_slope: StSlope,
}

/// Three-tier classification of the clamped risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Moderate,
    High,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Moderate => "Moderate",
            RiskLevel::High => "High",
        }
    }
}

/// Stored unit pairing the submitted record with everything derived from it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub assessment_id: AssessmentId,
    pub clinical: ClinicalRecord,
    pub risk: RiskAssessment,
    pub recommendations: String,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn view(&self) -> AssessmentView {
        AssessmentView {
            assessment_id: self.assessment_id.clone(),
            risk_score: self.risk.score,
            risk_level: self.risk.level.label(),
            factors: self.risk.factors.clone(),
            recommendations: self.recommendations.clone(),
            created_at: self.created_at,
        }
    }
}

/// Representation of a stored assessment as exposed over the API.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView {
    pub assessment_id: AssessmentId,
    pub risk_score: u8,
    pub risk_level: &'static str,
    pub factors: Vec<String>,
    pub recommendations: String,
    pub created_at: DateTime<Utc>,
}
