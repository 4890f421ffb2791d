//! Cardiovascular assessment intake, scoring, and recommendation pipeline.
//!
//! A caller submits a [`ClinicalRecord`]; the evaluation module derives a
//! clamped risk score, a tier, and the list of triggered risk factors; the
//! recommendation module renders the advice document; the service persists
//! the whole assessment through the repository seam.

pub mod domain;
pub mod evaluation;
pub mod recommendation;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentId, AssessmentRecord, AssessmentView, ChestPainType, ClinicalRecord,
    ExerciseAngina, FastingBloodSugar, RestingEcg, RiskLevel, Sex, StSlope,
};
pub use evaluation::{evaluate, RiskAssessment, RiskClause, ScoreComponent};
pub use recommendation::compose;
pub use repository::{AssessmentRepository, RepositoryError};
pub use router::assessment_router;
pub use service::{AssessmentService, AssessmentServiceError};
