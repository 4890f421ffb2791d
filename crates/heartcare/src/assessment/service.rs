use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::info;

use super::domain::{AssessmentId, AssessmentRecord, ClinicalRecord};
use super::evaluation::evaluate;
use super::recommendation::compose;
use super::repository::{AssessmentRepository, RepositoryError};

/// Service composing the scoring engine, the recommendation composer, and
/// the repository seam.
pub struct AssessmentService<R> {
    repository: Arc<R>,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asmt-{id:06}"))
}

impl<R> AssessmentService<R>
where
    R: AssessmentRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Score a clinical record, render its recommendations, and persist the
    /// resulting assessment.
    pub fn assess(
        &self,
        clinical: ClinicalRecord,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let risk = evaluate(&clinical);
        let recommendations = compose(risk.level, &risk.factors);

        let record = AssessmentRecord {
            assessment_id: next_assessment_id(),
            clinical,
            risk,
            recommendations,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.assessment_id.0,
            score = stored.risk.score,
            level = stored.risk.level.label(),
            "assessment stored"
        );
        Ok(stored)
    }

    /// Fetch a stored assessment for API responses.
    pub fn get(&self, id: &AssessmentId) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// Stored assessments, newest first.
    pub fn history(&self) -> Result<Vec<AssessmentRecord>, AssessmentServiceError> {
        Ok(self.repository.history()?)
    }

    pub fn delete(&self, id: &AssessmentId) -> Result<(), AssessmentServiceError> {
        Ok(self.repository.delete(id)?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
