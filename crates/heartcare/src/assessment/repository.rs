use super::domain::{AssessmentId, AssessmentRecord};

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Factor lists cross this seam as structured `Vec<String>` inside the
/// record; implementations must preserve them losslessly rather than
/// flattening to display text.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// All stored assessments, newest first.
    fn history(&self) -> Result<Vec<AssessmentRecord>, RepositoryError>;
    fn delete(&self, id: &AssessmentId) -> Result<(), RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
