use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::assessment::domain::{
    AssessmentId, AssessmentRecord, ChestPainType, ClinicalRecord, ExerciseAngina,
    FastingBloodSugar, RestingEcg, Sex, StSlope,
};
use crate::assessment::repository::{AssessmentRepository, RepositoryError};
use crate::assessment::service::AssessmentService;

/// Lowest-risk branch on every clause: raw score 0, no factors.
pub(super) fn quiescent_record() -> ClinicalRecord {
    ClinicalRecord {
        age: 30,
        sex: Sex::F,
        chest_pain_type: ChestPainType::Ta,
        resting_bp: 110,
        cholesterol: 150,
        fasting_bs: FastingBloodSugar::Normal,
        resting_ecg: RestingEcg::Normal,
        max_hr: 170,
        exercise_angina: ExerciseAngina::No,
        oldpeak: 0.0,
        st_slope: StSlope::Up,
    }
}

/// Every clause fires its highest branch: raw sum 160, clamped to 100.
pub(super) fn saturated_record() -> ClinicalRecord {
    ClinicalRecord {
        age: 65,
        sex: Sex::M,
        chest_pain_type: ChestPainType::Asy,
        resting_bp: 150,
        cholesterol: 250,
        fasting_bs: FastingBloodSugar::Elevated,
        resting_ecg: RestingEcg::Lvh,
        max_hr: 100,
        exercise_angina: ExerciseAngina::Yes,
        oldpeak: 2.5,
        st_slope: StSlope::Flat,
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }

    fn history(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.assessment_id.0.cmp(&a.assessment_id.0))
        });
        Ok(records)
    }

    fn delete(&self, id: &AssessmentId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

pub(super) fn build_service() -> (
    Arc<AssessmentService<MemoryRepository>>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = Arc::new(AssessmentService::new(repository.clone()));
    (service, repository)
}
