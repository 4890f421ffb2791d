use metrics_exporter_prometheus::PrometheusHandle;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

use heartcare::assessment::domain::{AssessmentId, AssessmentRecord};
use heartcare::assessment::repository::{AssessmentRepository, RepositoryError};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemoryAssessmentRepository {
    records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for InMemoryAssessmentRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.assessment_id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.assessment_id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn history(&self) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.assessment_id.0.cmp(&a.assessment_id.0))
        });
        Ok(records)
    }

    fn delete(&self, id: &AssessmentId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }
}

/// Parse a categorical CLI value through its wire code, so the command line
/// accepts exactly the codes the API does ("ASY", "LVH", "Y", ...).
pub(crate) fn parse_code<T: DeserializeOwned>(raw: &str) -> Result<T, String> {
    serde_json::from_value(serde_json::Value::String(raw.trim().to_string()))
        .map_err(|err| format!("unrecognized code '{raw}' ({err})"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartcare::assessment::domain::{ChestPainType, RestingEcg, Sex};

    #[test]
    fn parse_code_accepts_wire_values() {
        assert_eq!(parse_code::<Sex>("M").expect("sex"), Sex::M);
        assert_eq!(
            parse_code::<ChestPainType>("ASY").expect("chest pain"),
            ChestPainType::Asy
        );
        assert_eq!(
            parse_code::<RestingEcg>("LVH").expect("ecg"),
            RestingEcg::Lvh
        );
    }

    #[test]
    fn parse_code_rejects_unknown_values() {
        assert!(parse_code::<Sex>("X").is_err());
        assert!(parse_code::<ChestPainType>("asy").is_err());
    }
}
