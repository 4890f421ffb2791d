use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::Serialize;
use serde_json::json;
use std::sync::Arc;

use heartcare::assessment::domain::ClinicalRecord;
use heartcare::assessment::repository::AssessmentRepository;
use heartcare::assessment::{
    assessment_router, compose, evaluate, AssessmentService, ScoreComponent,
};

/// One-shot scoring response for callers that only need the engine.
#[derive(Debug, Serialize)]
pub(crate) struct RiskReportResponse {
    pub(crate) risk_score: u8,
    pub(crate) risk_level: &'static str,
    pub(crate) factors: Vec<String>,
    pub(crate) components: Vec<ScoreComponent>,
    pub(crate) recommendations: String,
}

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: AssessmentRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/risk/evaluate",
            axum::routing::post(evaluate_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Score a record without persisting it.
pub(crate) async fn evaluate_endpoint(
    Json(record): Json<ClinicalRecord>,
) -> Json<RiskReportResponse> {
    let assessment = evaluate(&record);
    let recommendations = compose(assessment.level, &assessment.factors);

    Json(RiskReportResponse {
        risk_score: assessment.score,
        risk_level: assessment.level.label(),
        factors: assessment.factors,
        components: assessment.components,
        recommendations,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use heartcare::assessment::domain::{
        ChestPainType, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope,
    };

    fn high_risk_record() -> ClinicalRecord {
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

    #[tokio::test]
    async fn evaluate_endpoint_scores_without_persisting() {
        let Json(body) = evaluate_endpoint(Json(high_risk_record())).await;

        assert_eq!(body.risk_score, 100);
        assert_eq!(body.risk_level, "High");
        assert_eq!(body.factors.len(), 11);
        assert_eq!(body.components.len(), 11);
        assert!(body.recommendations.contains("Immediate Action Required"));
    }

    #[tokio::test]
    async fn evaluate_endpoint_handles_quiet_records() {
        let record = ClinicalRecord {
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
        };

        let Json(body) = evaluate_endpoint(Json(record)).await;

        assert_eq!(body.risk_score, 0);
        assert_eq!(body.risk_level, "Low");
        assert!(body.factors.is_empty());
        assert!(body
            .recommendations
            .contains("cardiovascular health looks good"));
    }
}
