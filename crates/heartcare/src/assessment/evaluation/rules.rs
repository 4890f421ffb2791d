use super::super::domain::{
    ChestPainType, ClinicalRecord, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope,
};
use super::RiskClause;

/// Contribution selected by a single clause: points toward the total and,
/// for the branches clinicians flag, a factor label.
pub(crate) struct Contribution {
    pub(crate) points: u8,
    pub(crate) label: Option<&'static str>,
}

impl Contribution {
    const fn labeled(points: u8, label: &'static str) -> Option<Self> {
        Some(Self {
            points,
            label: Some(label),
        })
    }

    const fn unlabeled(points: u8) -> Option<Self> {
        Some(Self {
            points,
            label: None,
        })
    }
}

type ClauseFn = fn(&ClinicalRecord) -> Option<Contribution>;

/// The scoring table in evaluation order. Each clause picks at most one
/// branch, so contributions are additive and mutually exclusive per clause.
/// Factor labels surface in the order the clauses appear here.
pub(crate) const SCORING_TABLE: [(RiskClause, ClauseFn); 11] = [
    (RiskClause::Age, age),
    (RiskClause::Sex, sex),
    (RiskClause::ChestPain, chest_pain),
    (RiskClause::RestingBloodPressure, resting_blood_pressure),
    (RiskClause::Cholesterol, cholesterol),
    (RiskClause::FastingBloodSugar, fasting_blood_sugar),
    (RiskClause::RestingEcg, resting_ecg),
    (RiskClause::MaxHeartRate, max_heart_rate),
    (RiskClause::ExerciseAngina, exercise_angina),
    (RiskClause::Oldpeak, oldpeak),
    (RiskClause::StSlope, st_slope),
];

fn age(record: &ClinicalRecord) -> Option<Contribution> {
    if record.age > 60 {
        Contribution::labeled(20, "Age over 60")
    } else if record.age > 50 {
        Contribution::labeled(15, "Age over 50")
    } else if record.age > 40 {
        Contribution::unlabeled(10)
    } else {
        None
    }
}

fn sex(record: &ClinicalRecord) -> Option<Contribution> {
    match record.sex {
        Sex::M => Contribution::labeled(10, "Male sex"),
        Sex::F => None,
    }
}

fn chest_pain(record: &ClinicalRecord) -> Option<Contribution> {
    match record.chest_pain_type {
        ChestPainType::Asy => Contribution::labeled(20, "Asymptomatic chest pain"),
        ChestPainType::Ata => Contribution::unlabeled(10),
        ChestPainType::Nap => Contribution::unlabeled(5),
        ChestPainType::Ta => None,
    }
}

fn resting_blood_pressure(record: &ClinicalRecord) -> Option<Contribution> {
    if record.resting_bp > 140 {
        Contribution::labeled(15, "High blood pressure")
    } else if record.resting_bp > 130 {
        Contribution::labeled(10, "Elevated blood pressure")
    } else {
        None
    }
}

fn cholesterol(record: &ClinicalRecord) -> Option<Contribution> {
    if record.cholesterol > 240 {
        Contribution::labeled(15, "High cholesterol")
    } else if record.cholesterol > 200 {
        Contribution::labeled(10, "Borderline high cholesterol")
    } else {
        None
    }
}

fn fasting_blood_sugar(record: &ClinicalRecord) -> Option<Contribution> {
    match record.fasting_bs {
        FastingBloodSugar::Elevated => Contribution::labeled(10, "Elevated fasting blood sugar"),
        FastingBloodSugar::Normal => None,
    }
}

fn resting_ecg(record: &ClinicalRecord) -> Option<Contribution> {
    match record.resting_ecg {
        RestingEcg::Lvh => Contribution::labeled(10, "Left ventricular hypertrophy"),
        RestingEcg::St => Contribution::unlabeled(5),
        RestingEcg::Normal => None,
    }
}

fn max_heart_rate(record: &ClinicalRecord) -> Option<Contribution> {
    if record.max_hr < 120 {
        Contribution::labeled(10, "Low maximum heart rate")
    } else if record.max_hr < 140 {
        Contribution::unlabeled(5)
    } else {
        None
    }
}

fn exercise_angina(record: &ClinicalRecord) -> Option<Contribution> {
    match record.exercise_angina {
        ExerciseAngina::Yes => Contribution::labeled(15, "Exercise-induced angina"),
        ExerciseAngina::No => None,
    }
}

fn oldpeak(record: &ClinicalRecord) -> Option<Contribution> {
    if record.oldpeak > 2.0 {
        Contribution::labeled(15, "Significant ST depression")
    } else if record.oldpeak > 1.0 {
        Contribution::unlabeled(10)
    } else if record.oldpeak > 0.0 {
        Contribution::unlabeled(5)
    } else {
        None
    }
}

fn st_slope(record: &ClinicalRecord) -> Option<Contribution> {
    match record.st_slope {
        StSlope::Flat => Contribution::labeled(15, "Flat ST slope"),
        StSlope::Down => Contribution::labeled(10, "Downsloping ST segment"),
        StSlope::Up => None,
    }
}
