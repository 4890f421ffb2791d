use clap::Args;

use heartcare::assessment::domain::{
    ChestPainType, ClinicalRecord, ExerciseAngina, FastingBloodSugar, RestingEcg, Sex, StSlope,
};
use heartcare::assessment::{compose, evaluate};
use heartcare::error::AppError;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Age in years
    #[arg(long)]
    pub(crate) age: u8,
    /// Sex code: M or F
    #[arg(long, value_parser = crate::infra::parse_code::<Sex>)]
    pub(crate) sex: Sex,
    /// Chest pain type: ASY, ATA, NAP, or TA
    #[arg(long, value_parser = crate::infra::parse_code::<ChestPainType>)]
    pub(crate) chest_pain_type: ChestPainType,
    /// Resting blood pressure in mmHg
    #[arg(long)]
    pub(crate) resting_bp: u16,
    /// Serum cholesterol in mg/dL
    #[arg(long)]
    pub(crate) cholesterol: u16,
    /// Fasting blood sugar flag: 1 when above 120 mg/dL, else 0
    #[arg(long, value_parser = crate::infra::parse_code::<FastingBloodSugar>)]
    pub(crate) fasting_bs: FastingBloodSugar,
    /// Resting ECG result: Normal, ST, or LVH
    #[arg(long, value_parser = crate::infra::parse_code::<RestingEcg>)]
    pub(crate) resting_ecg: RestingEcg,
    /// Maximum heart rate achieved
    #[arg(long)]
    pub(crate) max_hr: u16,
    /// Exercise-induced angina: Y or N
    #[arg(long, value_parser = crate::infra::parse_code::<ExerciseAngina>)]
    pub(crate) exercise_angina: ExerciseAngina,
    /// ST depression induced by exercise relative to rest
    #[arg(long)]
    pub(crate) oldpeak: f32,
    /// Slope of the peak-exercise ST segment: Up, Flat, or Down
    #[arg(long, value_parser = crate::infra::parse_code::<StSlope>)]
    pub(crate) st_slope: StSlope,
}

impl EvaluateArgs {
    fn into_record(self) -> ClinicalRecord {
        ClinicalRecord {
            age: self.age,
            sex: self.sex,
            chest_pain_type: self.chest_pain_type,
            resting_bp: self.resting_bp,
            cholesterol: self.cholesterol,
            fasting_bs: self.fasting_bs,
            resting_ecg: self.resting_ecg,
            max_hr: self.max_hr,
            exercise_angina: self.exercise_angina,
            oldpeak: self.oldpeak,
            st_slope: self.st_slope,
        }
    }
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let record = args.into_record();
    let assessment = evaluate(&record);
    let recommendations = compose(assessment.level, &assessment.factors);

    println!(
        "Risk score: {}/100 ({})",
        assessment.score,
        assessment.level.label()
    );

    if assessment.factors.is_empty() {
        println!("No risk factors triggered.");
    } else {
        println!("Risk factors:");
        for factor in &assessment.factors {
            println!("  - {factor}");
        }
    }

    println!();
    println!("{recommendations}");

    Ok(())
}
