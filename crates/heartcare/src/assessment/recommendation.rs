//! Renders the advice document for an assessment. Output is plain text with
//! literal heading and bullet markers; nothing here is rendered or escaped.

use super::domain::RiskLevel;

const LOW_RISK_PLAN: &str = "\
## Excellent! Your cardiovascular health looks good
### Keep up the great work:
- Maintain regular exercise (150 minutes/week)
- Continue a balanced diet rich in fruits and vegetables
- Keep regular health check-ups
- Stay hydrated and get adequate sleep";

const MODERATE_RISK_PLAN: &str = "\
## Moderate Risk - Lifestyle Improvements Needed
### Consider these lifestyle changes:
- Increase physical activity to at least 30 minutes daily
- Reduce sodium intake to less than 2,300mg/day
- Incorporate heart-healthy foods (omega-3 fatty acids)
- Monitor blood pressure regularly
- Consider stress management techniques";

const HIGH_RISK_PLAN: &str = "\
## High Risk - Immediate Action Required
### Urgent recommendations:
- **Schedule an appointment with a cardiologist immediately**
- Implement comprehensive lifestyle changes
- Monitor all vital signs regularly
- Consider medication under medical supervision
- Adopt a strict heart-healthy diet";

const BLOOD_PRESSURE_ADVICE: &str = "\
### Blood Pressure Management:
- Limit alcohol consumption
- Practice relaxation techniques
- Monitor BP daily";

const CHOLESTEROL_ADVICE: &str = "\
### Cholesterol Control:
- Reduce saturated and trans fats
- Increase fiber intake
- Consider plant stanols/sterols";

const EXERCISE_ADVICE: &str = "\
### Exercise Guidelines:
- Start with low-impact activities
- Consult physician before intense exercise
- Monitor heart rate during activity";

const BLOOD_SUGAR_ADVICE: &str = "\
### Blood Sugar Management:
- Monitor carbohydrate intake
- Consider diabetes screening
- Maintain healthy weight";

const GENERAL_HEALTH_TIPS: &str = "\
### General Heart Health Tips:
- Don't smoke or use tobacco
- Limit processed foods
- Maintain healthy weight
- Manage stress effectively
- Get adequate sleep (7-9 hours)";

/// Keyword-to-advice routing checked in this order for every factor label.
const FACTOR_ADVICE: [(&str, &str); 4] = [
    ("blood pressure", BLOOD_PRESSURE_ADVICE),
    ("cholesterol", CHOLESTEROL_ADVICE),
    ("exercise", EXERCISE_ADVICE),
    ("blood sugar", BLOOD_SUGAR_ADVICE),
];

/// Build the recommendation document for a risk tier and its factor labels.
///
/// The document is the tier's lifestyle plan, then one advice block per
/// factor category matched case-insensitively against the labels (a category
/// appears at most once, in the order its first matching label appears), and
/// always closes with the general heart-health block. Blocks are separated by
/// a blank line. Total and deterministic over its inputs.
pub fn compose(level: RiskLevel, factors: &[String]) -> String {
    let plan = match level {
        RiskLevel::Low => LOW_RISK_PLAN,
        RiskLevel::Moderate => MODERATE_RISK_PLAN,
        RiskLevel::High => HIGH_RISK_PLAN,
    };

    let mut blocks = vec![plan];
    for factor in factors {
        let lowered = factor.to_lowercase();
        let matched = FACTOR_ADVICE
            .iter()
            .find(|(keyword, _)| lowered.contains(keyword))
            .map(|(_, advice)| *advice);
        if let Some(advice) = matched {
            if !blocks.contains(&advice) {
                blocks.push(advice);
            }
        }
    }
    blocks.push(GENERAL_HEALTH_TIPS);

    blocks.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn factors(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|label| label.to_string()).collect()
    }

    #[test]
    fn always_closes_with_general_tips() {
        for level in [RiskLevel::Low, RiskLevel::Moderate, RiskLevel::High] {
            let text = compose(level, &[]);
            assert!(text.ends_with(GENERAL_HEALTH_TIPS));
        }
    }

    #[test]
    fn tier_plans_are_mutually_exclusive() {
        let low = compose(RiskLevel::Low, &[]);
        assert!(low.contains("Keep up the great work"));
        assert!(!low.contains("Urgent recommendations"));

        let moderate = compose(RiskLevel::Moderate, &[]);
        assert!(moderate.contains("Lifestyle Improvements Needed"));

        let high = compose(RiskLevel::High, &[]);
        assert!(high.contains("Immediate Action Required"));
        assert!(!high.contains("Keep up the great work"));
    }

    #[test]
    fn factor_labels_route_to_their_advice_blocks() {
        let text = compose(
            RiskLevel::Moderate,
            &factors(&[
                "High blood pressure",
                "Borderline high cholesterol",
                "Elevated fasting blood sugar",
                "Exercise-induced angina",
            ]),
        );

        assert!(text.contains("### Blood Pressure Management:"));
        assert!(text.contains("### Cholesterol Control:"));
        assert!(text.contains("### Blood Sugar Management:"));
        assert!(text.contains("### Exercise Guidelines:"));
    }

    #[test]
    fn advice_blocks_follow_factor_order() {
        let text = compose(
            RiskLevel::High,
            &factors(&["Elevated fasting blood sugar", "Exercise-induced angina"]),
        );

        let sugar = text.find("### Blood Sugar Management:").expect("sugar block");
        let exercise = text.find("### Exercise Guidelines:").expect("exercise block");
        assert!(sugar < exercise);
    }

    #[test]
    fn duplicate_keyword_hits_append_one_block() {
        let text = compose(
            RiskLevel::Moderate,
            &factors(&["High blood pressure", "Elevated blood pressure"]),
        );

        assert_eq!(text.matches("### Blood Pressure Management:").count(), 1);
    }

    #[test]
    fn unmatched_labels_add_no_blocks() {
        let with_unmatched = compose(RiskLevel::Low, &factors(&["Age over 60", "Male sex"]));
        let without = compose(RiskLevel::Low, &[]);
        assert_eq!(with_unmatched, without);
    }

    #[test]
    fn composition_is_idempotent() {
        let labels = factors(&["High cholesterol", "Flat ST slope"]);
        let first = compose(RiskLevel::Moderate, &labels);
        let second = compose(RiskLevel::Moderate, &labels);
        assert_eq!(first, second);
    }

    #[test]
    fn blocks_are_separated_by_blank_lines() {
        let text = compose(RiskLevel::Low, &factors(&["High blood pressure"]));
        let tail = text
            .split("\n\n")
            .find(|block| block.starts_with("### Blood Pressure Management:"));
        assert!(tail.is_some());
    }
}
