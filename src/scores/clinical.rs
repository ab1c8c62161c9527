use crate::scores::{ClinicalAssessment, ClinicalRecord, Gender, ModelOpinion, ScoringProfile};

pub fn clinical_points(record: &ClinicalRecord, profile: &ScoringProfile) -> u32 {
    let mut points = profile
        .age_brackets
        .iter()
        .find(|b| record.age > b.over)
        .map(|b| b.points)
        .unwrap_or(0);

    if record.smoking_history {
        points += profile.smoking_points;
    }

    let symptoms = [
        record.chronic_cough,
        record.shortness_of_breath,
        record.chest_pain,
    ];
    for &present in &symptoms {
        if present {
            points += profile.symptom_points;
        }
    }

    if record.gender == Gender::Male {
        points += profile.male_points;
    }

    points
}

/// Opinion confidence is clamped to 100; the raw sum stays in `points`.
pub fn score_clinical(record: &ClinicalRecord, profile: &ScoringProfile) -> ClinicalAssessment {
    let points = clinical_points(record, profile);
    let positive = points >= profile.clinical_positive_min;
    let confidence = if positive {
        points
    } else {
        100u32.saturating_sub(points)
    };
    ClinicalAssessment {
        points,
        opinion: ModelOpinion::new(positive, confidence),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(age: u32) -> ClinicalRecord {
        ClinicalRecord::new(age, Gender::Female)
    }

    #[test]
    fn age_brackets_are_exclusive() {
        let profile = ScoringProfile::default_v1();
        assert_eq!(clinical_points(&record(40), &profile), 0);
        assert_eq!(clinical_points(&record(41), &profile), 10);
        assert_eq!(clinical_points(&record(50), &profile), 10);
        assert_eq!(clinical_points(&record(51), &profile), 15);
        assert_eq!(clinical_points(&record(60), &profile), 15);
        assert_eq!(clinical_points(&record(61), &profile), 25);
    }

    #[test]
    fn threshold_is_inclusive() {
        let profile = ScoringProfile::default_v1();
        let mut r = record(30);
        r.smoking_history = true;
        r.chest_pain = true;
        r.gender = Gender::Male;
        let a = score_clinical(&r, &profile);
        assert_eq!(a.points, 50);
        assert!(a.opinion.predicted_positive);
        assert_eq!(a.opinion.confidence, 50);
    }
}
