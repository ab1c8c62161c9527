#[derive(Debug, Clone)]
pub struct AgeBracket {
    /// Strict lower bound: the bracket applies when `age > over`.
    pub over: u32,
    pub points: u32,
}

#[derive(Debug, Clone)]
pub struct ScoringProfile {
    /// Ordered highest first; the first matching bracket wins.
    pub age_brackets: Vec<AgeBracket>,
    pub smoking_points: u32,
    pub symptom_points: u32,
    pub male_points: u32,
    pub clinical_positive_min: u32,
    pub red_margin: u8,
    pub red_percentage_min: f64,
    pub image_confidence_base: f64,
    pub image_confidence_slope: f64,
    pub image_confidence_cap: f64,
    pub image_negative_reference: f64,
    pub disagreement_threshold: u8,
    pub disagreement_penalty: u8,
}

impl ScoringProfile {
    pub fn default_v1() -> Self {
        Self {
            age_brackets: vec![
                AgeBracket {
                    over: 60,
                    points: 25,
                },
                AgeBracket {
                    over: 50,
                    points: 15,
                },
                AgeBracket {
                    over: 40,
                    points: 10,
                },
            ],
            smoking_points: 30,
            symptom_points: 15,
            male_points: 5,
            clinical_positive_min: 50,
            red_margin: 20,
            red_percentage_min: 1.0,
            image_confidence_base: 50.0,
            image_confidence_slope: 5.0,
            image_confidence_cap: 95.0,
            image_negative_reference: 10.0,
            disagreement_threshold: 30,
            disagreement_penalty: 10,
        }
    }
}

impl Default for ScoringProfile {
    fn default() -> Self {
        Self::default_v1()
    }
}
