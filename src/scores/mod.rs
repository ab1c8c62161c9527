use std::fmt;

pub mod clinical;
pub mod combine;
pub mod image;
pub mod profile;

pub use profile::ScoringProfile;

pub const CONFIDENCE_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    /// Form encoding: 0 = female, 1 = male.
    pub fn from_flag(flag: u8) -> Option<Self> {
        match flag {
            0 => Some(Self::Female),
            1 => Some(Self::Male),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicalRecord {
    pub age: u32,
    pub gender: Gender,
    pub smoking_history: bool,
    pub chronic_cough: bool,
    pub shortness_of_breath: bool,
    pub chest_pain: bool,
}

impl ClinicalRecord {
    pub fn new(age: u32, gender: Gender) -> Self {
        Self {
            age,
            gender,
            smoking_history: false,
            chronic_cough: false,
            shortness_of_breath: false,
            chest_pain: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOpinion {
    pub predicted_positive: bool,
    pub confidence: u8,
}

impl ModelOpinion {
    /// Builds an opinion, clamping `confidence` into [0, 100].
    pub fn new(predicted_positive: bool, confidence: u32) -> Self {
        Self {
            predicted_positive,
            confidence: clamp_confidence(confidence),
        }
    }

    pub fn label(&self) -> VerdictLabel {
        if self.predicted_positive {
            VerdictLabel::CancerDetected
        } else {
            VerdictLabel::NoCancerDetected
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerdictLabel {
    CancerDetected,
    NoCancerDetected,
    Uncertain,
}

impl VerdictLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CancerDetected => "Cancer Detected",
            Self::NoCancerDetected => "No Cancer Detected",
            Self::Uncertain => "Uncertain, further tests needed",
        }
    }

    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::CancerDetected => "Immediate follow-up with specialist recommended.",
            Self::NoCancerDetected => "Regular screening recommended as per standard guidelines.",
            Self::Uncertain => "Additional diagnostic tests recommended for conclusive diagnosis.",
        }
    }
}

impl fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CombinedVerdict {
    pub label: VerdictLabel,
    pub confidence: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClinicalAssessment {
    /// Uncapped weighted sum; may exceed 100.
    pub points: u32,
    pub opinion: ModelOpinion,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageAssessment {
    pub red_pixels: u64,
    pub total_pixels: u64,
    pub red_percentage: f64,
    pub opinion: ModelOpinion,
}

/// Everything one analysis run produced, as consumed by the report writers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnalysisOutcome {
    pub clinical: ClinicalAssessment,
    pub image: ImageAssessment,
    pub verdict: CombinedVerdict,
}

pub fn clamp_confidence(value: u32) -> u8 {
    value.min(CONFIDENCE_MAX as u32) as u8
}
