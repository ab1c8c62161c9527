use serde::{Deserialize, Serialize};

use crate::image::highlight::Region;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Female,
    Male,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub age: u32,
    pub gender: Gender,
    pub smoking_history: bool,
    pub chronic_cough: bool,
    pub shortness_of_breath: bool,
    pub chest_pain: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelOpinion {
    pub predicted_positive: bool,
    pub confidence: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClinicalModel {
    pub points: u32,
    pub opinion: ModelOpinion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageMeta {
    pub path: String,
    pub width: u64,
    pub height: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImageModel {
    pub red_pixels: u64,
    pub total_pixels: u64,
    pub red_percentage: f64,
    pub highlighted_regions: Vec<Region>,
    pub opinion: ModelOpinion,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Verdict {
    pub label: String,
    pub confidence: u8,
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LungScanV1 {
    pub tool: String,
    pub version: String,
    pub schema_version: String,
    pub generated_at: String,
    pub clinical_record: ClinicalRecord,
    pub image: ImageMeta,
    pub clinical_model: ClinicalModel,
    pub image_model: ImageModel,
    pub verdict: Verdict,
    pub warnings: Vec<String>,
}
