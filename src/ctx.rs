use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::image::RgbImage;
use crate::image::highlight::Region;
use crate::latency::Latency;
use crate::scores::{
    AnalysisOutcome, ClinicalAssessment, ClinicalRecord, CombinedVerdict, ImageAssessment,
    ScoringProfile,
};

#[derive(Debug, Clone)]
pub struct OutputPaths {
    pub out_dir: PathBuf,
    pub report_path: PathBuf,
    pub json_path: PathBuf,
    pub processed_path: PathBuf,
}

#[derive(Debug)]
pub struct Ctx {
    pub image_path: PathBuf,
    pub record: ClinicalRecord,
    pub profile: ScoringProfile,
    pub latency: Latency,
    pub seed: Option<u64>,
    pub highlight: bool,
    pub write_json: bool,
    pub write_processed: bool,
    pub tool_version: String,
    pub generated_at: DateTime<Local>,
    pub warnings: Vec<String>,
    pub image: Option<RgbImage>,
    pub processed: Option<RgbImage>,
    pub regions: Vec<Region>,
    pub clinical: Option<ClinicalAssessment>,
    pub image_assessment: Option<ImageAssessment>,
    pub verdict: Option<CombinedVerdict>,
    pub report_text: Option<String>,
    pub output: OutputPaths,
}

impl Ctx {
    pub fn new(
        image_path: PathBuf,
        out_dir: PathBuf,
        record: ClinicalRecord,
        write_json: bool,
        tool_version: &str,
    ) -> Self {
        let report_path = out_dir.join("lungscan-report.txt");
        let json_path = out_dir.join("lungscan.json");
        let processed_path = out_dir.join("processed.ppm");
        Self {
            image_path,
            record,
            profile: ScoringProfile::default_v1(),
            latency: Latency::none(),
            seed: None,
            highlight: true,
            write_json,
            write_processed: false,
            tool_version: tool_version.to_string(),
            generated_at: Local::now(),
            warnings: Vec::new(),
            image: None,
            processed: None,
            regions: Vec::new(),
            clinical: None,
            image_assessment: None,
            verdict: None,
            report_text: None,
            output: OutputPaths {
                out_dir,
                report_path,
                json_path,
                processed_path,
            },
        }
    }

    /// The image the model stage scores: the highlighted copy when present.
    pub fn scored_image(&self) -> Option<&RgbImage> {
        self.processed.as_ref().or(self.image.as_ref())
    }

    pub fn outcome(&self) -> anyhow::Result<AnalysisOutcome> {
        let clinical = self
            .clinical
            .ok_or_else(|| anyhow::anyhow!("clinical assessment missing"))?;
        let image = self
            .image_assessment
            .ok_or_else(|| anyhow::anyhow!("image assessment missing"))?;
        let verdict = self
            .verdict
            .ok_or_else(|| anyhow::anyhow!("combined verdict missing"))?;
        Ok(AnalysisOutcome {
            clinical,
            image,
            verdict,
        })
    }
}
