use std::path::Path;

use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::io::report::TIMESTAMP_FORMAT;
use crate::schema::v1::{
    ClinicalModel, ClinicalRecord, Gender, ImageMeta, ImageModel, LungScanV1, ModelOpinion,
    Verdict,
};
use crate::scores;

pub fn build_report(ctx: &Ctx) -> Result<LungScanV1> {
    let outcome = ctx.outcome()?;
    let image = ctx.image.as_ref().context("input image missing")?;
    let record = &ctx.record;

    let clinical_record = ClinicalRecord {
        age: record.age,
        gender: match record.gender {
            scores::Gender::Female => Gender::Female,
            scores::Gender::Male => Gender::Male,
        },
        smoking_history: record.smoking_history,
        chronic_cough: record.chronic_cough,
        shortness_of_breath: record.shortness_of_breath,
        chest_pain: record.chest_pain,
    };

    Ok(LungScanV1 {
        tool: "lungscan-insight".to_string(),
        version: ctx.tool_version.clone(),
        schema_version: "v1".to_string(),
        generated_at: ctx.generated_at.format(TIMESTAMP_FORMAT).to_string(),
        clinical_record,
        image: ImageMeta {
            path: ctx.image_path.display().to_string(),
            width: image.width as u64,
            height: image.height as u64,
        },
        clinical_model: ClinicalModel {
            points: outcome.clinical.points,
            opinion: opinion(&outcome.clinical.opinion),
        },
        image_model: ImageModel {
            red_pixels: outcome.image.red_pixels,
            total_pixels: outcome.image.total_pixels,
            red_percentage: outcome.image.red_percentage,
            highlighted_regions: ctx.regions.clone(),
            opinion: opinion(&outcome.image.opinion),
        },
        verdict: Verdict {
            label: outcome.verdict.label.as_str().to_string(),
            confidence: outcome.verdict.confidence,
            recommendation: outcome.verdict.label.recommendation().to_string(),
        },
        warnings: ctx.warnings.clone(),
    })
}

pub fn write_json(path: &Path, ctx: &Ctx) -> Result<()> {
    let report = build_report(ctx)?;
    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    let writer = std::io::BufWriter::new(file);
    serde_json::to_writer_pretty(writer, &report)?;
    Ok(())
}

fn opinion(o: &scores::ModelOpinion) -> ModelOpinion {
    ModelOpinion {
        predicted_positive: o.predicted_positive,
        confidence: o.confidence,
    }
}
