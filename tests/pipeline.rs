use std::path::{Path, PathBuf};

use lungscan_insight::ctx::Ctx;
use lungscan_insight::image::RgbImage;
use lungscan_insight::io::ppm::write_ppm;
use lungscan_insight::pipeline::Pipeline;
use lungscan_insight::schema::v1::LungScanV1;
use lungscan_insight::scores::{ClinicalRecord, Gender, VerdictLabel};
use tempfile::TempDir;

fn write_scan(dir: &Path, img: &RgbImage) -> PathBuf {
    let path = dir.join("scan.ppm");
    write_ppm(&path, img).unwrap();
    path
}

fn make_ctx(dir: &Path, image: PathBuf, record: ClinicalRecord) -> Ctx {
    Ctx::new(image, dir.join("out"), record, true, "0.0.0-test")
}

#[tokio::test]
async fn clean_scan_and_low_risk_agree_on_negative() {
    let tmp = TempDir::new().unwrap();
    let image = write_scan(tmp.path(), &RgbImage::new(10, 10, [0, 0, 0]));
    let mut ctx = make_ctx(tmp.path(), image, ClinicalRecord::new(30, Gender::Female));
    ctx.highlight = false;

    Pipeline::analysis().run(&mut ctx).await.unwrap();

    let verdict = ctx.verdict.unwrap();
    assert_eq!(verdict.label, VerdictLabel::NoCancerDetected);
    assert_eq!(verdict.confidence, 98);

    let report = std::fs::read_to_string(&ctx.output.report_path).unwrap();
    assert!(report.contains("Final Decision: No Cancer Detected"));
    assert!(report.contains("Confidence: 98%"));
    assert_eq!(ctx.report_text.as_deref(), Some(report.as_str()));

    let json = std::fs::read_to_string(&ctx.output.json_path).unwrap();
    let doc: LungScanV1 = serde_json::from_str(&json).unwrap();
    assert_eq!(doc.tool, "lungscan-insight");
    assert_eq!(doc.schema_version, "v1");
    assert_eq!(doc.verdict.label, "No Cancer Detected");
    assert_eq!(doc.clinical_model.points, 0);
    assert_eq!(doc.image.width, 10);
    assert!(doc.image_model.highlighted_regions.is_empty());
}

#[tokio::test]
async fn highlighted_scan_turns_positive() {
    let tmp = TempDir::new().unwrap();
    let image = write_scan(tmp.path(), &RgbImage::new(200, 200, [0, 0, 0]));
    let mut record = ClinicalRecord::new(65, Gender::Male);
    record.smoking_history = true;
    let mut ctx = make_ctx(tmp.path(), image, record);
    ctx.seed = Some(42);
    ctx.write_processed = true;

    Pipeline::analysis().run(&mut ctx).await.unwrap();

    let image = ctx.image_assessment.unwrap();
    assert!(image.red_percentage > 1.0);
    assert!(image.opinion.predicted_positive);
    assert!(!ctx.regions.is_empty());

    // 25 + 30 + 5 = 60 points, positive at 60
    let clinical = ctx.clinical.unwrap();
    assert_eq!(clinical.points, 60);
    assert_eq!(ctx.verdict.unwrap().label, VerdictLabel::CancerDetected);
    assert!(ctx.output.processed_path.exists());
}

#[tokio::test]
async fn uncapped_points_leave_a_warning() {
    let tmp = TempDir::new().unwrap();
    let image = write_scan(tmp.path(), &RgbImage::new(4, 4, [255, 0, 0]));
    let record = ClinicalRecord {
        age: 70,
        gender: Gender::Male,
        smoking_history: true,
        chronic_cough: true,
        shortness_of_breath: true,
        chest_pain: true,
    };
    let mut ctx = make_ctx(tmp.path(), image, record);
    ctx.highlight = false;

    Pipeline::analysis().run(&mut ctx).await.unwrap();

    assert_eq!(ctx.clinical.unwrap().points, 105);
    assert_eq!(ctx.clinical.unwrap().opinion.confidence, 100);
    assert!(ctx.warnings.iter().any(|w| w.contains("105")));
    // (100 + 95) / 2 rounded up
    assert_eq!(ctx.verdict.unwrap().confidence, 98);
}

#[tokio::test]
async fn invalid_age_fails_before_scoring() {
    let tmp = TempDir::new().unwrap();
    let image = write_scan(tmp.path(), &RgbImage::new(2, 2, [0, 0, 0]));
    let mut ctx = make_ctx(tmp.path(), image, ClinicalRecord::new(0, Gender::Female));

    let err = Pipeline::analysis().run(&mut ctx).await.unwrap_err();
    assert!(err.to_string().contains("valid age"));
    assert!(ctx.clinical.is_none());
    assert!(!ctx.output.report_path.exists());
}

#[tokio::test]
async fn failed_validation_leaves_no_output_dir() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = make_ctx(
        tmp.path(),
        tmp.path().join("nope.ppm"),
        ClinicalRecord::new(50, Gender::Female),
    );

    let err = Pipeline::analysis().run(&mut ctx).await.unwrap_err();
    assert!(err.to_string().contains("Image required"));
    assert!(!ctx.output.out_dir.exists());
}

#[tokio::test]
async fn missing_image_fails_validation() {
    let tmp = TempDir::new().unwrap();
    let mut ctx = make_ctx(
        tmp.path(),
        tmp.path().join("nope.ppm"),
        ClinicalRecord::new(50, Gender::Female),
    );
    let err = Pipeline::validation().run(&mut ctx).await.unwrap_err();
    assert!(err.to_string().contains("Image required"));
}

#[tokio::test]
async fn empty_image_scores_zero_red() {
    let tmp = TempDir::new().unwrap();
    let image = write_scan(tmp.path(), &RgbImage::new(0, 0, [0, 0, 0]));
    let mut ctx = make_ctx(tmp.path(), image, ClinicalRecord::new(45, Gender::Female));

    Pipeline::analysis().run(&mut ctx).await.unwrap();

    let image = ctx.image_assessment.unwrap();
    assert_eq!(image.red_percentage, 0.0);
    assert!(!image.opinion.predicted_positive);
    assert!(!ctx.warnings.is_empty());
}
