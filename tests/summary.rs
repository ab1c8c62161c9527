use std::path::PathBuf;

use lungscan_insight::ctx::Ctx;
use lungscan_insight::image::RgbImage;
use lungscan_insight::io::summary::format_summary;
use lungscan_insight::scores::{
    ClinicalAssessment, ClinicalRecord, CombinedVerdict, Gender, ImageAssessment, ModelOpinion,
    VerdictLabel,
};

#[test]
fn summary_format() {
    let mut ctx = Ctx::new(
        PathBuf::from("scan.ppm"),
        PathBuf::from("out"),
        ClinicalRecord::new(58, Gender::Female),
        false,
        "0.0.0-test",
    );
    ctx.image = Some(RgbImage::new(64, 32, [0, 0, 0]));
    ctx.clinical = Some(ClinicalAssessment {
        points: 15,
        opinion: ModelOpinion::new(false, 85),
    });
    ctx.image_assessment = Some(ImageAssessment {
        red_pixels: 82,
        total_pixels: 2048,
        red_percentage: 4.00390625,
        opinion: ModelOpinion::new(true, 70),
    });
    ctx.verdict = Some(CombinedVerdict {
        label: VerdictLabel::Uncertain,
        confidence: 54,
    });

    let s = format_summary(&ctx).unwrap();
    assert!(s.contains("lungscan-insight v0.0.0-test"));
    assert!(s.contains("Input: 64x32 image, age=58"));
    assert!(s.contains("Clinical: negative 85% (points=15)"));
    assert!(s.contains("Image: positive 70% (red=4.00%)"));
    assert!(s.contains("Decision: Uncertain, further tests needed (54%)"));
}

#[test]
fn summary_requires_verdict() {
    let ctx = Ctx::new(
        PathBuf::from("scan.ppm"),
        PathBuf::from("out"),
        ClinicalRecord::new(58, Gender::Female),
        false,
        "0.0.0-test",
    );
    assert!(format_summary(&ctx).is_err());
}
