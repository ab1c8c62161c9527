use crate::image::{Rgb, RgbImage};
use crate::scores::{ImageAssessment, ModelOpinion, ScoringProfile};

/// Red channel beats both green and blue by more than `margin`.
pub fn is_red_dominant(px: Rgb, margin: u8) -> bool {
    let [r, g, b] = px.map(u16::from);
    let margin = u16::from(margin);
    r > g + margin && r > b + margin
}

pub fn count_red_pixels(image: &RgbImage, margin: u8) -> u64 {
    image
        .pixels
        .iter()
        .filter(|&&px| is_red_dominant(px, margin))
        .count() as u64
}

/// Percentage in [0, 100]. An empty image has no red.
pub fn red_percentage(image: &RgbImage, margin: u8) -> f64 {
    percentage(count_red_pixels(image, margin), image.pixel_count() as u64)
}

pub fn score_image(image: &RgbImage, profile: &ScoringProfile) -> ImageAssessment {
    let red_pixels = count_red_pixels(image, profile.red_margin);
    let total_pixels = image.pixel_count() as u64;
    let pct = percentage(red_pixels, total_pixels);
    ImageAssessment {
        red_pixels,
        total_pixels,
        red_percentage: pct,
        opinion: opinion_from_percentage(pct, profile),
    }
}

pub fn opinion_from_percentage(pct: f64, profile: &ScoringProfile) -> ModelOpinion {
    let positive = pct > profile.red_percentage_min;
    let raw = if positive {
        profile.image_confidence_base + pct * profile.image_confidence_slope
    } else {
        profile.image_confidence_base
            + (profile.image_negative_reference - pct) * profile.image_confidence_slope
    };
    let confidence = raw.min(profile.image_confidence_cap).max(0.0).round();
    ModelOpinion::new(positive, confidence as u32)
}

fn percentage(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}
