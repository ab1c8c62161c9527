use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::image::{Rgb, RgbImage};

pub const OVERLAY_COLOR: Rgb = [255, 0, 0];
pub const OVERLAY_ALPHA: f64 = 0.3;

const MIN_REGIONS: usize = 1;
const MAX_REGIONS: usize = 3;
const MIN_RADIUS: f64 = 20.0;
const RADIUS_SPAN: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub cx: f64,
    pub cy: f64,
    pub radius: f64,
}

/// Simulated segmentation: paints 1-3 translucent red discs into the central
/// part of the image and returns where they landed.
pub fn highlight_regions<R: Rng>(image: &mut RgbImage, rng: &mut R) -> Vec<Region> {
    let w = image.width as f64;
    let h = image.height as f64;
    let n = rng.gen_range(MIN_REGIONS..=MAX_REGIONS);
    let mut regions = Vec::with_capacity(n);
    for _ in 0..n {
        let region = Region {
            cx: rng.gen_range(0.0..1.0) * w * 0.7 + w * 0.15,
            cy: rng.gen_range(0.0..1.0) * h * 0.6 + h * 0.2,
            radius: rng.gen_range(0.0..1.0) * RADIUS_SPAN + MIN_RADIUS,
        };
        fill_disc(image, &region);
        regions.push(region);
    }
    regions
}

/// Source-over fill of every pixel whose centre lies inside the disc.
pub fn fill_disc(image: &mut RgbImage, region: &Region) {
    if image.is_empty() {
        return;
    }
    let r2 = region.radius * region.radius;
    let x0 = clamp_index(region.cx - region.radius, image.width);
    let x1 = clamp_index(region.cx + region.radius + 1.0, image.width);
    let y0 = clamp_index(region.cy - region.radius, image.height);
    let y1 = clamp_index(region.cy + region.radius + 1.0, image.height);

    for y in y0..y1 {
        let dy = y as f64 + 0.5 - region.cy;
        for x in x0..x1 {
            let dx = x as f64 + 0.5 - region.cx;
            if dx * dx + dy * dy > r2 {
                continue;
            }
            if let Some(px) = image.get(x, y) {
                image.put(x, y, blend(px, OVERLAY_COLOR, OVERLAY_ALPHA));
            }
        }
    }
}

pub fn blend(dst: Rgb, src: Rgb, alpha: f64) -> Rgb {
    let mut out = [0u8; 3];
    for i in 0..3 {
        let v = f64::from(src[i]) * alpha + f64::from(dst[i]) * (1.0 - alpha);
        out[i] = v.round().clamp(0.0, 255.0) as u8;
    }
    out
}

fn clamp_index(v: f64, len: usize) -> usize {
    if v <= 0.0 {
        0
    } else {
        (v as usize).min(len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blend_tints_towards_red() {
        assert_eq!(blend([5, 100, 0], OVERLAY_COLOR, OVERLAY_ALPHA), [80, 70, 0]);
        assert_eq!(blend([255, 0, 0], OVERLAY_COLOR, OVERLAY_ALPHA), [255, 0, 0]);
    }

    #[test]
    fn disc_outside_image_is_clipped() {
        let mut img = RgbImage::new(4, 4, [0, 0, 0]);
        fill_disc(
            &mut img,
            &Region {
                cx: -100.0,
                cy: -100.0,
                radius: 5.0,
            },
        );
        assert!(img.pixels.iter().all(|&p| p == [0, 0, 0]));
    }
}
