use anyhow::Context;
use tracing::{info, warn};

use crate::ctx::Ctx;
use crate::io::ppm;
use crate::pipeline::{Stage, StageFuture};

pub struct Stage2Image;

impl Stage2Image {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage2Image {
    fn name(&self) -> &'static str {
        "stage2_image"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            let image = ppm::read_ppm(&ctx.image_path)
                .with_context(|| format!("failed to load {}", ctx.image_path.display()))?;
            if image.is_empty() {
                warn!("image has no pixels");
                ctx.warnings
                    .push("image has no pixels; red percentage fixed at 0".to_string());
            }
            info!(
                width = image.width,
                height = image.height,
                "image_loaded"
            );
            ctx.image = Some(image);
            anyhow::Ok(())
        })
    }
}
