use tracing::info;

use crate::ctx::Ctx;
use crate::latency::Latency;
use crate::pipeline::{Stage, StageFuture};
use crate::scores::image::score_image;

pub struct Stage5ImageModel;

impl Stage5ImageModel {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage5ImageModel {
    fn name(&self) -> &'static str {
        "stage5_image_model"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            Latency::pause(ctx.latency.image, "image").await;
            let image = ctx
                .scored_image()
                .ok_or_else(|| anyhow::anyhow!("input image missing"))?;
            let assessment = score_image(image, &ctx.profile);
            info!(
                red_pixels = assessment.red_pixels,
                red_percentage = assessment.red_percentage,
                positive = assessment.opinion.predicted_positive,
                confidence = assessment.opinion.confidence,
                "image_opinion_ready"
            );
            ctx.image_assessment = Some(assessment);
            anyhow::Ok(())
        })
    }
}
