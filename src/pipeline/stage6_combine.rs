use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::{Stage, StageFuture};
use crate::scores::combine::combine;

pub struct Stage6Combine;

impl Stage6Combine {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage6Combine {
    fn name(&self) -> &'static str {
        "stage6_combine"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            let clinical = ctx
                .clinical
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("clinical assessment missing"))?;
            let image = ctx
                .image_assessment
                .as_ref()
                .ok_or_else(|| anyhow::anyhow!("image assessment missing"))?;
            let verdict = combine(&clinical.opinion, &image.opinion, &ctx.profile);
            info!(
                label = %verdict.label,
                confidence = verdict.confidence,
                "verdict_ready"
            );
            ctx.verdict = Some(verdict);
            anyhow::Ok(())
        })
    }
}
