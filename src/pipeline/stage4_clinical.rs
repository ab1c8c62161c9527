use tracing::info;

use crate::ctx::Ctx;
use crate::latency::Latency;
use crate::pipeline::{Stage, StageFuture};
use crate::scores::clinical::score_clinical;

pub struct Stage4Clinical;

impl Stage4Clinical {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage4Clinical {
    fn name(&self) -> &'static str {
        "stage4_clinical"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            Latency::pause(ctx.latency.clinical, "clinical").await;
            let assessment = score_clinical(&ctx.record, &ctx.profile);
            if assessment.points > 100 {
                ctx.warnings.push(format!(
                    "clinical risk points {} exceed 100; confidence clamped",
                    assessment.points
                ));
            }
            info!(
                points = assessment.points,
                positive = assessment.opinion.predicted_positive,
                confidence = assessment.opinion.confidence,
                "clinical_opinion_ready"
            );
            ctx.clinical = Some(assessment);
            anyhow::Ok(())
        })
    }
}
