use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

use crate::ctx::Ctx;
use crate::image::highlight::highlight_regions;
use crate::latency::Latency;
use crate::pipeline::{Stage, StageFuture};

pub struct Stage3Highlight;

impl Stage3Highlight {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage3Highlight {
    fn name(&self) -> &'static str {
        "stage3_highlight"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            if !ctx.highlight {
                info!("highlight_skipped");
                return Ok(());
            }
            let mut processed = ctx
                .image
                .clone()
                .ok_or_else(|| anyhow::anyhow!("input image missing"))?;

            Latency::pause(ctx.latency.highlight, "highlight").await;

            let mut rng = match ctx.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let regions = highlight_regions(&mut processed, &mut rng);
            info!(regions = regions.len(), "highlight_ready");
            ctx.regions = regions;
            ctx.processed = Some(processed);
            anyhow::Ok(())
        })
    }
}
