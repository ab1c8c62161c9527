use std::fs;

use anyhow::Context;
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::{Stage, StageFuture};

pub struct Stage1Scaffold;

impl Stage1Scaffold {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage1Scaffold {
    fn name(&self) -> &'static str {
        "stage1_scaffold"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            fs::create_dir_all(&ctx.output.out_dir).with_context(|| {
                format!("failed to create {}", ctx.output.out_dir.display())
            })?;
            info!(
                out_dir = %ctx.output.out_dir.display(),
                "output_dir_ready"
            );
            anyhow::Ok(())
        })
    }
}
