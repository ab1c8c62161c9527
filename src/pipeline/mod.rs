use std::future::Future;
use std::pin::Pin;
use std::time::Instant;

use anyhow::Result;
use tracing::{info, warn};

use crate::ctx::Ctx;

pub mod stage0_validate;
pub mod stage1_scaffold;
pub mod stage2_image;
pub mod stage3_highlight;
pub mod stage4_clinical;
pub mod stage5_image_model;
pub mod stage6_combine;
pub mod stage7_output;

pub type StageFuture<'a> = Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>>;

pub trait Stage: Send + Sync {
    fn name(&self) -> &'static str;
    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a>;
}

pub struct Pipeline {
    stages: Vec<Box<dyn Stage>>,
}

impl Pipeline {
    pub fn new(stages: Vec<Box<dyn Stage>>) -> Self {
        Self { stages }
    }

    /// Every stage of a full analysis, in order.
    pub fn analysis() -> Self {
        Self::new(vec![
            Box::new(stage0_validate::Stage0Validate::new()),
            Box::new(stage1_scaffold::Stage1Scaffold::new()),
            Box::new(stage2_image::Stage2Image::new()),
            Box::new(stage3_highlight::Stage3Highlight::new()),
            Box::new(stage4_clinical::Stage4Clinical::new()),
            Box::new(stage5_image_model::Stage5ImageModel::new()),
            Box::new(stage6_combine::Stage6Combine::new()),
            Box::new(stage7_output::Stage7Output::new()),
        ])
    }

    /// Input checks only; nothing is scored or written.
    pub fn validation() -> Self {
        Self::new(vec![
            Box::new(stage0_validate::Stage0Validate::new()),
            Box::new(stage2_image::Stage2Image::new()),
        ])
    }

    pub async fn run(&self, ctx: &mut Ctx) -> Result<()> {
        for stage in &self.stages {
            let start = Instant::now();
            info!(stage = stage.name(), "stage started");
            if let Err(err) = stage.run(ctx).await {
                let elapsed_ms = start.elapsed().as_millis();
                warn!(
                    stage = stage.name(),
                    elapsed_ms = elapsed_ms as u64,
                    "stage failed"
                );
                return Err(err);
            }
            let elapsed_ms = start.elapsed().as_millis();
            info!(
                stage = stage.name(),
                elapsed_ms = elapsed_ms as u64,
                "stage finished"
            );
        }
        Ok(())
    }
}
