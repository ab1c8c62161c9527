use anyhow::{Result, bail};
use tracing::info;

use crate::ctx::Ctx;
use crate::pipeline::{Stage, StageFuture};
use crate::scores::ClinicalRecord;

pub const MAX_AGE: u32 = 120;

pub struct Stage0Validate;

impl Stage0Validate {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage0Validate {
    fn name(&self) -> &'static str {
        "stage0_validate"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            if !ctx.image_path.is_file() {
                bail!(
                    "Image required: {} not found. Please upload a lung scan image to proceed.",
                    ctx.image_path.display()
                );
            }
            validate_record(&ctx.record)?;
            info!(age = ctx.record.age, "inputs_valid");
            anyhow::Ok(())
        })
    }
}

pub fn validate_record(record: &ClinicalRecord) -> Result<()> {
    if record.age == 0 || record.age > MAX_AGE {
        bail!(
            "Invalid age {}: please enter a valid age (1-{}).",
            record.age,
            MAX_AGE
        );
    }
    Ok(())
}
