use anyhow::Context;
use tracing::info;

use crate::ctx::Ctx;
use crate::io::{json_writer, ppm, report};
use crate::pipeline::{Stage, StageFuture};

pub struct Stage7Output;

impl Stage7Output {
    pub fn new() -> Self {
        Self
    }
}

impl Stage for Stage7Output {
    fn name(&self) -> &'static str {
        "stage7_output"
    }

    fn run<'a>(&'a self, ctx: &'a mut Ctx) -> StageFuture<'a> {
        Box::pin(async move {
            let outcome = ctx.outcome()?;
            let text = report::render_report(&ctx.record, &outcome, &ctx.generated_at);
            std::fs::write(&ctx.output.report_path, &text).with_context(|| {
                format!("failed to write {}", ctx.output.report_path.display())
            })?;
            ctx.report_text = Some(text);

            if ctx.write_json {
                json_writer::write_json(&ctx.output.json_path, ctx)?;
            }
            if ctx.write_processed {
                if let Some(processed) = &ctx.processed {
                    ppm::write_ppm(&ctx.output.processed_path, processed)?;
                }
            }

            info!(
                report = %ctx.output.report_path.display(),
                "stage7_output_ready"
            );
            anyhow::Ok(())
        })
    }
}
