use anyhow::{Context, Result};

use crate::ctx::Ctx;
use crate::scores::ModelOpinion;

pub fn format_summary(ctx: &Ctx) -> Result<String> {
    let outcome = ctx.outcome()?;
    let image = ctx.image.as_ref().context("input image missing")?;

    let mut out = String::new();
    out.push_str(&format!("lungscan-insight v{}\n", ctx.tool_version));
    out.push_str(&format!(
        "Input: {}x{} image, age={}\n",
        image.width, image.height, ctx.record.age
    ));
    out.push_str(&format!(
        "Clinical: {} (points={})\n",
        opinion_text(&outcome.clinical.opinion),
        outcome.clinical.points
    ));
    out.push_str(&format!(
        "Image: {} (red={:.2}%)\n",
        opinion_text(&outcome.image.opinion),
        outcome.image.red_percentage
    ));
    out.push_str(&format!(
        "Decision: {} ({}%)\n",
        outcome.verdict.label, outcome.verdict.confidence
    ));
    Ok(out)
}

fn opinion_text(o: &ModelOpinion) -> String {
    let side = if o.predicted_positive {
        "positive"
    } else {
        "negative"
    };
    format!("{} {}%", side, o.confidence)
}
