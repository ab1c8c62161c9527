use std::fmt::Display;

use chrono::{DateTime, TimeZone};

use crate::scores::{AnalysisOutcome, ClinicalRecord};

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const RULE: &str = "==========================================";

/// Renders the downloadable plain-text report. Output depends only on the
/// arguments, so a fixed timestamp gives byte-identical text.
pub fn render_report<Tz>(
    record: &ClinicalRecord,
    outcome: &AnalysisOutcome,
    generated_at: &DateTime<Tz>,
) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let verdict = &outcome.verdict;

    let mut out = String::new();
    out.push_str("LUNG SCAN INSIGHT SYSTEM - ANALYSIS REPORT\n");
    out.push_str(&format!("{}\n", RULE));
    out.push_str(&format!(
        "Generated: {}\n\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));

    out.push_str("PATIENT DATA:\n");
    out.push_str("------------\n");
    out.push_str(&format!("Age: {}\n", record.age));
    out.push_str(&format!("Gender: {}\n", record.gender.as_str()));
    out.push_str(&format!(
        "Smoking History: {}\n",
        yes_no(record.smoking_history)
    ));
    out.push_str("Symptoms:\n");
    out.push_str(&format!(
        "- Chronic Cough: {}\n",
        yes_no(record.chronic_cough)
    ));
    out.push_str(&format!(
        "- Shortness of Breath: {}\n",
        yes_no(record.shortness_of_breath)
    ));
    out.push_str(&format!("- Chest Pain: {}\n\n", yes_no(record.chest_pain)));

    out.push_str("ANALYSIS RESULTS:\n");
    out.push_str("----------------\n");
    out.push_str(&format!("Final Decision: {}\n", verdict.label));
    out.push_str(&format!("Confidence: {}%\n\n", verdict.confidence));

    out.push_str("MODEL DETAILS:\n");
    out.push_str("-------------\n");
    out.push_str(&format!(
        "Image Analysis Confidence: {}%\n",
        outcome.image.opinion.confidence
    ));
    out.push_str(&format!(
        "Clinical Data Model Confidence: {}%\n\n",
        outcome.clinical.opinion.confidence
    ));

    out.push_str("RECOMMENDATION:\n");
    out.push_str("--------------\n");
    out.push_str(&format!("{}\n\n", verdict.label.recommendation()));
    out.push_str(
        "This is an automated analysis and should be reviewed by a healthcare professional.\n",
    );
    out.push_str(&format!("{}\n", RULE));
    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}
