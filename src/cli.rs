use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::scores::{ClinicalRecord, Gender};

#[derive(Debug, Parser)]
#[command(
    name = "lungscan-insight",
    version,
    about = "Lung scan insight: clinical + image scoring with verdict arbitration"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Run(RunArgs),
    Validate(ValidateArgs),
}

#[derive(Debug, Args)]
pub struct ClinicalArgs {
    #[arg(long, help = "Patient age in years (1-120)")]
    pub age: u32,

    #[arg(
        long,
        value_parser = parse_gender,
        default_value = "female",
        help = "female|male, or the form flag 0|1"
    )]
    pub gender: Gender,

    #[arg(long, default_value_t = false)]
    pub smoking: bool,

    #[arg(long, default_value_t = false)]
    pub cough: bool,

    #[arg(long, default_value_t = false, help = "Shortness of breath")]
    pub breathless: bool,

    #[arg(long, default_value_t = false)]
    pub chest_pain: bool,
}

impl ClinicalArgs {
    pub fn to_record(&self) -> ClinicalRecord {
        ClinicalRecord {
            age: self.age,
            gender: self.gender,
            smoking_history: self.smoking,
            chronic_cough: self.cough,
            shortness_of_breath: self.breathless,
            chest_pain: self.chest_pain,
        }
    }
}

#[derive(Debug, Args)]
pub struct RunArgs {
    #[arg(long, help = "Lung scan image (PPM P6/P3, optionally .gz)")]
    pub image: PathBuf,

    #[arg(long)]
    pub out: PathBuf,

    #[command(flatten)]
    pub clinical: ClinicalArgs,

    #[arg(long, default_value_t = false)]
    pub json: bool,

    #[arg(long, default_value_t = false, help = "Write the highlighted image")]
    pub save_processed: bool,

    #[arg(long, default_value_t = false, help = "Score the raw image")]
    pub no_highlight: bool,

    #[arg(long, help = "Seed for highlight placement")]
    pub seed: Option<u64>,

    #[arg(long, default_value_t = false)]
    pub simulate_latency: bool,
}

#[derive(Debug, Args)]
pub struct ValidateArgs {
    #[arg(long)]
    pub image: PathBuf,

    #[command(flatten)]
    pub clinical: ClinicalArgs,
}

pub fn parse_gender(raw: &str) -> Result<Gender, String> {
    let flag = match raw.trim().to_ascii_lowercase().as_str() {
        "female" | "f" => 0,
        "male" | "m" => 1,
        other => other
            .parse::<u8>()
            .map_err(|_| format!("unknown gender '{raw}' (expected female, male, 0 or 1)"))?,
    };
    Gender::from_flag(flag).ok_or_else(|| format!("gender flag must be 0 or 1, got {flag}"))
}
