use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use lungscan_insight::cli::{Cli, Commands, RunArgs, ValidateArgs};
use lungscan_insight::ctx::Ctx;
use lungscan_insight::io;
use lungscan_insight::latency::Latency;
use lungscan_insight::pipeline::Pipeline;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run(args) => run(args).await?,
        Commands::Validate(args) => validate(args).await?,
    }
    Ok(())
}

async fn run(args: RunArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.image,
        args.out,
        args.clinical.to_record(),
        args.json,
        env!("CARGO_PKG_VERSION"),
    );
    ctx.seed = args.seed;
    ctx.highlight = !args.no_highlight;
    ctx.write_processed = args.save_processed;
    if args.simulate_latency {
        ctx.latency = Latency::simulated();
    }

    Pipeline::analysis().run(&mut ctx).await?;

    print!("{}", io::summary::format_summary(&ctx)?);
    println!("report: {}", ctx.output.report_path.display());
    print_warnings(&ctx);
    Ok(())
}

async fn validate(args: ValidateArgs) -> Result<()> {
    let mut ctx = Ctx::new(
        args.image,
        PathBuf::from("."),
        args.clinical.to_record(),
        false,
        env!("CARGO_PKG_VERSION"),
    );
    Pipeline::validation().run(&mut ctx).await?;

    println!("lungscan-insight validate ok");
    if let Some(image) = &ctx.image {
        println!("image: {}x{}", image.width, image.height);
    }
    println!("age: {}", ctx.record.age);
    print_warnings(&ctx);
    Ok(())
}

fn print_warnings(ctx: &Ctx) {
    if !ctx.warnings.is_empty() {
        println!("warnings:");
        for warning in &ctx.warnings {
            println!("- {}", warning);
        }
    }
}
