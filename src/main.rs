use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use radiomobile_parser::cli::Args;
use radiomobile_parser::{parse_report_file, render_report};

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let report = parse_report_file(&args.report_path)
        .with_context(|| format!("failed to parse {}", args.report_path.display()))?;
    println!("{}", render_report(&report)?);
    Ok(())
}
