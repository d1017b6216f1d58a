//! Command-line interface components.

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "radiomobile_parser")]
#[command(about = "Parse a Radio Mobile report.txt and dump the topology model")]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
    /// Path to the Radio Mobile report.txt file
    #[arg(value_name = "REPORT_PATH")]
    pub report_path: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}
