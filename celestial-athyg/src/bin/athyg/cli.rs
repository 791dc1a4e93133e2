//! CLI argument definitions for athyg

use celestial_athyg::SchemaVersion;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "athyg")]
#[command(about = "Inspect ATHYG star catalog files")]
#[command(version)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the column layout of an ATHYG release
    Describe(DescribeArgs),

    /// Load catalog files and report record count and column fill rates
    Summary(SummaryArgs),
}

#[derive(Parser)]
pub struct DescribeArgs {
    /// ATHYG release (v1, v2, v3)
    pub version: SchemaVersion,
}

#[derive(Parser)]
pub struct SummaryArgs {
    /// ATHYG release of the input files (v1, v2, v3)
    #[arg(long)]
    pub version: SchemaVersion,

    /// Catalog files (.csv or .csv.gz), concatenated in the order given
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Field delimiter
    #[arg(long, default_value = ",")]
    pub delimiter: char,

    /// Parse files one at a time
    #[arg(long)]
    pub sequential: bool,

    /// Number of threads for parallel parsing (0 = all cores)
    #[arg(short, long, default_value = "0")]
    pub threads: usize,
}
