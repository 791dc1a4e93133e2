//! athyg: inspect ATHYG star catalog files
//!
//! Describes the column layout of each release and loads catalog files
//! through the same pipeline the library exposes.

mod cli;
mod describe;
mod summary;

use clap::Parser;
use cli::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match &cli.command {
        Commands::Describe(args) => describe::run(args),
        Commands::Summary(args) => summary::run(args, &cli),
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
