//! Catalog loading summary

use crate::cli::{Cli, SummaryArgs};
use anyhow::Context;
use celestial_athyg::{AthygCatalog, Loader, ProgressObserver};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::{Duration, Instant};

struct BarObserver {
    bar: ProgressBar,
    verbose: bool,
}

impl ProgressObserver for BarObserver {
    fn source_started(&self, path: &Path) {
        let name = path.file_name().unwrap_or_default().to_string_lossy();
        self.bar.set_message(name.into_owned());
    }

    fn source_finished(&self, path: &Path, records: usize) {
        if self.verbose {
            self.bar
                .println(format!("{:?}: {} records", path.file_name().unwrap_or_default(), records));
        }
        self.bar.inc(1);
    }
}

pub fn run(args: &SummaryArgs, cli: &Cli) -> anyhow::Result<()> {
    configure_thread_pool(args.threads);
    print_plan(args, cli);

    let bar = create_progress_bar(args.paths.len() as u64);
    let loader = Loader::new()
        .delimiter(args.delimiter)
        .parallel(!args.sequential)
        .with_observer(BarObserver {
            bar: bar.clone(),
            verbose: cli.verbose,
        });

    let start = Instant::now();
    let catalog = loader
        .load_version(args.version, &args.paths)
        .with_context(|| format!("Failed to load ATHYG {} catalog", args.version))?;
    bar.finish_with_message("Done");

    print_summary(&catalog, start.elapsed());
    Ok(())
}

fn resolve_threads(threads: usize) -> usize {
    if threads == 0 {
        std::thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
    } else {
        threads
    }
}

fn configure_thread_pool(threads: usize) {
    rayon::ThreadPoolBuilder::new()
        .num_threads(resolve_threads(threads))
        .build_global()
        .ok();
}

fn print_plan(args: &SummaryArgs, cli: &Cli) {
    println!("=== ATHYG {} Summary ===", args.version);
    println!("Files: {}", args.paths.len());
    println!("Delimiter: {:?}", args.delimiter);
    if args.sequential {
        println!("Mode: sequential");
    } else {
        println!("Mode: parallel ({} threads)", resolve_threads(args.threads));
    }
    println!("Verbose: {}", cli.verbose);
    println!();
}

fn create_progress_bar(total: u64) -> ProgressBar {
    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("#>-"),
    );
    pb
}

fn print_summary(catalog: &AthygCatalog, elapsed: Duration) {
    let total = catalog.len();
    println!("\n=== Summary ===");
    println!("Records: {}", total);
    println!("Load time: {:.2?}", elapsed);
    println!();
    println!("{:>4}  {:<10}  {:<8}  {:>10}  {:>7}", "pos", "name", "kind", "filled", "rate");
    for (field, filled) in catalog.fields().iter().zip(catalog.column_fill()) {
        println!(
            "{:>4}  {:<10}  {:<8}  {:>10}  {:>6.1}%",
            field.position,
            field.name,
            field.kind,
            filled,
            fill_rate(filled, total)
        );
    }
}

fn fill_rate(filled: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        filled as f64 * 100.0 / total as f64
    }
}
