use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use plat_du_jour_rs::Result;
use plat_du_jour_rs::logging::init_tracing;
use plat_du_jour_rs::planner::{DEFAULT_DAYS, DEFAULT_STATS_SAMPLES, Strategy, default_tables};
use plat_du_jour_rs::stats::{measure_tables, print_report, write_csv};
use plat_du_jour_rs::storage::load_tables;

#[derive(Parser, Debug)]
#[command(name = "menu_stats")]
#[command(about = "Compare observed dish frequencies with their weights")]
struct Args {
    /// Draws per category
    #[arg(long, default_value_t = DEFAULT_STATS_SAMPLES)]
    samples: usize,

    /// Random seed for reproducibility
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Sampling strategy
    #[arg(long, value_enum, default_value_t = Strategy::Cumulative)]
    strategy: Strategy,

    /// Trial count used to size the expanded table
    #[arg(long, default_value_t = DEFAULT_DAYS)]
    trials: usize,

    /// JSON file with weight tables and rules
    #[arg(long)]
    weights: Option<PathBuf>,

    /// Output CSV file for the frequency table
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(&args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let tables = match &args.weights {
        Some(path) => load_tables(path)?,
        None => default_tables(),
    };

    let mut rng = StdRng::seed_from_u64(args.seed);
    let report = measure_tables(&tables, args.strategy, args.trials, args.samples, &mut rng)?;

    print_report(&report);

    if let Some(path) = &args.csv {
        write_csv(&report, path)?;
        println!("Wrote frequency table to {:?}", path);
    }

    Ok(())
}
