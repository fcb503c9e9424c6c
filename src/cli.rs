use std::path::PathBuf;

use clap::Parser;

use crate::planner::constants::{DEFAULT_DAYS, DEFAULT_MAX_RETRIES};
use crate::planner::sampling::Strategy;

/// Plat du jour — draws a weighted daily menu and skips incompatible combinations.
#[derive(Parser, Debug)]
#[command(name = "plat_du_jour")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Number of days to plan. Missing, unparsable or non-positive values fall back to 365.
    #[arg(allow_hyphen_values = true)]
    pub days: Option<String>,

    /// JSON file with weight tables and rules (built-in tables if omitted).
    #[arg(short, long)]
    pub weights: Option<PathBuf>,

    /// Sampling strategy.
    #[arg(long, value_enum, default_value_t = Strategy::Cumulative)]
    pub strategy: Strategy,

    /// Consecutive rejected menus tolerated before giving up.
    #[arg(long, default_value_t = DEFAULT_MAX_RETRIES)]
    pub max_retries: usize,

    /// Random seed for reproducible menus.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the generated menus as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Export the generated menus as JSON.
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write the built-in tables to this JSON file and exit.
    #[arg(long)]
    pub dump_tables: Option<PathBuf>,

    /// Overwrite existing files without asking.
    #[arg(short, long)]
    pub yes: bool,

    /// Enable debug logging.
    #[arg(short, long)]
    pub verbose: bool,
}

/// Coerce the raw day argument, falling back to the default on bad input.
pub fn parse_days(raw: Option<&str>) -> usize {
    raw.and_then(|s| s.trim().parse::<usize>().ok())
        .filter(|&days| days >= 1)
        .unwrap_or(DEFAULT_DAYS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_days() {
        assert_eq!(parse_days(Some("7")), 7);
        assert_eq!(parse_days(Some(" 30 ")), 30);
        assert_eq!(parse_days(None), DEFAULT_DAYS);
        assert_eq!(parse_days(Some("week")), DEFAULT_DAYS);
        assert_eq!(parse_days(Some("0")), DEFAULT_DAYS);
        assert_eq!(parse_days(Some("-5")), DEFAULT_DAYS);
        assert_eq!(parse_days(Some("2.5")), DEFAULT_DAYS);
    }

    #[test]
    fn test_cli_accepts_garbage_days() {
        let cli = Cli::try_parse_from(["plat_du_jour", "-3"]).unwrap();
        assert_eq!(cli.days.as_deref(), Some("-3"));

        let cli = Cli::try_parse_from(["plat_du_jour"]).unwrap();
        assert!(cli.days.is_none());
        assert_eq!(cli.strategy, Strategy::Cumulative);
        assert_eq!(cli.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "plat_du_jour",
            "14",
            "--strategy",
            "expanded",
            "--seed",
            "42",
            "--csv",
            "menus.csv",
        ])
        .unwrap();
        assert_eq!(parse_days(cli.days.as_deref()), 14);
        assert_eq!(cli.strategy, Strategy::Expanded);
        assert_eq!(cli.seed, Some(42));
        assert_eq!(cli.csv, Some(PathBuf::from("menus.csv")));
    }
}
