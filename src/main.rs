use std::path::Path;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use plat_du_jour_rs::cli::{Cli, parse_days};
use plat_du_jour_rs::error::Result;
use plat_du_jour_rs::interface::{confirm_overwrite, display_menus};
use plat_du_jour_rs::logging::init_tracing;
use plat_du_jour_rs::models::MenuTables;
use plat_du_jour_rs::planner::{GeneratorConfig, default_tables, generate_menu};
use plat_du_jour_rs::storage::{load_tables, save_tables, write_menus_csv, write_menus_json};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Some(path) = &cli.dump_tables {
        return cmd_dump_tables(path, cli.yes);
    }

    let tables = match &cli.weights {
        Some(path) => {
            let tables = load_tables(path)?;
            tracing::info!(path = %path.display(), "loaded weight tables");
            tables
        }
        None => default_tables(),
    };
    lint_rules(&tables);

    let days = parse_days(cli.days.as_deref());
    let config = GeneratorConfig {
        strategy: cli.strategy,
        max_retries: cli.max_retries,
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let menus = generate_menu(&tables, days, &config, &mut rng)?;
    display_menus(&menus);

    if let Some(path) = &cli.csv {
        if confirm_overwrite(path, cli.yes)? {
            write_menus_csv(&menus, path)?;
            tracing::info!(path = %path.display(), "wrote menus as CSV");
        }
    }

    if let Some(path) = &cli.json {
        if confirm_overwrite(path, cli.yes)? {
            write_menus_json(&menus, path)?;
            tracing::info!(path = %path.display(), "wrote menus as JSON");
        }
    }

    Ok(())
}

/// Write the built-in tables so they can be edited and passed back with `--weights`.
fn cmd_dump_tables(path: &Path, assume_yes: bool) -> Result<()> {
    if !confirm_overwrite(path, assume_yes)? {
        println!("Nothing written.");
        return Ok(());
    }

    save_tables(path, &default_tables())?;
    println!("Built-in tables saved to {}", path.display());
    Ok(())
}

/// Warn about rules that can never fire because their item is not on offer.
fn lint_rules(tables: &MenuTables) {
    for unknown in tables.unknown_rule_items() {
        match &unknown.suggestion {
            Some(suggestion) => tracing::warn!(
                course = %unknown.course,
                item = %unknown.item,
                "rule item is not in the table; did you mean '{}'?",
                suggestion
            ),
            None => tracing::warn!(
                course = %unknown.course,
                item = %unknown.item,
                "rule item is not in the table"
            ),
        }
    }
}
