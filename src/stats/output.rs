use std::path::Path;

use crate::error::Result;
use crate::stats::distribution::StatsReport;

/// Write the per-item frequency table to a CSV file.
pub fn write_csv(report: &StatsReport, path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record(["course", "item", "expected", "observed", "deviation"])?;

    for category in &report.categories {
        for item in &category.items {
            wtr.write_record([
                category.course.label().to_string(),
                item.name.clone(),
                format!("{:.4}", item.expected),
                format!("{:.4}", item.observed),
                format!("{:.4}", item.deviation()),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}

/// Print the report to stdout.
pub fn print_report(report: &StatsReport) {
    println!("\n=== Distribution ({:?} strategy) ===", report.strategy);

    for category in &report.categories {
        println!(
            "\n{} ({} draws, max deviation {:.4})",
            category.course.label(),
            category.samples,
            category.max_deviation()
        );

        let width = category
            .items
            .iter()
            .map(|i| i.name.len())
            .max()
            .unwrap_or(10);

        for item in &category.items {
            println!(
                "  {:<width$}  expected {:>6.2}%  observed {:>6.2}%",
                item.name,
                item.expected * 100.0,
                item.observed * 100.0,
                width = width
            );
        }
    }

    println!();
    println!("--- Rules ---");
    println!(
        "Acceptance rate: {:.2}% of raw candidates are digestible",
        report.acceptance_rate * 100.0
    );
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;
    use crate::planner::sampling::Strategy;
    use crate::stats::distribution::{CategoryReport, ItemFrequency};
    use tempfile::NamedTempFile;

    #[test]
    fn test_write_csv() {
        let report = StatsReport {
            strategy: Strategy::Cumulative,
            categories: vec![CategoryReport {
                course: Course::Main,
                samples: 10,
                items: vec![ItemFrequency {
                    name: "chicken".to_string(),
                    expected: 0.3,
                    observed: 0.4,
                }],
            }],
            acceptance_rate: 1.0,
        };

        let file = NamedTempFile::new().unwrap();
        write_csv(&report, file.path()).unwrap();

        let content = std::fs::read_to_string(file.path()).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "course,item,expected,observed,deviation");
        assert_eq!(lines[1], "Main course,chicken,0.3000,0.4000,0.1000");
    }
}
