use rand::RngCore;

use crate::error::Result;
use crate::models::{Course, MenuTables, WeightedCategory};
use crate::planner::generator::MenuSampler;
use crate::planner::sampling::Strategy;

/// Expected vs observed share of one item.
#[derive(Debug, Clone)]
pub struct ItemFrequency {
    pub name: String,
    pub expected: f64,
    pub observed: f64,
}

impl ItemFrequency {
    /// Absolute gap between observed and expected share.
    pub fn deviation(&self) -> f64 {
        (self.observed - self.expected).abs()
    }
}

/// Frequencies for every item of one category.
#[derive(Debug, Clone)]
pub struct CategoryReport {
    pub course: Course,
    pub samples: usize,
    pub items: Vec<ItemFrequency>,
}

impl CategoryReport {
    /// Largest deviation across items.
    pub fn max_deviation(&self) -> f64 {
        self.items
            .iter()
            .map(ItemFrequency::deviation)
            .fold(0.0, f64::max)
    }
}

/// Frequencies for all three categories plus the rule acceptance rate.
#[derive(Debug, Clone)]
pub struct StatsReport {
    pub strategy: Strategy,
    pub categories: Vec<CategoryReport>,
    pub acceptance_rate: f64,
}

/// Draw `samples` items from one category and tally the shares.
///
/// `trials` sizes the expanded table and is ignored by the cumulative strategy.
pub fn measure_category(
    course: Course,
    category: &WeightedCategory,
    strategy: Strategy,
    trials: usize,
    samples: usize,
    rng: &mut dyn RngCore,
) -> Result<CategoryReport> {
    let sampler = strategy.build(category, trials)?;

    let mut counts = vec![0usize; category.len()];
    for _ in 0..samples {
        counts[sampler.sample_index(rng)] += 1;
    }

    let items = category
        .items()
        .iter()
        .zip(counts)
        .map(|(item, count)| ItemFrequency {
            name: item.name.clone(),
            expected: item.weight / category.total_weight(),
            observed: if samples > 0 {
                count as f64 / samples as f64
            } else {
                0.0
            },
        })
        .collect();

    Ok(CategoryReport {
        course,
        samples,
        items,
    })
}

/// Share of raw candidate menus that pass the compatibility rules.
pub fn acceptance_rate(
    tables: &MenuTables,
    strategy: Strategy,
    trials: usize,
    samples: usize,
    rng: &mut dyn RngCore,
) -> Result<f64> {
    if samples == 0 {
        return Ok(0.0);
    }

    let sampler = MenuSampler::new(tables, strategy, trials)?;
    let accepted = (0..samples)
        .filter(|_| tables.rules.is_digestible(&sampler.draw(rng)))
        .count();

    Ok(accepted as f64 / samples as f64)
}

/// Measure every category and the acceptance rate.
pub fn measure_tables(
    tables: &MenuTables,
    strategy: Strategy,
    trials: usize,
    samples: usize,
    rng: &mut dyn RngCore,
) -> Result<StatsReport> {
    let mut categories = Vec::with_capacity(Course::ALL.len());
    for course in Course::ALL {
        categories.push(measure_category(
            course,
            tables.category(course),
            strategy,
            trials,
            samples,
            rng,
        )?);
    }

    let acceptance_rate = acceptance_rate(tables, strategy, trials, samples, rng)?;

    tracing::debug!(samples, acceptance_rate, "measured tables");

    Ok(StatsReport {
        strategy,
        categories,
        acceptance_rate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::compatibility::RuleSet;
    use crate::planner::constants::default_tables;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_measure_category_shares_sum_to_one() {
        let tables = default_tables();
        let mut rng = StdRng::seed_from_u64(5);
        let report = measure_category(
            Course::Snack,
            &tables.snacks,
            Strategy::Cumulative,
            0,
            2000,
            &mut rng,
        )
        .unwrap();

        let observed: f64 = report.items.iter().map(|i| i.observed).sum();
        let expected: f64 = report.items.iter().map(|i| i.expected).sum();
        assert!((observed - 1.0).abs() < 1e-9);
        assert!((expected - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_acceptance_rate_without_rules() {
        let mut tables = default_tables();
        tables.rules = RuleSet::empty();
        let mut rng = StdRng::seed_from_u64(5);
        let rate = acceptance_rate(&tables, Strategy::Cumulative, 0, 500, &mut rng).unwrap();
        assert_eq!(rate, 1.0);
    }

    #[test]
    fn test_zero_samples() {
        let tables = default_tables();
        let mut rng = StdRng::seed_from_u64(5);
        let report = measure_tables(&tables, Strategy::Cumulative, 0, 0, &mut rng).unwrap();
        assert_eq!(report.acceptance_rate, 0.0);
        assert!(report.categories.iter().all(|c| c.max_deviation() <= 1.0));
    }
}
