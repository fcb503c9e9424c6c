use rand::RngCore;

use crate::error::{MenuError, Result};
use crate::models::{Menu, MenuTables};
use crate::planner::constants::{DEFAULT_DAYS, DEFAULT_MAX_RETRIES};
use crate::planner::sampling::{Strategy, WeightedSampler};

/// Settings for one generation run.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub strategy: Strategy,
    /// Consecutive rejections allowed before `GenerationFailed`.
    pub max_retries: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            strategy: Strategy::default(),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Samplers for the three courses of one table set.
pub struct MenuSampler {
    mains: Box<dyn WeightedSampler>,
    staples: Box<dyn WeightedSampler>,
    snacks: Box<dyn WeightedSampler>,
}

impl MenuSampler {
    pub fn new(tables: &MenuTables, strategy: Strategy, trials: usize) -> Result<Self> {
        Ok(Self {
            mains: strategy.build(&tables.mains, trials)?,
            staples: strategy.build(&tables.staples, trials)?,
            snacks: strategy.build(&tables.snacks, trials)?,
        })
    }

    /// Draw one candidate menu, digestible or not.
    pub fn draw(&self, rng: &mut dyn RngCore) -> Menu {
        Menu::new(
            self.mains.sample(rng),
            self.staples.sample(rng),
            self.snacks.sample(rng),
        )
    }
}

/// Generate `days` digestible menus.
///
/// Candidates are drawn course by course and rejected candidates are
/// discarded without counting. More than `max_retries` rejections in a row
/// ends the run with `GenerationFailed`.
pub fn generate_menu(
    tables: &MenuTables,
    days: usize,
    config: &GeneratorConfig,
    rng: &mut dyn RngCore,
) -> Result<Vec<Menu>> {
    let mut menus = Vec::with_capacity(days.min(DEFAULT_DAYS));
    if days == 0 {
        return Ok(menus);
    }

    let samplers = MenuSampler::new(tables, config.strategy, days)?;

    let mut remaining = days;
    let mut rejected_in_row = 0;
    let mut rejected_total = 0;

    while remaining > 0 {
        let menu = samplers.draw(rng);

        if tables.rules.is_digestible(&menu) {
            menus.push(menu);
            remaining -= 1;
            rejected_in_row = 0;
            continue;
        }

        tracing::debug!(menu = %menu, "rejected incompatible menu");
        rejected_in_row += 1;
        rejected_total += 1;

        if rejected_in_row > config.max_retries {
            return Err(MenuError::GenerationFailed {
                produced: menus.len(),
                requested: days,
                attempts: rejected_in_row,
            });
        }
    }

    tracing::info!(
        days,
        rejected = rejected_total,
        strategy = ?config.strategy,
        "generated menus"
    );

    Ok(menus)
}
