use rand::{Rng, RngCore};

use crate::error::{MenuError, Result};
use crate::models::WeightedCategory;
use crate::planner::constants::MAX_EXPANDED_SLOTS;

/// Draws items from a weighted category.
pub trait WeightedSampler {
    /// Index into the category's items of the drawn value.
    fn sample_index(&self, rng: &mut dyn RngCore) -> usize;

    /// Category this sampler draws from.
    fn category(&self) -> &WeightedCategory;

    /// Name of the drawn item.
    fn sample<'a>(&'a self, rng: &mut dyn RngCore) -> &'a str {
        let index = self.sample_index(rng);
        &self.category().items()[index].name
    }
}

/// How a category is turned into a sampler.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strategy {
    /// Binary search over cumulative weights.
    #[default]
    Cumulative,
    /// Uniform draw from a table expanded to `round(share * n)` copies per item.
    Expanded,
}

impl Strategy {
    /// Build a sampler for `category`; `trials` only matters for `Expanded`.
    pub fn build(self, category: &WeightedCategory, trials: usize) -> Result<Box<dyn WeightedSampler>> {
        let sampler: Box<dyn WeightedSampler> = match self {
            Strategy::Cumulative => Box::new(CumulativeSampler::new(category)),
            Strategy::Expanded => Box::new(ExpandedSampler::new(category, trials)?),
        };
        Ok(sampler)
    }
}

/// Cumulative-distribution sampler. O(n) setup, O(log n) per draw.
#[derive(Debug, Clone)]
pub struct CumulativeSampler {
    category: WeightedCategory,
    cumulative: Vec<f64>,
}

impl CumulativeSampler {
    pub fn new(category: &WeightedCategory) -> Self {
        let cumulative = category
            .items()
            .iter()
            .scan(0.0, |acc, item| {
                *acc += item.weight;
                Some(*acc)
            })
            .collect();

        Self {
            category: category.clone(),
            cumulative,
        }
    }
}

impl WeightedSampler for CumulativeSampler {
    fn sample_index(&self, rng: &mut dyn RngCore) -> usize {
        let total = self.category.total_weight();
        let x = rng.gen_range(0.0..total);
        // First bucket strictly above the draw; zero-weight buckets are skipped.
        let index = self.cumulative.partition_point(|&c| c <= x);
        index.min(self.cumulative.len() - 1)
    }

    fn category(&self) -> &WeightedCategory {
        &self.category
    }
}

/// Expanded-distribution sampler: one slot per expected occurrence over `trials` draws.
///
/// Counts use each item's share of the total weight, so only relative weights matter.
#[derive(Debug, Clone)]
pub struct ExpandedSampler {
    category: WeightedCategory,
    slots: Vec<usize>,
}

impl ExpandedSampler {
    /// Fails with `InvalidCategory` when every count rounds to zero or the
    /// table would exceed `MAX_EXPANDED_SLOTS`.
    pub fn new(category: &WeightedCategory, trials: usize) -> Result<Self> {
        let total = category.total_weight();
        let counts: Vec<usize> = category
            .items()
            .iter()
            .map(|item| (item.weight / total * trials as f64).round_ties_even() as usize)
            .collect();

        let size = counts
            .iter()
            .try_fold(0usize, |acc, &count| acc.checked_add(count))
            .filter(|&size| size <= MAX_EXPANDED_SLOTS)
            .ok_or_else(|| {
                MenuError::InvalidCategory(format!(
                    "expanded table for {} trials exceeds {} slots",
                    trials, MAX_EXPANDED_SLOTS
                ))
            })?;

        let mut slots = Vec::with_capacity(size);
        for (index, count) in counts.into_iter().enumerate() {
            slots.extend(std::iter::repeat_n(index, count));
        }

        if slots.is_empty() {
            return Err(MenuError::InvalidCategory(format!(
                "every weight rounds to zero at {} trials",
                trials
            )));
        }

        tracing::debug!(
            items = category.len(),
            slots = slots.len(),
            trials,
            "built expanded sampler"
        );

        Ok(Self {
            category: category.clone(),
            slots,
        })
    }

    /// Number of slots in the flat table.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl WeightedSampler for ExpandedSampler {
    fn sample_index(&self, rng: &mut dyn RngCore) -> usize {
        self.slots[rng.gen_range(0..self.slots.len())]
    }

    fn category(&self) -> &WeightedCategory {
        &self.category
    }
}
