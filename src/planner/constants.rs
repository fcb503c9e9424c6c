use crate::models::{MenuTables, WeightedCategory};
use crate::planner::compatibility::RuleSet;

/// Main courses and their relative weights.
pub const MAINS: &[(&str, f64)] = &[
    ("chicken", 0.3),
    ("beef", 0.3),
    ("fish", 0.25),
    ("pork", 0.15),
];

/// Side dishes and their relative weights.
pub const STAPLES: &[(&str, f64)] = &[
    ("rice", 0.2),
    ("buckwheat", 0.15),
    ("pasta", 0.04),
    ("potato", 0.01),
    ("vegs", 0.6),
];

/// Snacks and their relative weights. "none" means no snack that day.
pub const SNACKS: &[(&str, f64)] = &[
    ("bread", 0.1),
    ("cheese", 0.15),
    ("mayonnaise", 0.03),
    ("none", 0.72),
];

/// Days planned when no usable day count is given.
pub const DEFAULT_DAYS: usize = 365;

/// Consecutive rejected candidates tolerated before giving up.
pub const DEFAULT_MAX_RETRIES: usize = 10_000;

/// Largest flat table the expanded sampler will build.
pub const MAX_EXPANDED_SLOTS: usize = 10_000_000;

/// Draws per category used by the distribution report.
pub const DEFAULT_STATS_SAMPLES: usize = 10_000;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

/// Built-in tables with the built-in compatibility rules.
pub fn default_tables() -> MenuTables {
    MenuTables::new(
        builtin(MAINS),
        builtin(STAPLES),
        builtin(SNACKS),
        RuleSet::default(),
    )
}

fn builtin(pairs: &[(&str, f64)]) -> WeightedCategory {
    WeightedCategory::from_pairs(pairs).expect("built-in weight tables are valid")
}
