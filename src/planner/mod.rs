pub mod compatibility;
pub mod constants;
pub mod generator;
pub mod sampling;

pub use compatibility::{Condition, DEFAULT_RULES, Rule, RuleSet};
pub use constants::*;
pub use generator::{GeneratorConfig, MenuSampler, generate_menu};
pub use sampling::{CumulativeSampler, ExpandedSampler, Strategy, WeightedSampler};
