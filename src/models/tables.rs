use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::models::{Course, WeightedCategory};
use crate::planner::compatibility::RuleSet;
use crate::planner::constants::SUGGESTION_THRESHOLD;

/// The three weighted categories plus the rules that filter their combinations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuTables {
    pub mains: WeightedCategory,
    pub staples: WeightedCategory,
    pub snacks: WeightedCategory,

    #[serde(default)]
    pub rules: RuleSet,
}

/// A rule condition naming an item its course never offers.
#[derive(Debug, Clone, PartialEq)]
pub struct UnknownRuleItem {
    pub course: Course,
    pub item: String,
    /// Closest existing item name, if any is similar enough.
    pub suggestion: Option<String>,
}

impl MenuTables {
    pub fn new(
        mains: WeightedCategory,
        staples: WeightedCategory,
        snacks: WeightedCategory,
        rules: RuleSet,
    ) -> Self {
        Self {
            mains,
            staples,
            snacks,
            rules,
        }
    }

    /// Category for the given course.
    pub fn category(&self, course: Course) -> &WeightedCategory {
        match course {
            Course::Main => &self.mains,
            Course::Staple => &self.staples,
            Course::Snack => &self.snacks,
        }
    }

    /// Find rule conditions that reference items missing from their course.
    ///
    /// A positive condition on a missing item can never hold, so the rule is dead.
    pub fn unknown_rule_items(&self) -> Vec<UnknownRuleItem> {
        let mut unknown: Vec<UnknownRuleItem> = Vec::new();

        for condition in self.rules.conditions() {
            let category = self.category(condition.course);
            if category.contains(&condition.item) {
                continue;
            }
            if unknown
                .iter()
                .any(|u| u.course == condition.course && u.item == condition.item)
            {
                continue;
            }

            let target = condition.item.to_lowercase();
            let suggestion = category
                .names()
                .map(|name| (name, jaro_winkler(&name.to_lowercase(), &target)))
                .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
                .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
                .map(|(name, _)| name.to_string());

            unknown.push(UnknownRuleItem {
                course: condition.course,
                item: condition.item.clone(),
                suggestion,
            });
        }

        unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::constants::default_tables;

    #[test]
    fn test_default_tables_have_no_unknown_rule_items() {
        let tables = default_tables();
        assert!(tables.unknown_rule_items().is_empty());
    }

    #[test]
    fn test_misspelled_item_gets_suggestion() {
        let mut tables = default_tables();
        tables.staples = WeightedCategory::from_pairs(&[
            ("rice", 0.2),
            ("past", 0.04),
            ("potato", 0.01),
            ("vegs", 0.6),
        ])
        .unwrap();

        let unknown = tables.unknown_rule_items();
        assert_eq!(unknown.len(), 1);
        assert_eq!(unknown[0].course, Course::Staple);
        assert_eq!(unknown[0].item, "pasta");
        assert_eq!(unknown[0].suggestion.as_deref(), Some("past"));
    }

    #[test]
    fn test_unrelated_item_has_no_suggestion() {
        let mut tables = default_tables();
        tables.mains = WeightedCategory::from_pairs(&[("tofu", 1.0)]).unwrap();

        let unknown = tables.unknown_rule_items();
        let fish = unknown.iter().find(|u| u.item == "fish").unwrap();
        assert_eq!(fish.course, Course::Main);
        assert!(fish.suggestion.is_none());
    }
}
