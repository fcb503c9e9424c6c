use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::models::{Course, Menu};

/// Built-in rule set, shared by `Menu::is_digestible`.
pub static DEFAULT_RULES: LazyLock<RuleSet> = LazyLock::new(RuleSet::default);

/// A test on one course of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub course: Course,
    pub item: String,

    /// Hold when the course is anything but `item`.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub negate: bool,
}

impl Condition {
    pub fn is(course: Course, item: impl Into<String>) -> Self {
        Self {
            course,
            item: item.into(),
            negate: false,
        }
    }

    pub fn is_not(course: Course, item: impl Into<String>) -> Self {
        Self {
            course,
            item: item.into(),
            negate: true,
        }
    }

    pub fn holds(&self, menu: &Menu) -> bool {
        (menu.item(self.course) == self.item) != self.negate
    }
}

/// Rejects a menu when all of its conditions hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    pub conditions: Vec<Condition>,
}

impl Rule {
    pub fn new(conditions: Vec<Condition>) -> Self {
        Self { conditions }
    }

    pub fn rejects(&self, menu: &Menu) -> bool {
        self.conditions.iter().all(|c| c.holds(menu))
    }
}

/// A set of independent reject rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet {
    rules: Vec<Rule>,
}

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// A rule set that accepts every menu.
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    /// True when no rule rejects the menu.
    pub fn is_digestible(&self, menu: &Menu) -> bool {
        !self.rules.iter().any(|r| r.rejects(menu))
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.rules.iter().flat_map(|r| r.conditions.iter())
    }
}

impl Default for RuleSet {
    fn default() -> Self {
        Self::new(vec![
            Rule::new(vec![
                Condition::is(Course::Main, "fish"),
                Condition::is(Course::Staple, "pasta"),
            ]),
            Rule::new(vec![
                Condition::is(Course::Staple, "pasta"),
                Condition::is(Course::Snack, "bread"),
            ]),
            Rule::new(vec![
                Condition::is(Course::Main, "pork"),
                Condition::is(Course::Staple, "potato"),
                Condition::is_not(Course::Snack, "none"),
            ]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_rejections() {
        let rules = RuleSet::default();
        assert!(!rules.is_digestible(&Menu::new("fish", "pasta", "none")));
        assert!(!rules.is_digestible(&Menu::new("beef", "pasta", "bread")));
        assert!(!rules.is_digestible(&Menu::new("pork", "potato", "bread")));
        assert!(!rules.is_digestible(&Menu::new("pork", "potato", "cheese")));
    }

    #[test]
    fn test_builtin_acceptances() {
        let rules = RuleSet::default();
        assert!(rules.is_digestible(&Menu::new("chicken", "rice", "bread")));
        assert!(rules.is_digestible(&Menu::new("pork", "potato", "none")));
        assert!(rules.is_digestible(&Menu::new("fish", "rice", "bread")));
        assert!(rules.is_digestible(&Menu::new("beef", "pasta", "cheese")));
    }

    #[test]
    fn test_empty_rule_set_accepts_everything() {
        assert!(RuleSet::empty().is_digestible(&Menu::new("fish", "pasta", "bread")));
    }

    #[test]
    fn test_rule_json_shape() {
        let json = r#"[{"conditions": [
            {"course": "main", "item": "pork"},
            {"course": "snack", "item": "none", "negate": true}
        ]}]"#;
        let rules: RuleSet = serde_json::from_str(json).unwrap();
        assert_eq!(rules.rules().len(), 1);
        assert!(!rules.is_digestible(&Menu::new("pork", "rice", "bread")));
        assert!(rules.is_digestible(&Menu::new("pork", "rice", "none")));
    }
}
