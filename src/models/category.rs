use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

/// One of the three slots a menu is made of.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Course {
    Main,
    Staple,
    Snack,
}

impl Course {
    /// All courses in menu order.
    pub const ALL: [Course; 3] = [Course::Main, Course::Staple, Course::Snack];

    /// Human-readable slot label used in rendered menus.
    pub fn label(self) -> &'static str {
        match self {
            Course::Main => "Main course",
            Course::Staple => "Side dish",
            Course::Snack => "Snacks",
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A named item with its relative weight.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedItem {
    pub name: String,
    pub weight: f64,
}

impl WeightedItem {
    pub fn new(name: impl Into<String>, weight: f64) -> Self {
        Self {
            name: name.into(),
            weight,
        }
    }
}

/// An ordered set of items with non-negative relative weights.
///
/// Item order is preserved; the cumulative sampler relies on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<WeightedItem>", into = "Vec<WeightedItem>")]
pub struct WeightedCategory {
    items: Vec<WeightedItem>,
    total: f64,
}

impl WeightedCategory {
    /// Build a category, rejecting empty, duplicate, negative, zero-sum or overflowing tables.
    pub fn new(items: Vec<WeightedItem>) -> Result<Self> {
        if items.is_empty() {
            return Err(MenuError::InvalidCategory(
                "category has no items".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.name.clone()) {
                return Err(MenuError::InvalidCategory(format!(
                    "duplicate item '{}'",
                    item.name
                )));
            }
            if !item.weight.is_finite() || item.weight < 0.0 {
                return Err(MenuError::InvalidCategory(format!(
                    "item '{}' has invalid weight {}",
                    item.name, item.weight
                )));
            }
        }

        let total: f64 = items.iter().map(|i| i.weight).sum();
        if total <= 0.0 {
            return Err(MenuError::InvalidCategory(
                "weights sum to zero".to_string(),
            ));
        }
        if !total.is_finite() {
            return Err(MenuError::InvalidCategory(
                "weights sum is not finite".to_string(),
            ));
        }

        Ok(Self { items, total })
    }

    /// Build a category from `(name, weight)` pairs.
    pub fn from_pairs(pairs: &[(&str, f64)]) -> Result<Self> {
        Self::new(
            pairs
                .iter()
                .map(|(name, weight)| WeightedItem::new(*name, *weight))
                .collect(),
        )
    }

    pub fn items(&self) -> &[WeightedItem] {
        &self.items
    }

    /// Sum of all weights. Always positive.
    pub fn total_weight(&self) -> f64 {
        self.total
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|i| i.name == name)
    }

    /// Expected share of draws for an item (`weight / total`), 0.0 if absent.
    pub fn probability(&self, name: &str) -> f64 {
        self.items
            .iter()
            .find(|i| i.name == name)
            .map(|i| i.weight / self.total)
            .unwrap_or(0.0)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|i| i.name.as_str())
    }
}

impl TryFrom<Vec<WeightedItem>> for WeightedCategory {
    type Error = MenuError;

    fn try_from(items: Vec<WeightedItem>) -> Result<Self> {
        Self::new(items)
    }
}

impl From<WeightedCategory> for Vec<WeightedItem> {
    fn from(category: WeightedCategory) -> Self {
        category.items
    }
}
