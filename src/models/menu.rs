use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Course;
use crate::planner::compatibility::DEFAULT_RULES;

/// One day's menu: a main dish, a side dish and a snack.
///
/// Immutable once built; fields are only readable through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Menu {
    main: String,
    staple: String,
    snack: String,
}

impl Menu {
    pub fn new(main: impl Into<String>, staple: impl Into<String>, snack: impl Into<String>) -> Self {
        Self {
            main: main.into(),
            staple: staple.into(),
            snack: snack.into(),
        }
    }

    pub fn main(&self) -> &str {
        &self.main
    }

    pub fn staple(&self) -> &str {
        &self.staple
    }

    pub fn snack(&self) -> &str {
        &self.snack
    }

    /// Item chosen for the given course.
    pub fn item(&self, course: Course) -> &str {
        match course {
            Course::Main => &self.main,
            Course::Staple => &self.staple,
            Course::Snack => &self.snack,
        }
    }

    /// Check the menu against the built-in compatibility rules.
    pub fn is_digestible(&self) -> bool {
        DEFAULT_RULES.is_digestible(self)
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} | {} | {}", self.main, self.staple, self.snack)
    }
}
