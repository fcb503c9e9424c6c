mod category;
mod menu;
mod tables;

pub use category::{Course, WeightedCategory, WeightedItem};
pub use menu::Menu;
pub use tables::{MenuTables, UnknownRuleItem};
