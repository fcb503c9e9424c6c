pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod stats;
pub mod storage;

pub use error::{MenuError, Result};
pub use models::{Menu, MenuTables, WeightedCategory};
