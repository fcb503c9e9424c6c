mod export;
mod tables;

pub use export::{MenuRecord, write_menus_csv, write_menus_json};
pub use tables::{load_tables, save_tables};
