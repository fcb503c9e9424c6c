use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::models::Menu;

/// One exported row: a menu with its 1-based day number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuRecord {
    pub day: usize,
    pub main: String,
    pub staple: String,
    pub snack: String,
}

impl MenuRecord {
    fn from_menu(day: usize, menu: &Menu) -> Self {
        Self {
            day,
            main: menu.main().to_string(),
            staple: menu.staple().to_string(),
            snack: menu.snack().to_string(),
        }
    }
}

fn records(menus: &[Menu]) -> impl Iterator<Item = MenuRecord> + '_ {
    menus
        .iter()
        .enumerate()
        .map(|(i, menu)| MenuRecord::from_menu(i + 1, menu))
}

/// Write menus to a CSV file with a `day,main,staple,snack` header.
pub fn write_menus_csv(menus: &[Menu], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for record in records(menus) {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write menus to a JSON file as an array of day records.
pub fn write_menus_json(menus: &[Menu], path: &Path) -> Result<()> {
    let rows: Vec<MenuRecord> = records(menus).collect();
    let mut file = File::create(path)?;
    file.write_all(serde_json::to_string_pretty(&rows)?.as_bytes())?;
    Ok(())
}
