use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::models::MenuTables;

/// Load weight tables and rules from a JSON file.
///
/// Categories are validated while parsing; a degenerate table fails the load.
pub fn load_tables<P: AsRef<Path>>(path: P) -> Result<MenuTables> {
    let content = fs::read_to_string(path)?;
    let tables: MenuTables = serde_json::from_str(&content)?;
    Ok(tables)
}

/// Save weight tables and rules to a JSON file.
pub fn save_tables<P: AsRef<Path>>(path: P, tables: &MenuTables) -> Result<()> {
    let json = serde_json::to_string_pretty(tables)?;
    fs::write(path, json)?;
    Ok(())
}
