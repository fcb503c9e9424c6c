use std::path::Path;

use dialoguer::Confirm;

use crate::error::Result;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Decide whether `path` may be written.
///
/// Missing files and `assume_yes` pass straight through; otherwise the user is asked.
pub fn confirm_overwrite(path: &Path, assume_yes: bool) -> Result<bool> {
    if assume_yes || !path.exists() {
        return Ok(true);
    }
    prompt_yes_no(&format!("{} already exists. Overwrite?", path.display()), false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_needs_no_prompt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("menus.csv");
        assert!(confirm_overwrite(&path, false).unwrap());
    }

    #[test]
    fn test_assume_yes_skips_prompt() {
        let file = NamedTempFile::new().unwrap();
        assert!(confirm_overwrite(file.path(), true).unwrap());
    }
}
