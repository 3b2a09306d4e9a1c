//! Renaming and relocating archives once their metadata is known.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Renames `path` to `new_base` in its own directory, keeping the
/// extension. `new_base` must already be filesystem-safe. Returns the new
/// path.
pub fn rename_in_place(path: &Path, new_base: &str) -> Result<PathBuf> {
    let dir = path
        .parent()
        .with_context(|| format!("{} has no parent directory", path.display()))?;

    let mut file_name = new_base.to_string();
    if let Some(ext) = path.extension().and_then(|e| e.to_str()) {
        file_name.push('.');
        file_name.push_str(ext);
    }

    let new_path = dir.join(file_name);
    fs::rename(path, &new_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            path.display(),
            new_path.display()
        )
    })?;
    Ok(new_path)
}

/// Moves `path` into `<destination_root>/<console>/`, creating the console
/// directory (and intermediates) on demand and preserving the filename.
/// Returns the final path.
///
/// An empty console name would silently target the destination root
/// itself, so it is rejected here even though the fetcher already treats
/// an unresolved console as an error.
pub fn move_to_console_dir(path: &Path, destination_root: &Path, console: &str) -> Result<PathBuf> {
    if console.trim().is_empty() {
        anyhow::bail!(
            "refusing to move {}: console name is empty",
            path.display()
        );
    }

    let file_name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;

    let console_dir = destination_root.join(console);
    fs::create_dir_all(&console_dir)
        .with_context(|| format!("failed to create {}", console_dir.display()))?;

    let final_path = console_dir.join(file_name);
    fs::rename(path, &final_path).with_context(|| {
        format!(
            "failed to move {} to {}",
            path.display(),
            final_path.display()
        )
    })?;
    Ok(final_path)
}
