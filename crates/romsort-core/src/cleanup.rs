//! Removal of the now-empty directory levels a processed archive sat under.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Deletes `levels` ancestor directories of `path`, starting with its
/// immediate containing directory and walking upward.
///
/// Each level is removed recursively, so anything still inside it goes
/// with it. Destructive and not idempotent: once an ancestor is gone, a
/// second call over a path that shared it fails with a not-found error.
/// Callers treat that as a soft failure for the candidate.
pub fn remove_ancestors(path: &Path, levels: usize) -> Result<()> {
    let mut current = path
        .parent()
        .with_context(|| format!("{} has no parent directory", path.display()))?;

    for _ in 0..levels {
        let parent = current
            .parent()
            .with_context(|| format!("{} has no parent directory", current.display()))?;
        fs::remove_dir_all(current)
            .with_context(|| format!("failed to remove directory {}", current.display()))?;
        tracing::debug!("removed directory {}", current.display());
        current = parent;
    }

    Ok(())
}
