//! Recursive directory listing via an explicit worklist.

use anyhow::{Context, Result};
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Lists every regular file at any depth under `root`.
///
/// Directories are traversed but never returned. Symlinks are resolved via
/// `fs::metadata`, so a symlinked directory is descended into. An unreadable
/// or missing directory anywhere in the tree is a hard error; no partial
/// listing is returned.
pub fn list_files(root: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut pending: VecDeque<PathBuf> = VecDeque::new();
    pending.push_back(root.to_path_buf());

    while let Some(dir) = pending.pop_front() {
        let entries = fs::read_dir(&dir)
            .with_context(|| format!("failed to read directory {}", dir.display()))?;
        for entry in entries {
            let entry =
                entry.with_context(|| format!("failed to read entry in {}", dir.display()))?;
            let path = entry.path();
            let meta = fs::metadata(&path)
                .with_context(|| format!("failed to stat {}", path.display()))?;
            if meta.is_dir() {
                pending.push_back(path);
            } else {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Lists files under `root` whose extension equals `extension` (no dot).
pub fn find_candidates(root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let all = list_files(root)?;
    Ok(all
        .into_iter()
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some(extension))
        .collect())
}
