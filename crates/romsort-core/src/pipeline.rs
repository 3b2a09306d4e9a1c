//! Orchestrator: discovers candidate archives and drives each one through
//! lookup → sanitize → rename → move → cleanup, isolating failures per
//! candidate.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::cleanup;
use crate::config::RomsortConfig;
use crate::metadata::MetadataSource;
use crate::relocate;
use crate::sanitize;
use crate::walker;

/// Outcome of one batch run.
#[derive(Debug)]
pub struct RunReport {
    /// Number of candidates discovered and attempted.
    pub processed: usize,
    /// Original paths of candidates that failed at any stage.
    pub failed: Vec<PathBuf>,
}

impl RunReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn succeeded(&self) -> usize {
        self.processed - self.failed.len()
    }
}

/// Runs the full batch. Only discovery is fatal; every later error is
/// recorded against its candidate and the batch continues. Completed
/// stages of a failed candidate are left as they are (no rollback).
pub fn run(cfg: &RomsortConfig, source: &dyn MetadataSource) -> Result<RunReport> {
    let candidates =
        walker::find_candidates(&cfg.source_root, &cfg.file_extension).with_context(|| {
            format!(
                "failed to discover archives under {}",
                cfg.source_root.display()
            )
        })?;
    tracing::info!(
        "found {} .{} archive(s) under {}",
        candidates.len(),
        cfg.file_extension,
        cfg.source_root.display()
    );

    let mut failed = Vec::new();
    for path in &candidates {
        if let Err(err) = process_candidate(cfg, source, path) {
            tracing::warn!("failed to process {}: {:#}", path.display(), err);
            failed.push(path.clone());
        }
    }

    Ok(RunReport {
        processed: candidates.len(),
        failed,
    })
}

/// One candidate, start to finish. The error message carries the stage via
/// per-step context.
fn process_candidate(
    cfg: &RomsortConfig,
    source: &dyn MetadataSource,
    path: &Path,
) -> Result<()> {
    let id = identifier(path)?;
    tracing::info!("processing {} (identifier {})", path.display(), id);

    let meta = source
        .lookup(id)
        .with_context(|| format!("metadata lookup for '{id}'"))?;
    tracing::debug!(title = %meta.title, console = %meta.console, "resolved metadata");

    let clean_title = sanitize::clean_file_name(&meta.title);
    let renamed = relocate::rename_in_place(path, &clean_title)
        .with_context(|| format!("renaming to '{clean_title}'"))?;
    tracing::info!("renamed {} to {}", path.display(), renamed.display());

    let final_path = relocate::move_to_console_dir(&renamed, &cfg.destination_root, &meta.console)
        .with_context(|| format!("moving into console folder '{}'", meta.console))?;
    tracing::info!("moved into {}", final_path.display());

    cleanup::remove_ancestors(path, cfg.cleanup_depth).context("cleaning up ancestors")?;

    Ok(())
}

/// The lookup key is the base filename without extension.
fn identifier(path: &Path) -> Result<&str> {
    path.file_stem()
        .and_then(|s| s.to_str())
        .with_context(|| format!("{} has no usable file stem", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifier_is_the_stem() {
        assert_eq!(identifier(Path::new("/in/a/b/12345.zip")).unwrap(), "12345");
    }

    #[test]
    fn report_success_only_when_nothing_failed() {
        let ok = RunReport {
            processed: 2,
            failed: vec![],
        };
        assert!(ok.is_success());
        assert_eq!(ok.succeeded(), 2);

        let bad = RunReport {
            processed: 2,
            failed: vec![PathBuf::from("/in/1.zip")],
        };
        assert!(!bad.is_success());
        assert_eq!(bad.succeeded(), 1);
    }
}
