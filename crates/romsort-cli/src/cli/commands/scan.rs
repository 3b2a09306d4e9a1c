//! `romsort scan` – list candidate archives without touching anything.

use anyhow::Result;
use romsort_core::config::RomsortConfig;
use romsort_core::walker;

pub fn run_scan(cfg: &RomsortConfig) -> Result<()> {
    let candidates = walker::find_candidates(&cfg.source_root, &cfg.file_extension)?;
    if candidates.is_empty() {
        println!("No .{} archives under {}.", cfg.file_extension, cfg.source_root.display());
    } else {
        for path in &candidates {
            println!("{}", path.display());
        }
        println!("{} archive(s).", candidates.len());
    }
    Ok(())
}
