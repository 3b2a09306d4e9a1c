//! `romsort run` – process the whole collection.

use anyhow::Result;
use romsort_core::config::RomsortConfig;
use romsort_core::metadata::RomstationClient;
use romsort_core::pipeline;

pub fn run_pipeline(cfg: &RomsortConfig) -> Result<()> {
    let client = RomstationClient::new(&cfg.base_metadata_url)?;
    let report = pipeline::run(cfg, &client)?;

    if report.processed == 0 {
        println!("No .{} archives under {}.", cfg.file_extension, cfg.source_root.display());
        return Ok(());
    }

    if report.is_success() {
        println!("All {} archive(s) processed successfully.", report.processed);
    } else {
        println!(
            "{} of {} archive(s) processed; the following failed:",
            report.succeeded(),
            report.processed
        );
        for path in &report.failed {
            println!("  {}", path.display());
        }
    }
    Ok(())
}
