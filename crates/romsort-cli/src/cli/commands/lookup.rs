//! `romsort lookup <id>` – resolve metadata for one identifier.
//!
//! Debug aid for the page-schema dependency: when the remote markup
//! changes, this shows what (if anything) the selectors still find.

use anyhow::Result;
use romsort_core::config::RomsortConfig;
use romsort_core::metadata::{MetadataSource, RomstationClient};

pub fn run_lookup(cfg: &RomsortConfig, id: &str) -> Result<()> {
    let client = RomstationClient::new(&cfg.base_metadata_url)?;
    let meta = client.lookup(id)?;
    println!("title:   {}", meta.title);
    println!("console: {}", meta.console);
    Ok(())
}
