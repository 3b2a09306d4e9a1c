//! CLI command handlers. Each command is in its own file.

mod lookup;
mod run;
mod sanitize;
mod scan;

pub use lookup::run_lookup;
pub use run::run_pipeline;
pub use sanitize::run_sanitize;
pub use scan::run_scan;
