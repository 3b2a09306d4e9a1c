pub mod config;
pub mod logging;

pub mod cleanup;
pub mod metadata;
pub mod pipeline;
pub mod relocate;
pub mod sanitize;
pub mod walker;
