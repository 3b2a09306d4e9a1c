use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Base URL the original collection's pages live under. A page is fetched
/// by appending the archive's numeric identifier.
const DEFAULT_BASE_URL: &str = "https://www.romstation.fr/games/ps2/007-bons-baisers-de-russie-r";

/// Global configuration loaded from `~/.config/romsort/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RomsortConfig {
    /// Root directory scanned for archives to organize.
    pub source_root: PathBuf,
    /// Root directory the organized `<console>/<title>` layout is built under.
    pub destination_root: PathBuf,
    /// Metadata page URL prefix; the candidate's identifier is appended.
    pub base_metadata_url: String,
    /// Archive extension of interest, without the leading dot (compared
    /// against `Path::extension`).
    pub file_extension: String,
    /// Number of directory levels removed upward from a processed file's
    /// original location. Matches the nesting depth of the input layout.
    pub cleanup_depth: usize,
}

impl Default for RomsortConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("games"),
            destination_root: PathBuf::from("CLEAN_GAMES"),
            base_metadata_url: DEFAULT_BASE_URL.to_string(),
            file_extension: "zip".to_string(),
            cleanup_depth: 3,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("romsort")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RomsortConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RomsortConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RomsortConfig = toml::from_str(&data)?;
    Ok(cfg)
}
