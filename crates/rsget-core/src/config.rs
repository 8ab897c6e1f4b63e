use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::naming::NamingStrategy;

/// Naming strategy selector: "positional" (default) or "url-stem".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingMode {
    #[default]
    Positional,
    UrlStem,
}

/// Global configuration loaded from `~/.config/rsget/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RsgetConfig {
    /// Connect timeout per request, in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout, in seconds.
    pub request_timeout_secs: u64,
    /// Prefix for positional output names.
    pub filename_prefix: String,
    /// Extension for positional output names (including the dot).
    pub filename_extension: String,
    /// Optional naming strategy; if missing, positional is used.
    #[serde(default)]
    pub naming: Option<NamingMode>,
}

impl Default for RsgetConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            request_timeout_secs: 300,
            filename_prefix: "request_".to_string(),
            filename_extension: ".html".to_string(),
            naming: None,
        }
    }
}

impl RsgetConfig {
    /// The configured [`NamingStrategy`].
    pub fn naming_strategy(&self) -> NamingStrategy {
        match self.naming.unwrap_or_default() {
            NamingMode::Positional => NamingStrategy::Positional {
                prefix: self.filename_prefix.clone(),
                extension: self.filename_extension.clone(),
            },
            NamingMode::UrlStem => NamingStrategy::UrlStem,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("rsget")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RsgetConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RsgetConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: RsgetConfig = toml::from_str(&data)?;
    Ok(cfg)
}
