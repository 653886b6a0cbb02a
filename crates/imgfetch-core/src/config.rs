use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::session::{FetchOptions, DEFAULT_USER_AGENT};

/// Fetcher configuration, optionally read from `~/.config/imgfetch/config.toml`.
///
/// Every field has a default, so a partial file is fine.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FetcherConfig {
    /// Directory images are saved into (created on demand).
    pub download_dir: PathBuf,
    /// Whole-request timeout in seconds.
    pub timeout_secs: u64,
    /// Largest image accepted, in MB (1 MB = 1024 * 1024 bytes).
    pub max_size_mb: u64,
    /// Identifying `User-Agent` sent with every request. Must not be empty.
    pub user_agent: String,
    /// Extension for synthesized names when the content type is unknown.
    pub default_extension: String,
    /// Redirect hops followed before giving up.
    pub max_redirects: u32,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("Fetched_Images"),
            timeout_secs: 10,
            max_size_mb: 50,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            default_extension: "jpg".to_string(),
            max_redirects: 10,
        }
    }
}

impl FetcherConfig {
    /// Reject values the pipeline cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.user_agent.trim().is_empty() {
            bail!("user_agent must not be empty");
        }
        if self.timeout_secs == 0 {
            bail!("timeout_secs must be at least 1");
        }
        if self.max_size_mb == 0 {
            bail!("max_size_mb must be at least 1");
        }
        let ext = self.default_extension.trim_start_matches('.');
        if ext.is_empty() || !ext.chars().all(|c| c.is_ascii_alphanumeric()) {
            bail!("default_extension must be alphanumeric, got {:?}", self.default_extension);
        }
        Ok(())
    }

    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            timeout: Duration::from_secs(self.timeout_secs),
            user_agent: self.user_agent.trim().to_string(),
            max_size_mb: self.max_size_mb,
            default_extension: self.default_extension.trim_start_matches('.').to_string(),
            max_redirects: self.max_redirects,
        }
    }
}

/// Default location: `$XDG_CONFIG_HOME/imgfetch/config.toml`.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("imgfetch")?;
    Ok(xdg_dirs.get_config_home().join("imgfetch").join("config.toml"))
}

/// Parse and validate a config file.
pub fn load_from(path: &Path) -> Result<FetcherConfig> {
    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: FetcherConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(cfg)
}

/// Load configuration: an explicit path must exist; otherwise the default
/// location is used if present, else built-in defaults. Never writes a file.
pub fn load(explicit: Option<&Path>) -> Result<FetcherConfig> {
    if let Some(path) = explicit {
        return load_from(path);
    }
    match config_path() {
        Ok(path) if path.exists() => {
            tracing::debug!("loading config from {}", path.display());
            load_from(&path)
        }
        Ok(_) => Ok(FetcherConfig::default()),
        Err(e) => {
            tracing::debug!("no config directory available: {e:#}");
            Ok(FetcherConfig::default())
        }
    }
}
