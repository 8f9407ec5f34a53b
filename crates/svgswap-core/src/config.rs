use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// HTTP transport parameters (optional `[http]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Total transfer timeout in seconds.
    pub timeout_secs: u64,
    /// Optional `User-Agent` header value.
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 15,
            timeout_secs: 30,
            user_agent: None,
        }
    }
}

/// Global configuration loaded from `~/.config/svgswap/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwapConfig {
    /// CSS selector matching the placeholder elements to replace.
    pub selector: String,
    /// Fetch every placeholder independently, without sharing content.
    #[serde(default)]
    pub disable_cache: bool,
    /// Maximum placeholders resolved concurrently per page.
    pub max_concurrent_fetches: usize,
    /// Optional HTTP settings; if missing, built-in defaults are used.
    #[serde(default)]
    pub http: Option<HttpConfig>,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self {
            selector: r#"img[src$=".svg"]"#.to_string(),
            disable_cache: false,
            max_concurrent_fetches: 8,
            http: None,
        }
    }
}

impl SwapConfig {
    /// HTTP settings, falling back to defaults when the section is absent.
    pub fn http_or_default(&self) -> HttpConfig {
        self.http.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("svgswap")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SwapConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SwapConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SwapConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
