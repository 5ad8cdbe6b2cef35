use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// How a source URL is transferred to its local artifact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchBackend {
    /// In-process libcurl transfer.
    #[default]
    Curl,
    /// External `wget --output-document=<dest> <url>`.
    Wget,
}

/// External programs used by the wget backend and the unpack step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolsConfig {
    pub wget: String,
    pub tar: String,
    pub gzip: String,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            wget: "wget".to_string(),
            tar: "tar".to_string(),
            gzip: "gzip".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/annfetch/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Directory holding downloaded artifacts (relative paths resolve against the working dir).
    pub downloads_dir: PathBuf,
    /// Transfer backend: "curl" (default) or "wget".
    #[serde(default)]
    pub fetch_backend: FetchBackend,
    /// Connect timeout for the curl backend, in seconds.
    pub connect_timeout_secs: u64,
    /// Optional overrides for external program names; built-in defaults if missing.
    #[serde(default)]
    pub tools: Option<ToolsConfig>,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            downloads_dir: PathBuf::from("downloads"),
            fetch_backend: FetchBackend::Curl,
            connect_timeout_secs: 30,
            tools: None,
        }
    }
}

impl FetchConfig {
    pub fn tools(&self) -> ToolsConfig {
        self.tools.clone().unwrap_or_default()
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("annfetch")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<FetchConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: FetchConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = FetchConfig::default();
        assert_eq!(cfg.downloads_dir, PathBuf::from("downloads"));
        assert_eq!(cfg.fetch_backend, FetchBackend::Curl);
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.tools(), ToolsConfig::default());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = FetchConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: FetchConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.downloads_dir, cfg.downloads_dir);
        assert_eq!(parsed.fetch_backend, cfg.fetch_backend);
        assert_eq!(parsed.connect_timeout_secs, cfg.connect_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            downloads_dir = "/data/downloads"
            fetch_backend = "wget"
            connect_timeout_secs = 5

            [tools]
            wget = "/usr/local/bin/wget"
            tar = "gtar"
            gzip = "pigz"
        "#;
        let cfg: FetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.downloads_dir, PathBuf::from("/data/downloads"));
        assert_eq!(cfg.fetch_backend, FetchBackend::Wget);
        assert_eq!(cfg.connect_timeout_secs, 5);
        let tools = cfg.tools();
        assert_eq!(tools.wget, "/usr/local/bin/wget");
        assert_eq!(tools.tar, "gtar");
        assert_eq!(tools.gzip, "pigz");
    }

    #[test]
    fn config_toml_backend_defaults_to_curl() {
        let toml = r#"
            downloads_dir = "downloads"
            connect_timeout_secs = 30
        "#;
        let cfg: FetchConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.fetch_backend, FetchBackend::Curl);
        assert!(cfg.tools.is_none());
    }
}
