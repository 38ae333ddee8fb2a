use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Known-good production origin used when nothing else is configured.
pub const DEFAULT_ORIGIN: &str = "https://reliktarte-production.up.railway.app";

/// Environment variable overriding the configured backend origin.
pub const ORIGIN_ENV_VAR: &str = "RELIKT_BACKEND_LINK";

/// Global configuration loaded from `~/.config/relikt/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReliktConfig {
    /// Backend origin all relative paths resolve against. May be given
    /// without a scheme or with trailing slashes; the resolver normalizes it.
    pub backend_origin: String,
    /// Optional per-request transfer timeout in seconds (None = built-in default).
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ReliktConfig {
    fn default() -> Self {
        Self {
            backend_origin: DEFAULT_ORIGIN.to_string(),
            request_timeout_secs: None,
        }
    }
}

impl ReliktConfig {
    /// The origin to use for this process: the `RELIKT_BACKEND_LINK`
    /// environment variable when set and non-blank, the configured value
    /// otherwise.
    pub fn effective_origin(&self) -> String {
        match std::env::var(ORIGIN_ENV_VAR) {
            Ok(v) if !v.trim().is_empty() => v,
            _ => self.backend_origin.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("relikt")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<ReliktConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = ReliktConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: ReliktConfig = toml::from_str(&data)?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_production() {
        let cfg = ReliktConfig::default();
        assert_eq!(cfg.backend_origin, DEFAULT_ORIGIN);
        assert!(cfg.request_timeout_secs.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = ReliktConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: ReliktConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.backend_origin, cfg.backend_origin);
        assert_eq!(parsed.request_timeout_secs, cfg.request_timeout_secs);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            backend_origin = "http://localhost:8000"
            request_timeout_secs = 10
        "#;
        let cfg: ReliktConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.backend_origin, "http://localhost:8000");
        assert_eq!(cfg.request_timeout_secs, Some(10));
    }

    #[test]
    fn config_toml_timeout_optional() {
        let toml = r#"backend_origin = "https://host""#;
        let cfg: ReliktConfig = toml::from_str(toml).unwrap();
        assert!(cfg.request_timeout_secs.is_none());
    }
}
