use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::request::{BuilderType, UtmParamType};
use crate::store::DEFAULT_HISTORY_LIMIT;

/// Global configuration loaded from `~/.config/utmb/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UtmbConfig {
    /// Mode used when `--builder` is not given.
    pub default_builder: BuilderType,
    /// Brands used when `--brand` is not given.
    pub default_brands: Vec<String>,
    /// Key carrying material ids for Display/Search unless overridden.
    pub utm_param_type: UtmParamType,
    /// History entries kept per mode.
    pub history_limit: usize,
    /// Optional store file; defaults to `~/.local/share/utmb/store.json`.
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl Default for UtmbConfig {
    fn default() -> Self {
        Self {
            default_builder: BuilderType::Display,
            default_brands: vec!["MFG".to_string()],
            utm_param_type: UtmParamType::Content,
            history_limit: DEFAULT_HISTORY_LIMIT,
            store_path: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("utmb")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UtmbConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UtmbConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UtmbConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = UtmbConfig::default();
        assert_eq!(cfg.default_builder, BuilderType::Display);
        assert_eq!(cfg.default_brands, vec!["MFG"]);
        assert_eq!(cfg.utm_param_type, UtmParamType::Content);
        assert_eq!(cfg.history_limit, 5);
        assert!(cfg.store_path.is_none());
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = UtmbConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: UtmbConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            default_builder = "BS"
            default_brands = ["KID", "UND"]
            utm_param_type = "term"
            history_limit = 10
            store_path = "/tmp/utmb-store.json"
        "#;
        let cfg: UtmbConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.default_builder, BuilderType::BrandShop);
        assert_eq!(cfg.default_brands, vec!["KID", "UND"]);
        assert_eq!(cfg.utm_param_type, UtmParamType::Term);
        assert_eq!(cfg.history_limit, 10);
        assert_eq!(
            cfg.store_path.as_deref(),
            Some(std::path::Path::new("/tmp/utmb-store.json"))
        );
    }

    #[test]
    fn config_toml_rejects_unknown_builder() {
        let toml = r#"
            default_builder = "XX"
            default_brands = []
            utm_param_type = "content"
            history_limit = 5
        "#;
        assert!(toml::from_str::<UtmbConfig>(toml).is_err());
    }
}
