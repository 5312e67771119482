use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::advisor::{DEFAULT_FULL_LOAD_CREDITS, DEFAULT_SUBSIDY_CREDITS};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub catalog: CatalogConfig,
    #[serde(default)]
    pub load: LoadConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Path to a catalog JSON file; empty means the built-in plan.
    #[serde(default)]
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_full_load_credits")]
    pub full_load_credits: u32,
    #[serde(default = "default_subsidy_credits")]
    pub subsidy_credits: u32,
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub catalog_path: Option<PathBuf>,
    pub full_load_credits: Option<u32>,
    pub subsidy_credits: Option<u32>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/curriculum-advisor/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(path) = overrides.catalog_path {
            self.catalog.path = path.display().to_string();
        }
        if let Some(credits) = overrides.full_load_credits {
            self.load.full_load_credits = credits;
        }
        if let Some(credits) = overrides.subsidy_credits {
            self.load.subsidy_credits = credits;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    /// Catalog path with `~` expanded; `None` selects the built-in plan.
    pub fn resolved_catalog_path(&self) -> Option<PathBuf> {
        let trimmed = self.catalog.path.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(expand_tilde(trimmed))
    }

    pub fn default_template() -> String {
        let template = r#"[catalog]
# Path to a catalog JSON file; leave empty for the built-in plan.
path = ""

[load]
full_load_credits = 18
subsidy_credits = 14
"#;
        template.to_string()
    }
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            full_load_credits: default_full_load_credits(),
            subsidy_credits: default_subsidy_credits(),
        }
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

fn default_full_load_credits() -> u32 {
    DEFAULT_FULL_LOAD_CREDITS
}

fn default_subsidy_credits() -> u32 {
    DEFAULT_SUBSIDY_CREDITS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_standard_caps() {
        let config = Config::default();
        assert_eq!(config.load.full_load_credits, 18);
        assert_eq!(config.load.subsidy_credits, 14);
        assert!(config.resolved_catalog_path().is_none());
    }

    #[test]
    fn template_round_trips_through_the_parser() {
        let parsed: Config = toml::from_str(&Config::default_template()).unwrap();
        assert_eq!(parsed.load.full_load_credits, 18);
        assert_eq!(parsed.load.subsidy_credits, 14);
    }

    #[test]
    fn overrides_replace_configured_values() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            catalog_path: Some(PathBuf::from("plan.json")),
            full_load_credits: Some(12),
            subsidy_credits: None,
        });
        assert_eq!(config.load.full_load_credits, 12);
        assert_eq!(config.load.subsidy_credits, 14);
        assert_eq!(
            config.resolved_catalog_path(),
            Some(PathBuf::from("plan.json"))
        );
    }
}
