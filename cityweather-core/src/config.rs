use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::provider::weatherapi::DEFAULT_BASE_URL;

/// Environment variable that overrides the stored API key.
pub const API_KEY_ENV: &str = "WEATHERAPI_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// # base_url = "https://api.weatherapi.com/v1"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    /// WeatherAPI.com credential.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Endpoint root, without the `current.json` suffix.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

impl Config {
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref().filter(|k| !k.trim().is_empty())
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key);
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }

    /// Replace the stored key with a non-empty value taken from the environment.
    pub fn apply_env_override(&mut self, env_key: Option<String>) {
        if let Some(key) = env_key.filter(|k| !k.trim().is_empty()) {
            self.api_key = Some(key);
        }
    }

    /// Load config from the platform location and apply `WEATHERAPI_KEY`.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        let mut cfg = Self::load_from(&path)?;
        cfg.apply_env_override(std::env::var(API_KEY_ENV).ok());
        Ok(cfg)
    }

    /// Load config from `path`, or return an empty default if it doesn't exist yet.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        tracing::debug!(path = %path.display(), "saved configuration");
        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "cityweather", "cityweather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_key_and_public_endpoint() {
        let cfg = Config::default();

        assert_eq!(cfg.api_key(), None);
        assert_eq!(cfg.base_url(), "https://api.weatherapi.com/v1");
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let mut cfg = Config::default();
        cfg.set_api_key("   ".into());

        assert_eq!(cfg.api_key(), None);
    }

    #[test]
    fn env_override_replaces_stored_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        cfg.apply_env_override(Some("ENV_KEY".into()));
        assert_eq!(cfg.api_key(), Some("ENV_KEY"));
    }

    #[test]
    fn empty_env_value_keeps_stored_key() {
        let mut cfg = Config::default();
        cfg.set_api_key("FILE_KEY".into());

        cfg.apply_env_override(Some(String::new()));
        cfg.apply_env_override(None);
        assert_eq!(cfg.api_key(), Some("FILE_KEY"));
    }

    #[test]
    fn missing_file_loads_default() {
        let dir = tempfile::tempdir().expect("tempdir");
        let cfg = Config::load_from(&dir.path().join("absent.toml")).expect("load");

        assert_eq!(cfg, Config::default());
    }

    #[test]
    fn save_then_load_from_nested_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("config.toml");

        let mut cfg = Config::default();
        cfg.set_api_key("KEY".into());
        cfg.base_url = Some("http://localhost:8080/v1".into());
        cfg.save_to(&path).expect("save");

        let loaded = Config::load_from(&path).expect("load");
        assert_eq!(loaded, cfg);
    }

    #[test]
    fn invalid_toml_reports_path() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "api_key = [").expect("write");

        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }
}
