//! Persistent CLI Configuration Loader
//!
//! Configuration is loaded from `~/.config/tipsplit/config.toml` on Linux,
//! `~/Library/Application Support/tipsplit/config.toml` on macOS and
//! `%APPDATA%\tipsplit\config.toml` on Windows.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tipsplit::SplitConfig;
use tracing::{debug, warn};

/// CLI Configuration structure loaded from TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct CliConfig {
    /// Locale for number formatting (e.g., "en-US", "en-AU").
    pub locale: Option<String>,
    /// Directory the bill record is stored in.
    pub data_dir: Option<PathBuf>,
    /// Key (file stem) of the stored bill record.
    pub storage_key: Option<String>,
    /// Enable file logging by default.
    pub enable_logging: Option<bool>,
}

impl CliConfig {
    /// Returns the platform-specific configuration directory.
    pub fn config_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tipsplit"))
    }

    /// Returns the full path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|p| p.join("config.toml"))
    }

    /// Loads configuration from the default location.
    /// Returns `CliConfig::default()` if the file doesn't exist or fails to parse.
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => {
                debug!("Could not determine config directory");
                Self::default()
            }
        }
    }

    /// Loads configuration from `path`, falling back to defaults.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            debug!("No config file found at {:?}", path);
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<CliConfig>(&content) {
                Ok(config) => {
                    debug!("Loaded configuration from {:?}", path);
                    config
                }
                Err(e) => {
                    warn!("Failed to parse config file {:?}: {}", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                warn!("Failed to read config file {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    /// Directory for the stored bill: the configured one, else the platform
    /// data directory, else `./.tipsplit`.
    pub fn resolved_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| dirs::data_dir().map(|p| p.join("tipsplit")))
            .unwrap_or_else(|| PathBuf::from(".tipsplit"))
    }

    /// Library settings derived from this file; unset values use library defaults.
    pub fn split_config(&self) -> SplitConfig {
        let mut config = SplitConfig::default();
        if let Some(locale) = &self.locale {
            config = config.with_locale(locale.clone());
        }
        if let Some(key) = &self.storage_key {
            config = config.with_storage_key(key.clone());
        }
        config
    }

    pub fn logging_enabled(&self) -> bool {
        self.enable_logging.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = CliConfig::default();
        assert!(config.locale.is_none());
        assert!(!config.logging_enabled());
        assert_eq!(config.split_config(), SplitConfig::default());
    }

    #[test]
    fn test_config_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(
            &path,
            "locale = \"en-AU\"\ndata-dir = \"/tmp/bills\"\nstorage-key = \"dinner\"\nenable-logging = true\n",
        )
        .unwrap();

        let config = CliConfig::load_from(&path);
        assert_eq!(config.locale.as_deref(), Some("en-AU"));
        assert_eq!(config.resolved_data_dir(), PathBuf::from("/tmp/bills"));
        assert!(config.logging_enabled());

        let split = config.split_config();
        assert_eq!(split.locale, "en-AU");
        assert_eq!(split.storage_key, "dinner");
    }

    #[test]
    fn test_broken_file_falls_back() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "locale = [").unwrap();
        assert_eq!(CliConfig::load_from(&path), CliConfig::default());
        assert_eq!(CliConfig::load_from(&tmp.path().join("missing.toml")), CliConfig::default());
    }
}
