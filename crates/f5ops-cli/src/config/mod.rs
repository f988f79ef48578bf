//! Configuration management.

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::output::OutputFormat;

/// CLI configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default BIG-IQ management host for `inventory`.
    pub bigiq: Option<String>,

    /// Default BIG-IP management host for `exec`/`shell`.
    pub bigip: Option<String>,

    /// Default username (falls back to `admin`).
    pub user: Option<String>,

    /// Skip TLS certificate verification by default.
    #[serde(default)]
    pub insecure: bool,

    /// Default output format.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// Get the config file path.
    pub fn path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("net", "f5ops", "f5ops")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load configuration from file.
    pub fn load() -> Result<Self> {
        let path = Self::path()?;

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)?;
        let config: Self = toml::from_str(&content)?;

        Ok(config)
    }

    /// Save configuration to file.
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;

        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrips_through_toml() {
        let config = Config {
            bigiq: Some("10.10.10.10".into()),
            bigip: None,
            user: Some("admin".into()),
            insecure: true,
            output_format: Some(OutputFormat::Json),
        };

        let text = toml::to_string_pretty(&config).unwrap();
        let back: Config = toml::from_str(&text).unwrap();

        assert_eq!(back.bigiq.as_deref(), Some("10.10.10.10"));
        assert!(back.insecure);
        assert_eq!(back.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.bigiq.is_none());
        assert!(!config.insecure);
    }
}
