//! Configuration module for the jackt CLI.
//!
//! This module handles loading, saving, and managing configuration
//! settings for the jackt application. Tokenizer policies live in the
//! `[tokenizer]` table and output defaults in `[output]`:
//!
//! ```toml
//! [tokenizer]
//! extension = "jack"
//! line_numbering = "per-file"
//! identifiers = "alphanumeric"
//!
//! [output]
//! format = "json"
//! by_file = false
//! ```

use dirs::{config_dir, home_dir};
use jackc_lex::TokenizerConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::commands::common::OutputFormat;
use crate::error::{JacktError, Result};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "jackt.toml";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Tokenizer policies.
    #[serde(default)]
    pub tokenizer: TokenizerConfig,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output configuration options.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Default output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Group text output under per-file headers.
    #[serde(default)]
    pub by_file: bool,
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. `~/.config/jackt/`
    /// 3. System configuration directory
    ///
    /// Returns the default configuration if no config file is found.
    pub fn load() -> Result<Self> {
        match Self::find_config_file() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific path.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(JacktError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content).map_err(|e| {
            JacktError::Config(format!("Failed to parse configuration: {}", e))
        })?;

        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Save configuration to a specific path.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self).map_err(|e| {
            JacktError::Config(format!("Failed to serialize configuration: {}", e))
        })?;

        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join("jackt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join("jackt").join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jackc_lex::{IdentifierRule, LineNumbering};
    use tempfile::TempDir;

    fn create_test_config() -> Config {
        Config {
            verbose: true,
            tokenizer: TokenizerConfig::default()
                .with_extension("src")
                .with_line_numbering(LineNumbering::PerFile)
                .with_identifiers(IdentifierRule::Alphabetic),
            output: OutputConfig {
                format: OutputFormat::Json,
                by_file: true,
            },
        }
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(!config.verbose);
        assert_eq!(config.tokenizer.extension, "jack");
        assert_eq!(config.tokenizer.line_numbering, LineNumbering::Global);
        assert_eq!(config.output.format, OutputFormat::Text);
        assert!(!config.output.by_file);
    }

    #[test]
    fn test_config_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("jackt.toml");

        let original_config = create_test_config();
        original_config.save_to_path(&config_path).unwrap();

        let loaded_config = Config::load_from_path(&config_path).unwrap();

        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("jackt.toml");
        std::fs::write(&config_path, "[tokenizer]\nline_numbering = \"per-file\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.tokenizer.line_numbering, LineNumbering::PerFile);
        assert_eq!(config.tokenizer.extension, "jack");
        assert_eq!(config.output, OutputConfig::default());
    }

    #[test]
    fn test_dotted_extension_in_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("jackt.toml");
        std::fs::write(&config_path, "[tokenizer]\nextension = \".src\"\n").unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        assert_eq!(config.tokenizer.extension, "src");
    }

    #[test]
    fn test_invalid_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("jackt.toml");
        std::fs::write(&config_path, "[output]\nformat = \"xml\"\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(JacktError::Config(_))));
    }

    #[test]
    fn test_load_from_nonexistent_path() {
        let result = Config::load_from_path(Path::new("/nonexistent/path/jackt.toml"));
        assert!(result.is_err());
    }
}
