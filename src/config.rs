//! Configuration Management Module for gitkit
//!
//! This module handles all configuration-related functionality, including
//! - Reading and writing the configuration file
//! - Managing the commit-message model preference
//!
//! # Configuration Structure
//!
//! The configuration is stored in TOML format at `~/.config/gitkit/config.toml`
//! and contains settings such as
//! - The language model used to generate commit messages
//! - An optional OpenAI-compatible API base URL

use std::{fs, path::PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{ConfigError, Result};

/// Model used when the configuration file does not name one.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Settings persisted in `config.toml`. Every field is optional; defaults
/// apply when the file or a field is missing.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub model: Option<String>,
    pub api_base_url: Option<String>,
}

/// Main configuration struct that handles all config operations
pub struct Config {
    root: PathBuf,
}

impl Config {
    /// Creates a new Config instance rooted at the user's home directory.
    ///
    /// # Errors
    /// * When the home directory cannot be determined
    pub fn new() -> Result<Self> {
        let root = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

        Ok(Config { root })
    }

    /// Creates a new Config instance with a custom root path
    ///
    /// # Arguments
    /// * `root` - The custom root path
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        Config { root: root.into() }
    }

    /// Loads the settings, falling back to defaults when no configuration
    /// file exists yet.
    ///
    /// # Errors
    /// * If the configuration file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Settings> {
        let config_file = self.config_file_path();

        if !config_file.exists() {
            return Ok(Settings::default());
        }

        let content = fs::read_to_string(&config_file).map_err(ConfigError::IoError)?;
        let settings = toml::from_str(&content).map_err(ConfigError::InvalidConfig)?;

        Ok(settings)
    }

    /// Returns the configured model, or [`DEFAULT_MODEL`].
    ///
    /// # Errors
    /// * If the configuration file cannot be read or parsed.
    pub fn model(&self) -> Result<String> {
        Ok(self
            .load()?
            .model
            .unwrap_or_else(|| DEFAULT_MODEL.to_string()))
    }

    /// Sets the model in the configuration file, creating the file and its
    /// folder when missing.
    ///
    /// # Arguments
    /// * `model` - The model name to persist.
    ///
    /// # Errors
    /// * If the configuration file cannot be read or written.
    pub fn set_model(&self, model: &str) -> Result<()> {
        let mut settings = self.load()?;
        settings.model = Some(model.to_string());

        self.write(&settings)
    }

    /// Returns the path to the configuration folder.
    #[must_use]
    pub fn config_folder_path(&self) -> PathBuf {
        self.root.join(".config").join("gitkit")
    }

    /// Returns the path to the configuration file
    #[must_use]
    pub fn config_file_path(&self) -> PathBuf {
        self.config_folder_path().join("config.toml")
    }

    fn write(&self, settings: &Settings) -> Result<()> {
        let config_folder = self.config_folder_path();

        if !config_folder.exists() {
            fs::create_dir_all(&config_folder).map_err(ConfigError::IoError)?;
        }

        let content = toml::to_string_pretty(settings).map_err(ConfigError::SerializeConfig)?;
        fs::write(self.config_file_path(), content).map_err(ConfigError::IoError)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::errors::GitkitError;

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_without_config_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_root(temp_dir.path());

        let settings = config.load().unwrap();
        assert!(settings.model.is_none());
        assert!(settings.api_base_url.is_none());

        assert_eq!(config.model().unwrap(), DEFAULT_MODEL);
    }

    #[test]
    fn test_set_and_get_model() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_root(temp_dir.path());

        config.set_model("gpt-4o").unwrap();

        let config_file = config.config_file_path();
        assert!(config_file.exists());
        assert_eq!(config.model().unwrap(), "gpt-4o");
    }

    #[test]
    fn test_set_model_preserves_other_settings() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_root(temp_dir.path());

        fs::create_dir_all(config.config_folder_path()).unwrap();
        fs::write(
            config.config_file_path(),
            "api_base_url = \"https://example.test/v1\"\n",
        )
        .unwrap();

        config.set_model("gpt-4o").unwrap();

        let settings = config.load().unwrap();
        assert_eq!(settings.model.as_deref(), Some("gpt-4o"));
        assert_eq!(
            settings.api_base_url.as_deref(),
            Some("https://example.test/v1")
        );
    }

    #[test]
    fn test_malformed_config() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::with_root(temp_dir.path());

        fs::create_dir_all(config.config_folder_path()).unwrap();
        fs::write(config.config_file_path(), "model = missing_quotes").unwrap();

        assert!(matches!(
            config.load(),
            Err(GitkitError::Config(ConfigError::InvalidConfig(_)))
        ));
    }
}
