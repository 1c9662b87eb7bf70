//! Configuration module for the fermat-tok CLI.
//!
//! This module handles loading configuration settings from `fermat-tok.toml`.
//! Command-line flags are layered on top by `main`.

use dirs::{config_dir, home_dir};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use fermat_lex::LexerOptions;

use crate::error::{Result, TokError};

/// Default configuration file name.
pub const CONFIG_FILE_NAME: &str = "fermat-tok.toml";

/// Directory name used under the home and system config directories.
const CONFIG_DIR_NAME: &str = "fermat-tok";

/// Application configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct Config {
    /// Global verbose setting.
    #[serde(default)]
    pub verbose: bool,

    /// Lexer-specific configuration.
    #[serde(default)]
    pub lexer: LexerConfig,

    /// Output-specific configuration.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Lexer options as they appear in the configuration file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct LexerConfig {
    /// Scan `.name` as a single COMMAND token.
    #[serde(default)]
    pub dot_commands: bool,
}

/// Token dump configuration options.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct OutputConfig {
    /// Print quoted strings without their delimiting quotes.
    #[serde(default = "default_true")]
    pub strip_quotes: bool,

    /// Stop at the first source that fails.
    #[serde(default)]
    pub fail_fast: bool,
}

fn default_true() -> bool {
    true
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            strip_quotes: true,
            fail_fast: false,
        }
    }
}

impl From<&LexerConfig> for LexerOptions {
    fn from(config: &LexerConfig) -> Self {
        LexerOptions {
            dot_commands: config.dot_commands,
        }
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// Searches for configuration in the following order:
    /// 1. Current directory
    /// 2. User's home directory (`~/.config/fermat-tok/`)
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
    ///
    /// # Arguments
    /// * `path` - Path to the configuration file
    ///
    /// # Returns
    /// * `Result<Config>` - The loaded configuration or an error
    pub fn load_from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(TokError::Config(format!(
                "Configuration file not found: {}",
                path.display()
            )));
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");

        Ok(config)
    }

    /// Returns the lexer options described by this configuration.
    pub fn lexer_options(&self) -> LexerOptions {
        LexerOptions::from(&self.lexer)
    }

    /// Check for config in current directory.
    fn check_current_dir_config() -> Option<PathBuf> {
        let path = PathBuf::from(CONFIG_FILE_NAME);
        path.exists().then_some(path)
    }

    /// Check for config in home directory.
    fn check_home_config() -> Option<PathBuf> {
        home_dir()
            .map(|dir| dir.join(".config").join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Check for config in system config directory.
    fn check_system_config() -> Option<PathBuf> {
        config_dir()
            .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
            .filter(|path| path.exists())
    }

    /// Find the configuration file in standard locations.
    fn find_config_file() -> Option<PathBuf> {
        Self::check_current_dir_config()
            .or_else(Self::check_home_config)
            .or_else(Self::check_system_config)
    }
}
