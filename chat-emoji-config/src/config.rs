//! Emoji configuration data, file I/O and path resolution.
//!
//! Covers:
//! - `load` / `load_from` (YAML, TOML or JSON, picked by file extension)
//! - `save_to` (atomic write through a temp file)
//! - XDG-style path helpers (`config_dir`, `config_path`)
//! - Alias syntax checks for keys that could never match in chat

use crate::error::ConfigError;
use crate::types::LogLevel;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Directory name used under the platform config directory.
const APP_DIR: &str = "chat-emoji";

/// Default config file name.
const CONFIG_FILE: &str = "emojis.yaml";

static ALIAS_REGEX: OnceLock<Regex> = OnceLock::new();

fn alias_regex() -> &'static Regex {
    ALIAS_REGEX
        .get_or_init(|| Regex::new(r"^:[a-zA-Z0-9_]+:$").expect("Failed to compile alias regex"))
}

/// On-disk serialization formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Yaml,
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the path's extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(ConfigFormat::Yaml),
            "toml" => Some(ConfigFormat::Toml),
            "json" => Some(ConfigFormat::Json),
            _ => None,
        }
    }
}

/// Emoji alias table plus ambient settings.
///
/// ```yaml
/// log_level: info
/// emojis:
///   ":smile:": E001
///   ":heart:": E002
/// ```
///
/// Codes are stored verbatim. They are only checked when a chat message
/// actually uses the alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EmojiConfig {
    /// Verbosity for the command-line tool's log output
    pub log_level: LogLevel,
    /// Alias (including the surrounding colons) to hex code, e.g. `":smile:" -> "E001"`
    pub emojis: BTreeMap<String, String>,
}

impl EmojiConfig {
    /// Create an empty config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a single alias.
    pub fn with_emoji(mut self, alias: impl Into<String>, code: impl Into<String>) -> Self {
        self.emojis.insert(alias.into(), code.into());
        self
    }

    /// Load the config from the default path.
    ///
    /// A missing file is not an error: the empty default is returned.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        log::info!("Config path: {:?}", config_path);

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            log::info!(
                "Config file not found at {:?}, starting with no emojis",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load the config from an explicit path.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        log::info!("Loading emoji config from {:?}", path);
        let contents = fs::read_to_string(path)?;
        let config = Self::parse(&contents, format)?;

        for alias in config.malformed_aliases() {
            log::warn!(
                "Emoji alias {:?} in {:?} is not of the form :name: and will never match",
                alias,
                path
            );
        }

        log::info!("Loaded {} emoji aliases", config.emojis.len());
        Ok(config)
    }

    /// Parse config text in the given format.
    pub fn parse(contents: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        // An empty YAML document deserializes as unit, not as an empty map
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config = match format {
            ConfigFormat::Yaml => serde_yaml_ng::from_str(contents)?,
            ConfigFormat::Toml => toml::from_str(contents)?,
            ConfigFormat::Json => serde_json::from_str(contents)?,
        };
        Ok(config)
    }

    /// Render the config in the given format.
    pub fn render(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let text = match format {
            ConfigFormat::Yaml => serde_yaml_ng::to_string(self)?,
            ConfigFormat::Toml => toml::to_string(self)?,
            ConfigFormat::Json => serde_json::to_string_pretty(self)?,
        };
        Ok(text)
    }

    /// Save the config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let format = ConfigFormat::from_path(path)
            .ok_or_else(|| ConfigError::UnsupportedFormat(path.to_path_buf()))?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let text = self.render(format)?;

        // Atomic save: write to temp file then rename to prevent corruption on crash
        let mut temp_name = path.as_os_str().to_owned();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);
        fs::write(&temp_path, &text)?;
        fs::rename(&temp_path, path)?;

        Ok(())
    }

    /// Aliases that do not match the `:name:` token grammar.
    pub fn malformed_aliases(&self) -> Vec<&str> {
        self.emojis
            .keys()
            .filter(|alias| !alias_regex().is_match(alias))
            .map(String::as_str)
            .collect()
    }

    /// Get the configuration file path (using XDG convention)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    /// Get the configuration directory path (using XDG convention)
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // ~/.config/chat-emoji on every Unix-like, macOS included
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join(APP_DIR)
            } else {
                PathBuf::from(".")
            }
        }
    }
}
