//! Typed error variants for the chat-emoji-config crate.
//!
//! Callers that only want a message can coerce these into `anyhow::Error`;
//! callers that care about the failure mode can match on the variants.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving an emoji configuration.
///
/// # Example
///
/// ```rust,no_run
/// use chat_emoji_config::{ConfigError, EmojiConfig};
///
/// match EmojiConfig::load_from("emojis.yaml") {
///     Ok(config) => println!("{} emojis", config.emojis.len()),
///     Err(ConfigError::Io(e)) => eprintln!("I/O error: {e}"),
///     Err(ConfigError::UnsupportedFormat(path)) => eprintln!("unknown format: {}", path.display()),
///     Err(e) => eprintln!("parse error: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An I/O error occurred reading or writing the config file.
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// The config file contained invalid YAML.
    #[error("YAML parse error in config: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),

    /// The config file contained invalid TOML.
    #[error("TOML parse error in config: {0}")]
    Toml(#[from] toml::de::Error),

    /// The config could not be rendered as TOML.
    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    /// The config file contained invalid JSON.
    #[error("JSON parse error in config: {0}")]
    Json(#[from] serde_json::Error),

    /// The file extension does not name a supported format.
    #[error("Unsupported config format for '{}': expected .yaml, .yml, .toml or .json", .0.display())]
    UnsupportedFormat(PathBuf),
}
