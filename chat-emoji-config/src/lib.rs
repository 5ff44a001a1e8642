//! Configuration system for chat-emoji.
//!
//! This crate loads the emoji alias table (and a few ambient settings) from a
//! YAML, TOML or JSON file. It includes:
//!
//! - The [`EmojiConfig`] data type and its load/save helpers
//! - XDG-style config path resolution
//! - The [`LogLevel`] setting shared with the command-line tool
//! - Typed [`ConfigError`] variants for I/O and parse failures

pub mod config;
pub mod error;
mod types;

pub use config::{ConfigFormat, EmojiConfig};
pub use error::ConfigError;
pub use types::LogLevel;
