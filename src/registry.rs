//! Alias registry.
//!
//! Maps shortcode aliases (`:smile:`) to emoji codes (`E001`). Codes are stored
//! as given and only checked when a message uses them, so a bad entry surfaces
//! as a rewrite warning rather than a registration failure.

use crate::glyph::{GlyphError, format_glyph};
use chat_emoji_config::EmojiConfig;
use parking_lot::RwLock;
use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, OnceLock};

/// A registered alias whose code does not format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidEmoji {
    pub alias: String,
    pub code: String,
    pub error: GlyphError,
}

/// Shared alias → code table.
///
/// Cloning is cheap and every clone sees the same entries, so one registry can
/// be handed to any number of rewriters while setup code keeps registering.
#[derive(Debug, Clone, Default)]
pub struct EmojiRegistry {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl EmojiRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry from a loaded config.
    pub fn from_config(config: &EmojiConfig) -> Self {
        let registry = Self::new();
        registry.register_bulk(
            config
                .emojis
                .iter()
                .map(|(alias, code)| (alias.clone(), code.clone())),
        );
        log::info!(
            "Emoji registry initialized with {} aliases",
            registry.len()
        );
        registry
    }

    /// Register an alias, replacing any previous code.
    ///
    /// Returns the code that was replaced, if any.
    pub fn register(&self, alias: impl Into<String>, code: impl Into<String>) -> Option<String> {
        let alias = alias.into();
        let code = code.into();
        log::debug!("Registered emoji: {} -> {}", alias, code);
        self.entries.write().insert(alias, code)
    }

    /// Register many aliases under a single write lock.
    pub fn register_bulk<I, A, C>(&self, emojis: I)
    where
        I: IntoIterator<Item = (A, C)>,
        A: Into<String>,
        C: Into<String>,
    {
        let mut entries = self.entries.write();
        let before = entries.len();
        for (alias, code) in emojis {
            entries.insert(alias.into(), code.into());
        }
        log::debug!(
            "Bulk registration added {} new aliases ({} total)",
            entries.len() - before,
            entries.len()
        );
    }

    /// Look up the code for an alias. The alias includes its colons.
    pub fn lookup(&self, alias: &str) -> Option<String> {
        self.entries.read().get(alias).cloned()
    }

    /// Check whether an alias is registered.
    pub fn contains(&self, alias: &str) -> bool {
        self.entries.read().contains_key(alias)
    }

    /// Number of registered aliases.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check if the registry has any aliases.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Sorted copy of every entry.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries
            .read()
            .iter()
            .map(|(alias, code)| (alias.clone(), code.clone()))
            .collect()
    }

    /// Run every stored code through the formatter.
    ///
    /// Nothing is removed; invalid entries keep rewriting as plain text.
    /// Results are sorted by alias.
    pub fn validate(&self) -> Vec<InvalidEmoji> {
        let mut invalid: Vec<InvalidEmoji> = self
            .entries
            .read()
            .iter()
            .filter_map(|(alias, code)| {
                format_glyph(code).err().map(|error| InvalidEmoji {
                    alias: alias.clone(),
                    code: code.clone(),
                    error,
                })
            })
            .collect();
        invalid.sort_by(|a, b| a.alias.cmp(&b.alias));
        invalid
    }
}

static GLOBAL: OnceLock<EmojiRegistry> = OnceLock::new();

/// Process-wide registry for extension code that has no handle to pass around.
pub fn global() -> &'static EmojiRegistry {
    GLOBAL.get_or_init(EmojiRegistry::new)
}

/// Register an alias in the process-wide registry.
pub fn add_emoji(alias: impl Into<String>, code: impl Into<String>) {
    global().register(alias, code);
}

/// Register many aliases in the process-wide registry.
pub fn add_emojis<I, A, C>(emojis: I)
where
    I: IntoIterator<Item = (A, C)>,
    A: Into<String>,
    C: Into<String>,
{
    global().register_bulk(emojis);
}
