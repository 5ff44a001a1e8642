//! Shortcode substitution for chat messages.
//!
//! Scans text for `:alias:` tokens and swaps every registered alias whose code
//! formats cleanly for its private-use glyph. Anything else is left exactly as
//! typed. Failed codes are reported as [`RewriteWarning`]s; the pass itself
//! cannot fail.

use crate::glyph::{GlyphError, format_glyph};
use crate::registry::EmojiRegistry;
use regex::Regex;
use std::borrow::Cow;
use std::fmt;
use std::sync::OnceLock;

static SHORTCODE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Get the compiled shortcode pattern (`:` + word characters + `:`)
fn shortcode_regex() -> &'static Regex {
    SHORTCODE_REGEX
        .get_or_init(|| Regex::new(r":[a-zA-Z0-9_]+:").expect("Failed to compile shortcode regex"))
}

/// Iterate over the shortcode tokens in a message, left to right.
///
/// Tokens never overlap: in `:a:b:` only `:a:` is a token.
pub fn tokens(message: &str) -> impl Iterator<Item = &str> {
    shortcode_regex().find_iter(message).map(|m| m.as_str())
}

/// A registered alias whose code could not be turned into a glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteWarning {
    /// The token as it appeared in the message, colons included
    pub alias: String,
    /// The code stored for the alias
    pub code: String,
    /// Why formatting failed
    pub error: GlyphError,
}

impl fmt::Display for RewriteWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error converting {}: {}", self.alias, self.error)
    }
}

/// Result of rewriting one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rewrite<'a> {
    /// Rewritten text. Borrowed from the input when nothing was replaced.
    pub text: Cow<'a, str>,
    /// Number of tokens replaced by a glyph
    pub replaced: usize,
    /// Tokens left in place because their code was invalid
    pub warnings: Vec<RewriteWarning>,
}

impl Rewrite<'_> {
    /// Whether any token was replaced.
    pub fn is_changed(&self) -> bool {
        self.replaced > 0
    }

    /// Take the rewritten text.
    pub fn into_text(self) -> String {
        self.text.into_owned()
    }
}

/// Rewrites chat messages against a shared [`EmojiRegistry`].
#[derive(Debug, Clone, Default)]
pub struct ChatRewriter {
    registry: EmojiRegistry,
}

impl ChatRewriter {
    /// Create a rewriter reading from `registry`.
    pub fn new(registry: EmojiRegistry) -> Self {
        Self { registry }
    }

    /// Rewrite a message, returning the new text and any warnings.
    pub fn rewrite<'a>(&self, message: &'a str) -> Rewrite<'a> {
        let mut output: Option<String> = None;
        let mut last_end = 0;
        let mut replaced = 0;
        let mut warnings = Vec::new();

        for token in shortcode_regex().find_iter(message) {
            let alias = token.as_str();
            let Some(code) = self.registry.lookup(alias) else {
                continue;
            };

            match format_glyph(&code) {
                Ok(glyph) => {
                    let out = output.get_or_insert_with(|| String::with_capacity(message.len()));
                    out.push_str(&message[last_end..token.start()]);
                    out.push(glyph.as_char());
                    last_end = token.end();
                    replaced += 1;
                }
                Err(error) => warnings.push(RewriteWarning {
                    alias: alias.to_string(),
                    code,
                    error,
                }),
            }
        }

        let text = match output {
            Some(mut out) => {
                out.push_str(&message[last_end..]);
                Cow::Owned(out)
            }
            None => Cow::Borrowed(message),
        };

        Rewrite {
            text,
            replaced,
            warnings,
        }
    }

    /// Rewrite a message in place, returning any warnings.
    ///
    /// The string is only reassigned when at least one token was replaced.
    pub fn rewrite_in_place(&self, message: &mut String) -> Vec<RewriteWarning> {
        let Rewrite { text, warnings, .. } = self.rewrite(message);
        if let Cow::Owned(rewritten) = text {
            *message = rewritten;
        }
        warnings
    }
}
