//! Emoji shortcode rewriting for chat messages.
//!
//! Players type `:smile:`; clients with the matching custom font see a glyph.
//! This crate provides:
//!
//! - [`glyph`]: `E<hex>` codes → characters in U+E000..=U+EFFF
//! - [`registry`]: the shared alias → code table
//! - [`rewriter`]: the substitution pass over a message
//! - [`handler`]: the chat-event hook a host calls per message
//!
//! ```
//! use chat_emoji::{ChatContext, ChatHandler, EmojiHandler, EmojiRegistry};
//!
//! let registry = EmojiRegistry::new();
//! registry.register(":smile:", "E001");
//!
//! let handler = EmojiHandler::new(registry);
//! let mut message = String::from("hi :smile: there");
//! handler.handle_chat(&mut ChatContext::new("steve"), &mut message);
//! assert_eq!(message, "hi \u{E001} there");
//! ```

pub mod cli;
pub mod debug;
pub mod glyph;
pub mod handler;
pub mod registry;
pub mod rewriter;

pub use glyph::{Glyph, GlyphError, format_glyph};
pub use handler::{ChatContext, ChatHandler, DiagnosticSink, EmojiHandler, NopHandler};
pub use registry::{EmojiRegistry, InvalidEmoji, add_emoji, add_emojis};
pub use rewriter::{ChatRewriter, Rewrite, RewriteWarning, tokens};
