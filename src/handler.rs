//! Host chat-event hook.
//!
//! A host calls [`ChatHandler::handle_chat`] once per outgoing message with a
//! mutable reference to the text. [`EmojiHandler`] rewrites shortcodes in place
//! and hands every warning to a diagnostics sink; nothing is returned to the
//! host and nothing escapes as an error.

use crate::registry::EmojiRegistry;
use crate::rewriter::{ChatRewriter, RewriteWarning};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Per-event state supplied by the host.
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    /// Display name of the participant sending the message
    pub sender: String,
    cancelled: bool,
}

impl ChatContext {
    /// Create a context for a message from `sender`.
    pub fn new(sender: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            cancelled: false,
        }
    }

    /// Ask the host not to broadcast this message.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether a handler asked for the message to be dropped.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// Chat event hook. The default implementation does nothing.
pub trait ChatHandler: Send + Sync {
    /// Inspect and optionally rewrite an outgoing chat message.
    fn handle_chat(&self, _ctx: &mut ChatContext, _message: &mut String) {}
}

/// Receives warnings produced while rewriting a message.
pub type DiagnosticSink = Arc<dyn Fn(&ChatContext, &RewriteWarning) + Send + Sync>;

fn log_warning(ctx: &ChatContext, warning: &RewriteWarning) {
    log::warn!("{} (message from {:?})", warning, ctx.sender);
}

/// Replaces emoji shortcodes in chat messages with private-use glyphs.
#[derive(Clone)]
pub struct EmojiHandler {
    rewriter: ChatRewriter,
    diagnostics: DiagnosticSink,
}

impl EmojiHandler {
    /// Create a handler that logs warnings through `log::warn!`.
    pub fn new(registry: EmojiRegistry) -> Self {
        Self {
            rewriter: ChatRewriter::new(registry),
            diagnostics: Arc::new(log_warning),
        }
    }

    /// Replace the diagnostics sink.
    ///
    /// A panicking sink is caught and logged; the rewritten message is kept
    /// and later warnings still reach the sink.
    pub fn with_diagnostics<F>(mut self, sink: F) -> Self
    where
        F: Fn(&ChatContext, &RewriteWarning) + Send + Sync + 'static,
    {
        self.diagnostics = Arc::new(sink);
        self
    }
}

impl fmt::Debug for EmojiHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmojiHandler")
            .field("rewriter", &self.rewriter)
            .finish_non_exhaustive()
    }
}

impl ChatHandler for EmojiHandler {
    fn handle_chat(&self, ctx: &mut ChatContext, message: &mut String) {
        for warning in self.rewriter.rewrite_in_place(message) {
            let ctx_ref: &ChatContext = ctx;
            let delivered =
                panic::catch_unwind(AssertUnwindSafe(|| (self.diagnostics)(ctx_ref, &warning)));
            if delivered.is_err() {
                log::error!(
                    "Diagnostics sink panicked while reporting {} ({})",
                    warning.alias,
                    warning.error
                );
            }
        }
    }
}

/// A handler that leaves every message alone.
#[derive(Debug, Clone, Copy, Default)]
pub struct NopHandler;

impl ChatHandler for NopHandler {}
