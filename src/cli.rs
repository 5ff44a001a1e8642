//! Command-line interface for chat-emoji.
//!
//! Loads an emoji config, registers it process-wide, and runs one of the
//! subcommands against it. Rewritten text goes to stdout; logs go to stderr.

use crate::glyph::format_glyph;
use crate::handler::{ChatContext, ChatHandler, EmojiHandler};
use crate::registry::{self, EmojiRegistry};
use anyhow::{Context, Result};
use chat_emoji_config::{EmojiConfig, LogLevel};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// chat-emoji - replace :shortcodes: with private-use emoji glyphs
#[derive(Parser)]
#[command(name = "chat-emoji")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Emoji config file (.yaml, .yml, .toml or .json); defaults to ~/.config/chat-emoji/emojis.yaml
    #[arg(long, short, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Log verbosity (off, error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite the given text, or each line of stdin when no text is given
    Rewrite {
        /// Sender name attached to each message
        #[arg(long, default_value = "console")]
        sender: String,

        /// Message text (joined with spaces)
        text: Vec<String>,
    },
    /// List every registered alias with its code and glyph
    List,
    /// Check every registered code; exits with status 1 if any is invalid
    Check,
}

/// Run the parsed command line, returning the process exit code.
pub fn run(cli: Cli) -> Result<i32> {
    crate::debug::init_log_bridge(crate::debug::resolve_level(
        cli.log_level,
        LogLevel::default(),
    ));

    let config = match &cli.config {
        Some(path) => EmojiConfig::load_from(path)
            .with_context(|| format!("Failed to load emoji config from {}", path.display()))?,
        None => EmojiConfig::load().context("Failed to load emoji config")?,
    };
    crate::debug::init_log_bridge(crate::debug::resolve_level(
        cli.log_level,
        config.log_level,
    ));

    registry::add_emojis(config.emojis);
    let registry = registry::global();
    log::info!("{} emoji aliases registered", registry.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Rewrite { sender, text } => {
            let handler = EmojiHandler::new(registry.clone());
            if text.is_empty() {
                let stdin = io::stdin();
                rewrite_lines(&handler, &sender, stdin.lock(), &mut out)?;
            } else {
                let mut ctx = ChatContext::new(sender);
                let mut message = text.join(" ");
                handler.handle_chat(&mut ctx, &mut message);
                writeln!(out, "{message}")?;
            }
            Ok(0)
        }
        Commands::List => {
            write_listing(registry, &mut out)?;
            Ok(0)
        }
        Commands::Check => Ok(if write_check(registry, &mut out)? { 0 } else { 1 }),
    }
}

/// Pass every input line through `handler` and write the result.
///
/// Invalid UTF-8 is replaced with U+FFFD rather than ending the run. Lines
/// whose context is cancelled by the handler are dropped.
pub fn rewrite_lines<R: BufRead, W: Write>(
    handler: &dyn ChatHandler,
    sender: &str,
    mut input: R,
    output: &mut W,
) -> io::Result<()> {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = buf
            .strip_suffix(b"\n")
            .map(|l| l.strip_suffix(b"\r").unwrap_or(l))
            .unwrap_or(buf.as_slice());
        let mut message = match String::from_utf8(line.to_vec()) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Input line is not valid UTF-8: {}", e.utf8_error());
                String::from_utf8_lossy(line).into_owned()
            }
        };
        let mut ctx = ChatContext::new(sender);
        handler.handle_chat(&mut ctx, &mut message);
        if !ctx.is_cancelled() {
            writeln!(output, "{message}")?;
        }
    }
    Ok(())
}

/// Write one `alias<TAB>code<TAB>result` line per registered alias, sorted by alias.
///
/// The result is the glyph, its canonical code and codepoint, or the error.
pub fn write_listing<W: Write>(registry: &EmojiRegistry, output: &mut W) -> io::Result<()> {
    for (alias, code) in registry.snapshot() {
        match format_glyph(&code) {
            Ok(glyph) => writeln!(
                output,
                "{alias}\t{code}\t{glyph} {} U+{:04X}",
                glyph.code(),
                glyph.codepoint()
            )?,
            Err(e) => writeln!(output, "{alias}\t{code}\t{e}")?,
        }
    }
    Ok(())
}

/// Report invalid codes as `alias<TAB>code<TAB>error` lines followed by a
/// summary. Returns `true` when every code is valid.
pub fn write_check<W: Write>(registry: &EmojiRegistry, output: &mut W) -> io::Result<bool> {
    let invalid = registry.validate();
    for entry in &invalid {
        writeln!(output, "{}\t{}\t{}", entry.alias, entry.code, entry.error)?;
    }
    writeln!(
        output,
        "{} of {} emoji codes valid",
        registry.len() - invalid.len(),
        registry.len()
    )?;
    Ok(invalid.is_empty())
}
