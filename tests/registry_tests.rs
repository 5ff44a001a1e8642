//! Integration tests for the alias registry, including the process-wide
//! registration functions and concurrent access.

use chat_emoji::{ChatRewriter, EmojiRegistry, add_emoji, add_emojis, registry};
use std::collections::HashMap;
use std::thread;

// ---------------------------------------------------------------------------
// Process-wide registry
// ---------------------------------------------------------------------------

#[test]
fn add_emoji_registers_globally() {
    add_emoji(":global_one:", "E0A1");
    assert_eq!(
        registry::global().lookup(":global_one:").as_deref(),
        Some("E0A1")
    );
}

#[test]
fn add_emojis_registers_every_entry() {
    let emojis: HashMap<String, String> = [
        (":global_two:".to_string(), "E0A2".to_string()),
        (":global_three:".to_string(), "E0A3".to_string()),
    ]
    .into_iter()
    .collect();
    add_emojis(emojis);

    let rewriter = ChatRewriter::new(registry::global().clone());
    assert_eq!(
        rewriter.rewrite(":global_two::global_three:").text,
        "\u{E0A2}\u{E0A3}"
    );
}

#[test]
fn global_last_write_wins() {
    add_emoji(":global_dup:", "E001");
    add_emoji(":global_dup:", "E002");
    assert_eq!(
        registry::global().lookup(":global_dup:").as_deref(),
        Some("E002")
    );
}

// ---------------------------------------------------------------------------
// Concurrency
// ---------------------------------------------------------------------------

#[test]
fn concurrent_registration_and_rewrite() {
    let registry = EmojiRegistry::new();
    registry.register(":stable:", "E001");

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let registry = registry.clone();
            thread::spawn(move || {
                for i in 0..250 {
                    registry.register(format!(":w{w}_{i}:"), format!("E{:X}", i));
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let rewriter = ChatRewriter::new(registry.clone());
            thread::spawn(move || {
                for _ in 0..250 {
                    let rewrite = rewriter.rewrite("x :stable: :w0_1: y");
                    assert!(rewrite.text.starts_with("x \u{E001} "));
                    assert!(rewrite.warnings.is_empty());
                }
            })
        })
        .collect();

    for handle in writers.into_iter().chain(readers) {
        handle.join().expect("thread panicked");
    }

    assert_eq!(registry.len(), 1 + 4 * 250);
    assert_eq!(registry.lookup(":w3_249:").as_deref(), Some("EF9"));
}
