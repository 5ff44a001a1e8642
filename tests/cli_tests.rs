//! Integration tests for the command-line helpers.
//!
//! A config file on disk is loaded, turned into a registry, and fed through the
//! same helpers the `chat-emoji` binary uses.

use chat_emoji::cli::{rewrite_lines, write_check, write_listing};
use chat_emoji::{EmojiHandler, EmojiRegistry};
use chat_emoji_config::EmojiConfig;
use std::fs;
use std::io::Cursor;
use tempfile::TempDir;

fn registry_from_yaml(yaml: &str) -> (TempDir, EmojiRegistry) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("emojis.yaml");
    fs::write(&path, yaml).expect("Failed to write config");
    let config = EmojiConfig::load_from(&path).expect("Failed to load config");
    (temp_dir, EmojiRegistry::from_config(&config))
}

#[test]
fn config_file_drives_rewrite() {
    let (_dir, registry) = registry_from_yaml(
        "emojis:\n  \":smile:\": E001\n  \":a:\": E010\n  \":bad:\": ZZZZ\n",
    );
    let handler = EmojiHandler::new(registry);

    let input = Cursor::new("hi :smile: there\n:a: and :b:\nsay :bad: now\nno tokens here\n");
    let mut output = Vec::new();
    rewrite_lines(&handler, "console", input, &mut output).expect("rewrite failed");

    assert_eq!(
        String::from_utf8(output).unwrap(),
        "hi \u{E001} there\n\u{E010} and :b:\nsay :bad: now\nno tokens here\n"
    );
}

#[test]
fn listing_is_sorted_by_alias() {
    let (_dir, registry) = registry_from_yaml("emojis:\n  \":zz:\": E00F\n  \":aa:\": E00E\n");
    let mut output = Vec::new();
    write_listing(&registry, &mut output).expect("listing failed");

    let text = String::from_utf8(output).unwrap();
    let aliases: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split('\t').next())
        .collect();
    assert_eq!(aliases, vec![":aa:", ":zz:"]);
}

#[test]
fn check_passes_for_clean_config() {
    let (_dir, registry) = registry_from_yaml("emojis:\n  \":ok:\": EFFF\n");
    let mut output = Vec::new();
    assert!(write_check(&registry, &mut output).expect("check failed"));
    assert_eq!(String::from_utf8(output).unwrap(), "1 of 1 emoji codes valid\n");
}

#[test]
fn check_fails_for_out_of_range_code() {
    let (_dir, registry) = registry_from_yaml("emojis:\n  \":big:\": E1000\n");
    let mut output = Vec::new();
    assert!(!write_check(&registry, &mut output).expect("check failed"));
    assert!(
        String::from_utf8(output)
            .unwrap()
            .starts_with(":big:\tE1000\temoji code \"E1000\" is out of the private use area")
    );
}
