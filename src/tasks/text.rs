// src/tasks/text.rs - Text drills: word and character frequencies, Caesar cipher

use std::collections::BTreeMap;

use crate::infra::config::WordsConfig;

/// Word frequencies in sorted key order.
pub fn word_frequencies(text: &str, opts: &WordsConfig) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for word in text.split_whitespace() {
        let word = if opts.strip_punctuation {
            word.trim_matches(|c: char| c.is_ascii_punctuation())
        } else {
            word
        };
        if word.is_empty() {
            continue;
        }
        let key = if opts.case_sensitive {
            word.to_string()
        } else {
            word.to_lowercase()
        };
        *counts.entry(key).or_insert(0) += 1;
    }
    counts
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Frequencies of every non-whitespace character.
pub fn char_frequencies(text: &str) -> BTreeMap<char, usize> {
    let mut counts = BTreeMap::new();
    for c in text.chars().filter(|c| !c.is_whitespace()) {
        *counts.entry(c).or_insert(0) += 1;
    }
    counts
}

/// Shift ASCII letters by `shift` places within their case; everything else
/// passes through.
pub fn caesar(text: &str, shift: i64) -> String {
    let shift = shift.rem_euclid(26) as u8;
    text.chars()
        .map(|c| match c {
            'a'..='z' => rotate(c, b'a', shift),
            'A'..='Z' => rotate(c, b'A', shift),
            _ => c,
        })
        .collect()
}

fn rotate(c: char, base: u8, shift: u8) -> char {
    (base + (c as u8 - base + shift) % 26) as char
}
