//! src/mappers/word_counter.rs
use crate::functions::{Mapper, WordCounts};
use regex::Regex;
use std::sync::LazyLock;

// ASCII word characters only; no locale or Unicode segmentation.
static WORD_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9A-Za-z_]+").expect("word pattern is a valid regex"));

/// Lowercases `text` and returns every maximal run of word characters,
/// duplicates included.
pub fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WORD_REGEX
        .find_iter(&lowered)
        .map(|m| m.as_str().to_string())
        .collect()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct WordCounter;

impl Mapper for WordCounter {
    fn map(&self, fragment: &str) -> WordCounts {
        let mut counts = WordCounts::new();
        for word in tokenize(fragment) {
            *counts.entry(word).or_insert(0) += 1;
        }
        counts
    }
}
