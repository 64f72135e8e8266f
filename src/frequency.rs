//! src/frequency.rs
use crate::functions::{Count, Word, WordCounts};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordFrequency {
    pub word: Word,
    pub count: Count,
}

/// Final word counts of a run. Read-only once built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: WordCounts,
}

impl FrequencyTable {
    pub fn new(counts: WordCounts) -> Self {
        Self { counts }
    }

    pub fn get(&self, word: &str) -> Option<Count> {
        self.counts.get(word).copied()
    }

    pub fn distinct_words(&self) -> usize {
        self.counts.len()
    }

    pub fn total_words(&self) -> Count {
        self.counts.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Count)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }

    /// The `k` most frequent words, highest count first. Equal counts are
    /// ordered alphabetically so the selection is deterministic.
    pub fn top(&self, k: usize) -> Vec<WordFrequency> {
        let mut entries: Vec<(&Word, &Count)> = self.counts.iter().collect();
        entries.sort_unstable_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
        entries
            .into_iter()
            .take(k)
            .map(|(word, count)| WordFrequency {
                word: word.clone(),
                count: *count,
            })
            .collect()
    }
}

impl From<WordCounts> for FrequencyTable {
    fn from(counts: WordCounts) -> Self {
        Self::new(counts)
    }
}
