//! src/functions.rs
use std::collections::HashMap;

pub type Word = String;
pub type Count = u64;

/// Occurrence count per normalized word.
pub type WordCounts = HashMap<Word, Count>;

/// The map side: turns one fragment of text into partial counts.
///
/// Implementations run on worker threads and must not share mutable state;
/// everything they produce goes through the returned map.
pub trait Mapper: Send + Sync + 'static {
    fn map(&self, fragment: &str) -> WordCounts;
}

/// The reduce side: folds any number of partial counts into one.
pub trait Reducer {
    fn reduce<I>(&self, partials: I) -> WordCounts
    where
        I: IntoIterator<Item = WordCounts>;
}
