//! src/reducers/adder.rs
use crate::functions::{Reducer, WordCounts};

/// Adds every count in `other` onto `total`; missing words count as zero.
pub fn merge_into(total: &mut WordCounts, other: WordCounts) {
    for (word, count) in other {
        *total.entry(word).or_insert(0) += count;
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct Adder;

impl Reducer for Adder {
    fn reduce<I>(&self, partials: I) -> WordCounts
    where
        I: IntoIterator<Item = WordCounts>,
    {
        partials.into_iter().fold(WordCounts::new(), |mut total, partial| {
            // Fold the smaller map into the larger one.
            if partial.len() > total.len() {
                let smaller = std::mem::replace(&mut total, partial);
                merge_into(&mut total, smaller);
            } else {
                merge_into(&mut total, partial);
            }
            total
        })
    }
}
