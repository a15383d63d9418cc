//! Dictionary word splitting
//!
//! Scores each dictionary word by how often it appears as one half of a
//! two-way split of another dictionary word whose other half is also a word.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::Serialize;
use std::cmp::Reverse;

/// A word and the number of splits it took part in
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordScore {
    pub word: String,
    pub points: u32,
}

/// Every split of `word` into two non-empty halves, at char boundaries
pub fn split(word: &str) -> Vec<(&str, &str)> {
    word.char_indices()
        .skip(1)
        .map(|(i, _)| word.split_at(i))
        .collect()
}

/// Score words that appear as both halves of a split
///
/// Whenever both halves of a split of some word are themselves words, each
/// half earns a point. Words with no points are left out. The result is
/// ordered by points descending, then by word.
pub fn score_words<S: AsRef<str>>(words: &[S]) -> Vec<WordScore> {
    let dictionary: FxHashSet<&str> = words
        .iter()
        .map(|w| w.as_ref())
        .filter(|w| !w.is_empty())
        .collect();

    let mut points: FxHashMap<&str, u32> = FxHashMap::default();
    for word in words {
        for (left, right) in split(word.as_ref()) {
            if dictionary.contains(left) && dictionary.contains(right) {
                *points.entry(left).or_default() += 1;
                *points.entry(right).or_default() += 1;
            }
        }
    }

    let mut scores: Vec<WordScore> = points
        .into_iter()
        .map(|(word, points)| WordScore {
            word: word.to_string(),
            points,
        })
        .collect();
    scores.sort_by(|a, b| (Reverse(a.points), &a.word).cmp(&(Reverse(b.points), &b.word)));
    scores
}
