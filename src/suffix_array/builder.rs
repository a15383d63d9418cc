//! Suffix array builder
//!
//! Builds a suffix array by prefix doubling:
//! 1. Rank every suffix by its first byte
//! 2. Repeatedly sort by (rank of first k bytes, rank of next k bytes)
//! 3. Stop once every suffix has a distinct rank
//!
//! Each round is one sort, run on rayon for large texts, so the whole build
//! is O(n log^2 n) regardless of how repetitive the text is.

use super::index::SuffixArray;
use super::types::*;
use crate::canon;
use rayon::prelude::*;
use std::time::Instant;

/// Builder for constructing a suffix array from one or more text chunks
pub struct SuffixArrayBuilder {
    config: SuffixArrayConfig,
    /// Accumulated text (case-folded if configured)
    text: Vec<u8>,
}

impl SuffixArrayBuilder {
    /// Create a new suffix array builder with the given configuration
    pub fn new(config: SuffixArrayConfig) -> Self {
        Self {
            config,
            text: Vec::new(),
        }
    }

    /// Create a builder with default configuration
    pub fn with_defaults() -> Self {
        Self::new(SuffixArrayConfig::default())
    }

    /// Append bytes to the text being indexed
    pub fn append(&mut self, bytes: &[u8]) -> &mut Self {
        if self.config.case_insensitive {
            self.text.extend(bytes.iter().map(|&b| canon::class_of(b)));
        } else {
            self.text.extend_from_slice(bytes);
        }
        self
    }

    /// Get the current size of accumulated text
    pub fn text_size(&self) -> usize {
        self.text.len()
    }

    /// Sort all suffixes and produce the index
    pub fn build(self) -> SuffixArray {
        let started = Instant::now();
        let parallel = self.text.len() >= self.config.parallel_threshold;
        let (suffixes, rounds) = build_suffix_array(&self.text, parallel);

        tracing::debug!(
            text_size = self.text.len(),
            rounds,
            parallel,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built suffix array"
        );

        SuffixArray::from_parts(self.text, suffixes, self.config)
    }
}

/// Sort all suffix offsets of `text` lexicographically
///
/// Returns the suffix array and the number of doubling rounds used.
pub(crate) fn build_suffix_array(text: &[u8], parallel: bool) -> (Vec<SuffixEntry>, u32) {
    let n = text.len();
    if n == 0 {
        return (Vec::new(), 0);
    }

    let mut sa: Vec<SuffixEntry> = (0..n).collect();
    let mut rank: Vec<usize> = text.iter().map(|&b| b as usize).collect();
    let mut next_rank = vec![0usize; n];
    let mut k = 1;
    let mut rounds = 0;

    loop {
        rounds += 1;

        // Suffixes that run out before k bytes sort before any continuation
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });

        if parallel {
            sa.par_sort_unstable_by_key(|&i| key(i));
        } else {
            sa.sort_unstable_by_key(|&i| key(i));
        }

        next_rank[sa[0]] = 0;
        for w in 1..n {
            let bump = usize::from(key(sa[w]) != key(sa[w - 1]));
            next_rank[sa[w]] = next_rank[sa[w - 1]] + bump;
        }
        std::mem::swap(&mut rank, &mut next_rank);

        if rank[sa[n - 1]] == n - 1 || k >= n {
            break;
        }
        k *= 2;
    }

    (sa, rounds)
}
