//! In-memory suffix array index
//!
//! Provides O(m log n) occurrence queries over a fixed text.

use super::builder::SuffixArrayBuilder;
use super::types::*;
use crate::canon;
use crate::error::Result;
use crate::tables::validate_pattern;
use rayon::prelude::*;
use std::borrow::Cow;
use std::ops::Range;

/// Suffix array over an owned copy of the text
///
/// Immutable once built; share it behind `&` or `Arc` to query from several
/// threads at once.
#[derive(Debug, Clone)]
pub struct SuffixArray {
    /// Indexed text (case-folded if configured)
    text: Vec<u8>,
    /// Suffix start offsets in lexicographic order
    suffixes: Vec<SuffixEntry>,
    config: SuffixArrayConfig,
}

impl SuffixArray {
    /// Build an index with the default configuration
    pub fn new(text: &[u8]) -> Self {
        Self::with_config(text, SuffixArrayConfig::default())
    }

    pub fn with_config(text: &[u8], config: SuffixArrayConfig) -> Self {
        let mut builder = SuffixArrayBuilder::new(config);
        builder.append(text);
        builder.build()
    }

    pub(crate) fn from_parts(
        text: Vec<u8>,
        suffixes: Vec<SuffixEntry>,
        config: SuffixArrayConfig,
    ) -> Self {
        debug_assert_eq!(text.len(), suffixes.len());
        Self {
            text,
            suffixes,
            config,
        }
    }

    /// All start offsets of `pattern`, ascending
    ///
    /// An absent pattern yields an empty vector.
    pub fn lookup_all(&self, pattern: &[u8]) -> Result<Vec<usize>> {
        let range = self.range(pattern)?;
        let mut offsets = self.suffixes[range].to_vec();
        offsets.sort_unstable();
        Ok(offsets)
    }

    /// Run [`lookup_all`](Self::lookup_all) for many patterns on the rayon pool
    pub fn lookup_batch<P: AsRef<[u8]> + Sync>(&self, patterns: &[P]) -> Vec<Result<Vec<usize>>> {
        patterns
            .par_iter()
            .map(|p| self.lookup_all(p.as_ref()))
            .collect()
    }

    /// Range of suffix array slots whose suffixes start with `pattern`
    pub fn range(&self, pattern: &[u8]) -> Result<Range<usize>> {
        validate_pattern(pattern)?;

        let pattern = if self.config.case_insensitive {
            Cow::Owned(canon::preprocess(pattern))
        } else {
            Cow::Borrowed(pattern)
        };

        let lo = self.lower_bound(&pattern);
        let hi = self.upper_bound(&pattern, lo);
        Ok(lo..hi)
    }

    /// Number of occurrences of `pattern`
    pub fn count(&self, pattern: &[u8]) -> Result<usize> {
        Ok(self.range(pattern)?.len())
    }

    /// Check if `pattern` occurs in the text
    pub fn contains(&self, pattern: &[u8]) -> Result<bool> {
        Ok(!self.range(pattern)?.is_empty())
    }

    /// First `pattern.len()` bytes of the suffix at slot `i`, or fewer if the
    /// suffix is shorter
    #[inline]
    fn prefix_at(&self, i: usize, len: usize) -> &[u8] {
        let start = self.suffixes[i];
        let end = (start + len).min(self.text.len());
        &self.text[start..end]
    }

    /// First slot whose truncated suffix is >= pattern
    fn lower_bound(&self, pattern: &[u8]) -> usize {
        let mut lo = 0;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.prefix_at(mid, pattern.len()) < pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// First slot at or after `start` whose truncated suffix is > pattern
    fn upper_bound(&self, pattern: &[u8], start: usize) -> usize {
        let mut lo = start;
        let mut hi = self.suffixes.len();

        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.prefix_at(mid, pattern.len()) <= pattern {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }

        lo
    }

    /// Sorted suffix offsets
    pub fn as_slice(&self) -> &[SuffixEntry] {
        &self.suffixes
    }

    /// Indexed text, after canonicalization if configured
    pub fn text(&self) -> &[u8] {
        &self.text
    }

    pub fn len(&self) -> usize {
        self.suffixes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suffixes.is_empty()
    }

    pub fn config(&self) -> &SuffixArrayConfig {
        &self.config
    }

    /// Get statistics about this suffix array
    pub fn stats(&self) -> SuffixArrayStats {
        SuffixArrayStats {
            text_size: self.text.len(),
            suffix_count: self.suffixes.len(),
            case_insensitive: self.config.case_insensitive,
        }
    }
}
