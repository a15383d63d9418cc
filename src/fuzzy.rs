//! Bounded-error Shift-Or
//!
//! Both variants keep `k + 1` state words. Row `d` has bit `j` cleared when
//! `pattern[..=j]` can be aligned with text ending at the current byte using
//! at most `d` errors. A match is reported when row `k` clears bit `m - 1`.
//!
//! Reported offsets are exclusive end positions. For [`hamming`] the matched
//! window is exactly `text[end - m..end]`; for [`edit`] it may be up to `k`
//! bytes longer or shorter, see [`approximate_span`].

use crate::error::Result;
use crate::tables::{accept_bit, validate_word_pattern, ShiftOrMasks};
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Which error model to tolerate
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum FuzzyMode {
    /// Substitutions only
    #[default]
    Hamming,
    /// Substitutions, insertions and deletions
    Edit,
}

impl FuzzyMode {
    pub fn search<F: FnMut(usize)>(
        self,
        pattern: &[u8],
        text: &[u8],
        max_errors: usize,
        on_match: F,
    ) -> Result<()> {
        match self {
            FuzzyMode::Hamming => hamming(pattern, text, max_errors, on_match),
            FuzzyMode::Edit => edit(pattern, text, max_errors, on_match),
        }
    }

    /// Collect all match end offsets in ascending order
    pub fn find_all(self, pattern: &[u8], text: &[u8], max_errors: usize) -> Result<Vec<usize>> {
        let mut found = Vec::new();
        self.search(pattern, text, max_errors, |end| found.push(end))?;
        Ok(found)
    }

    /// Text range covering a match reported at `end`
    pub fn span(
        self,
        end: usize,
        pattern_len: usize,
        max_errors: usize,
        text_len: usize,
    ) -> Range<usize> {
        match self {
            FuzzyMode::Hamming => end.saturating_sub(pattern_len)..end,
            FuzzyMode::Edit => approximate_span(end, pattern_len, max_errors, text_len),
        }
    }
}

/// Pattern with at most `max_errors` substituted bytes
pub fn hamming<F: FnMut(usize)>(
    pattern: &[u8],
    text: &[u8],
    max_errors: usize,
    mut on_match: F,
) -> Result<()> {
    validate_word_pattern(pattern)?;
    let m = pattern.len();
    if m > text.len() {
        return Ok(());
    }
    // m errors already accept every window
    let max_errors = max_errors.min(m);

    let masks = ShiftOrMasks::new(pattern);
    let accept = accept_bit(m);
    let mut rows = vec![!0u64; max_errors + 1];

    for (i, &c) in text.iter().enumerate() {
        let mask = masks.mask(c);
        let mut prev_old = rows[0];
        rows[0] = (rows[0] << 1) | mask;

        for d in 1..=max_errors {
            let old = rows[d];
            // match on row d, or substitute from row d - 1
            rows[d] = ((old << 1) | mask) & (prev_old << 1);
            prev_old = old;
        }

        if rows[max_errors] & accept == 0 {
            on_match(i + 1);
        }
    }

    Ok(())
}

/// Pattern within edit distance `max_errors` of some substring ending at
/// the reported offset
pub fn edit<F: FnMut(usize)>(
    pattern: &[u8],
    text: &[u8],
    max_errors: usize,
    mut on_match: F,
) -> Result<()> {
    validate_word_pattern(pattern)?;
    let m = pattern.len();
    // m errors already accept every end offset
    let max_errors = max_errors.min(m);
    let masks = ShiftOrMasks::new(pattern);
    let accept = accept_bit(m);

    // row d starts with its first d pattern bytes deleted
    let mut rows: Vec<u64> = (0..=max_errors)
        .map(|d| (!0u64).checked_shl(d as u32).unwrap_or(0))
        .collect();

    for (i, &c) in text.iter().enumerate() {
        let mask = masks.mask(c);
        let mut prev_old = rows[0];
        rows[0] = (rows[0] << 1) | mask;

        for d in 1..=max_errors {
            let old = rows[d];
            let prev_new = rows[d - 1];
            rows[d] = ((old << 1) | mask) // match
                & (prev_old << 1)         // substitution
                & (prev_new << 1)         // deletion from the pattern
                & prev_old; // insertion into the pattern
            prev_old = old;
        }

        if rows[max_errors] & accept == 0 {
            on_match(i + 1);
        }
    }

    Ok(())
}

/// Widened text range for an edit-bounded match ending at `end`
///
/// `end` is exclusive: it is the offset one past the last text byte of the
/// occurrence, as reported by [`edit`]. The returned range is half-open too,
/// so it is `[end - m - k, end)`. Insertions can stretch the occurrence to
/// `m + k` bytes, hence the start. Both bounds are clamped to the text.
pub fn approximate_span(
    end: usize,
    pattern_len: usize,
    max_errors: usize,
    text_len: usize,
) -> Range<usize> {
    let end = end.min(text_len);
    end.saturating_sub(pattern_len.saturating_add(max_errors))..end
}
