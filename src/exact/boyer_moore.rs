//! Boyer-Moore family
//!
//! Both functions report the same match set. `boyer_moore` applies the
//! bad-character rule at the mismatching position; `boyer_moore_fast` is a
//! Horspool scan that uses memchr to jump between occurrences of the final
//! pattern byte before touching the shift table.

use crate::error::Result;
use crate::tables::{validate_pattern, BadCharTable};
use memchr::memchr;

/// Right-to-left window comparison with bad-character shifts
pub fn boyer_moore<F: FnMut(usize)>(pattern: &[u8], text: &[u8], mut on_match: F) -> Result<()> {
    validate_pattern(pattern)?;
    let m = pattern.len();
    let n = text.len();
    if m > n {
        return Ok(());
    }

    let table = BadCharTable::new(pattern);
    let mut s = 0;

    while s <= n - m {
        let mut j = m;
        while j > 0 && pattern[j - 1] == text[s + j - 1] {
            j -= 1;
        }

        if j == 0 {
            on_match(s);
            s += table.shift(text[s + m - 1]);
        } else {
            // mismatch at pattern[j - 1]; align the last occurrence of the
            // offending byte with it, never moving backwards
            let bad = text[s + j - 1];
            let suffix_len = m - j;
            s += table.shift(bad).saturating_sub(suffix_len).max(1);
        }
    }

    Ok(())
}

/// Horspool scan with a memchr skip loop on the final pattern byte
pub fn boyer_moore_fast<F: FnMut(usize)>(
    pattern: &[u8],
    text: &[u8],
    mut on_match: F,
) -> Result<()> {
    validate_pattern(pattern)?;
    let m = pattern.len();
    let n = text.len();
    if m > n {
        return Ok(());
    }

    let table = BadCharTable::new(pattern);
    let last = pattern[m - 1];
    let head = &pattern[..m - 1];
    let mut s = 0;

    while s <= n - m {
        let end = s + m - 1;
        if text[end] != last {
            // no window can match until its last byte equals `last`
            match memchr(last, &text[end..]) {
                Some(offset) => s += offset,
                None => break,
            }
            continue;
        }

        if &text[s..end] == head {
            on_match(s);
        }
        s += table.shift(last);
    }

    Ok(())
}
