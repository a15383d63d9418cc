use crate::error::Result;
use crate::tables::{failure_function, validate_pattern};

/// Knuth-Morris-Pratt
///
/// `q` is the length of the pattern prefix matched so far. On a mismatch the
/// failure function shortens `q`; the text index only moves forward.
pub fn kmp<F: FnMut(usize)>(pattern: &[u8], text: &[u8], mut on_match: F) -> Result<()> {
    validate_pattern(pattern)?;
    let m = pattern.len();
    if m > text.len() {
        return Ok(());
    }

    let fail = failure_function(pattern);
    let mut q = 0;

    for (i, &c) in text.iter().enumerate() {
        while q > 0 && pattern[q] != c {
            q = fail[q];
        }
        if pattern[q] == c {
            q += 1;
        }
        if q == m {
            on_match(i + 1 - m);
            q = fail[m];
        }
    }

    Ok(())
}
