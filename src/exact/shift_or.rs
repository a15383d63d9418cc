use crate::error::Result;
use crate::tables::{accept_bit, validate_word_pattern, ShiftOrMasks};

/// Shift-Or
///
/// Bit `j` of `state` is 0 while `pattern[..=j]` matches the text ending at
/// the current byte. Patterns longer than 64 bytes are rejected up front.
pub fn shift_or<F: FnMut(usize)>(pattern: &[u8], text: &[u8], mut on_match: F) -> Result<()> {
    validate_word_pattern(pattern)?;
    let m = pattern.len();
    if m > text.len() {
        return Ok(());
    }

    let masks = ShiftOrMasks::new(pattern);
    let accept = accept_bit(m);
    let mut state = !0u64;

    for (i, &c) in text.iter().enumerate() {
        state = (state << 1) | masks.mask(c);
        if state & accept == 0 {
            on_match(i + 1 - m);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchError;

    #[test]
    fn test_too_long_rejected_before_scan() {
        let pattern = vec![b'a'; 65];
        let text = vec![b'a'; 100];
        let mut called = false;
        let res = shift_or(&pattern, &text, |_| called = true);
        assert_eq!(res, Err(MatchError::UnsupportedPatternLength { len: 65, max: 64 }));
        assert!(!called);
    }

    #[test]
    fn test_full_word_pattern() {
        let pattern = vec![b'a'; 64];
        let text = vec![b'a'; 66];
        let mut out = Vec::new();
        shift_or(&pattern, &text, |i| out.push(i)).unwrap();
        assert_eq!(out, vec![0, 1, 2]);
    }
}
