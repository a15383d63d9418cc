use crate::error::Result;
use crate::tables::validate_pattern;

/// Compare left to right at every offset, stopping at the first difference
pub fn naive<F: FnMut(usize)>(pattern: &[u8], text: &[u8], mut on_match: F) -> Result<()> {
    validate_pattern(pattern)?;
    let m = pattern.len();
    if m > text.len() {
        return Ok(());
    }

    for s in 0..=text.len() - m {
        let mut j = 0;
        while j < m && text[s + j] == pattern[j] {
            j += 1;
        }
        if j == m {
            on_match(s);
        }
    }

    Ok(())
}

/// Compare right to left at every offset
pub fn backward_naive<F: FnMut(usize)>(pattern: &[u8], text: &[u8], mut on_match: F) -> Result<()> {
    validate_pattern(pattern)?;
    let m = pattern.len();
    if m > text.len() {
        return Ok(());
    }

    for s in 0..=text.len() - m {
        let mut j = m;
        while j > 0 && text[s + j - 1] == pattern[j - 1] {
            j -= 1;
        }
        if j == 0 {
            on_match(s);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_and_backward_agree() {
        let text = b"Julia i Winston, Julia, Julianna";
        let mut forward = Vec::new();
        let mut backward = Vec::new();
        naive(b"Julia", text, |i| forward.push(i)).unwrap();
        backward_naive(b"Julia", text, |i| backward.push(i)).unwrap();
        assert_eq!(forward, vec![0, 17, 24]);
        assert_eq!(forward, backward);
    }

    #[test]
    fn test_single_byte() {
        let mut out = Vec::new();
        naive(b"a", b"banana", |i| out.push(i)).unwrap();
        assert_eq!(out, vec![1, 3, 5]);

        out.clear();
        backward_naive(b"a", b"banana", |i| out.push(i)).unwrap();
        assert_eq!(out, vec![1, 3, 5]);
    }
}
