use crate::error::Result;
use crate::tables::{validate_pattern, RollingHash, KARP_RABIN_MODULUS};

/// Karp-Rabin with the default modulus
pub fn karp_rabin<F: FnMut(usize)>(pattern: &[u8], text: &[u8], on_match: F) -> Result<()> {
    karp_rabin_with_modulus(pattern, text, KARP_RABIN_MODULUS, on_match)
}

/// Karp-Rabin over an explicit modulus
///
/// Equal hashes are only candidates: the window is compared byte by byte
/// before it is reported, so any modulus yields the exact match set. Small
/// moduli only cost verification time.
pub fn karp_rabin_with_modulus<F: FnMut(usize)>(
    pattern: &[u8],
    text: &[u8],
    modulus: u64,
    mut on_match: F,
) -> Result<()> {
    validate_pattern(pattern)?;
    let m = pattern.len();
    let n = text.len();
    if m > n {
        return Ok(());
    }

    let rolling = RollingHash::new(m, modulus.max(1));
    let target = rolling.hash(pattern);
    let mut window = rolling.hash(&text[..m]);

    for s in 0..=n - m {
        if s > 0 {
            window = rolling.roll(window, text[s - 1], text[s + m - 1]);
        }
        if window == target && &text[s..s + m] == pattern {
            on_match(s);
        }
    }

    Ok(())
}
