//! Preprocessing tables
//!
//! Every table here is a pure function of the pattern. Matchers build a fresh
//! table at the start of each search and drop it when the scan ends.
//!
//! - [`BadCharTable`] - Boyer-Moore / Horspool shifts
//! - [`failure_function`] - KMP prefix-suffix lengths
//! - [`ShiftOrMasks`] - per-byte bitmasks for Shift-Or and the fuzzy variants
//! - [`RollingHash`] - Karp-Rabin window hash

use crate::error::{MatchError, Result};

/// Width of the bit-parallel state word
pub const WORD_BITS: usize = u64::BITS as usize;

/// Reject patterns with undefined match semantics
#[inline]
pub fn validate_pattern(pattern: &[u8]) -> Result<()> {
    if pattern.is_empty() {
        tracing::trace!("rejecting empty pattern");
        return Err(MatchError::InvalidPattern);
    }
    Ok(())
}

/// Validate a pattern for the bit-parallel algorithms (one `u64` per row)
#[inline]
pub fn validate_word_pattern(pattern: &[u8]) -> Result<()> {
    validate_pattern(pattern)?;
    if pattern.len() > WORD_BITS {
        tracing::trace!(len = pattern.len(), "pattern wider than state word");
        return Err(MatchError::UnsupportedPatternLength {
            len: pattern.len(),
            max: WORD_BITS,
        });
    }
    Ok(())
}

/// Bad-character shift table
///
/// For each byte, the distance from its last occurrence in `pattern[..m-1]`
/// to the end of the pattern. Bytes that do not occur there map to `m`.
/// The final pattern byte is left out so that every shift is at least 1.
pub struct BadCharTable {
    shifts: [usize; 256],
}

impl BadCharTable {
    pub fn new(pattern: &[u8]) -> Self {
        let m = pattern.len();
        let mut shifts = [m; 256];
        for (j, &b) in pattern.iter().enumerate().take(m.saturating_sub(1)) {
            shifts[b as usize] = m - 1 - j;
        }
        Self { shifts }
    }

    #[inline]
    pub fn shift(&self, byte: u8) -> usize {
        self.shifts[byte as usize]
    }
}

/// KMP failure function
///
/// Returns `m + 1` entries. `f[i]` for `i > 0` is the length of the longest
/// proper prefix of `pattern[..i]` that is also a suffix of it; `f[0] = 0`.
pub fn failure_function(pattern: &[u8]) -> Vec<usize> {
    let m = pattern.len();
    let mut f = vec![0usize; m + 1];
    let mut k = 0;

    for i in 1..m {
        while k > 0 && pattern[i] != pattern[k] {
            k = f[k];
        }
        if pattern[i] == pattern[k] {
            k += 1;
        }
        f[i + 1] = k;
    }

    f
}

/// Shift-Or bitmask table
///
/// Bit `j` of `mask(b)` is 0 iff `pattern[j] == b`. Bits at or above the
/// pattern length are always 1.
pub struct ShiftOrMasks {
    masks: [u64; 256],
}

impl ShiftOrMasks {
    /// Callers validate the pattern width first.
    pub fn new(pattern: &[u8]) -> Self {
        debug_assert!(pattern.len() <= WORD_BITS);
        let mut masks = [!0u64; 256];
        for (j, &b) in pattern.iter().enumerate() {
            masks[b as usize] &= !(1u64 << j);
        }
        Self { masks }
    }

    #[inline]
    pub fn mask(&self, byte: u8) -> u64 {
        self.masks[byte as usize]
    }
}

/// Bit that signals an accepting state for a pattern of length `m`
#[inline]
pub fn accept_bit(m: usize) -> u64 {
    1u64 << (m - 1)
}

/// Default Karp-Rabin modulus (a prime below 2^31, so products fit in u64)
pub const KARP_RABIN_MODULUS: u64 = 2_147_483_647;

/// Karp-Rabin hash base (one step per byte value)
pub const KARP_RABIN_BASE: u64 = 256;

/// `a * b mod q` without overflow for any `q`
#[inline]
fn mul_mod(a: u64, b: u64, q: u64) -> u64 {
    ((a as u128 * b as u128) % q as u128) as u64
}

/// Polynomial rolling hash over windows of a fixed length
#[derive(Debug, Clone, Copy)]
pub struct RollingHash {
    modulus: u64,
    /// `BASE^(m-1) mod q`, the weight of the leading byte
    lead_power: u64,
}

impl RollingHash {
    pub fn new(window: usize, modulus: u64) -> Self {
        debug_assert!(modulus > 0);
        let mut lead_power = 1 % modulus;
        for _ in 1..window {
            lead_power = mul_mod(lead_power, KARP_RABIN_BASE, modulus);
        }
        Self { modulus, lead_power }
    }

    /// Weight of the leading byte of a window
    #[inline]
    pub fn lead_power(&self) -> u64 {
        self.lead_power
    }

    /// Hash of a whole window
    pub fn hash(&self, bytes: &[u8]) -> u64 {
        bytes.iter().fold(0, |h, &b| self.push(h, b))
    }

    /// Slide the window one byte: drop `out`, append `incoming`
    #[inline]
    pub fn roll(&self, hash: u64, out: u8, incoming: u8) -> u64 {
        let q = self.modulus;
        let lead = mul_mod(out as u64, self.lead_power, q);
        let without = ((hash as u128 + q as u128 - lead as u128) % q as u128) as u64;
        self.push(without, incoming)
    }

    /// Append one byte to a window hash
    #[inline]
    fn push(&self, hash: u64, byte: u8) -> u64 {
        let q = self.modulus as u128;
        ((hash as u128 * KARP_RABIN_BASE as u128 + byte as u128) % q) as u64
    }
}
