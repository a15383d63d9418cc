//! Byte canonicalization
//!
//! Folds ASCII uppercase letters to lowercase and leaves every other byte
//! untouched, so multi-byte UTF-8 sequences pass through unchanged.
//! [`preprocess`] is the table-driven version used on hot paths;
//! [`simple_preprocess`] is the reference it must agree with.

/// Folding table: `FOLD[b]` is the canonical class of byte `b`
const FOLD: [u8; 256] = build_fold_table();

const fn build_fold_table() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = i as u8;
        table[i] = if b >= b'A' && b <= b'Z' { b + 32 } else { b };
        i += 1;
    }
    table
}

/// Canonical class of a single byte
#[inline]
pub fn class_of(byte: u8) -> u8 {
    FOLD[byte as usize]
}

/// Canonicalize a byte sequence using the folding table
pub fn preprocess(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(|&b| FOLD[b as usize]).collect()
}

/// Reference canonicalization
pub fn simple_preprocess(bytes: &[u8]) -> Vec<u8> {
    bytes.iter().map(u8::to_ascii_lowercase).collect()
}
