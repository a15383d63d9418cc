//! Exact substring matchers
//!
//! All matchers share one contract:
//!
//! ```
//! use strmatch::exact;
//!
//! let mut found = Vec::new();
//! exact::kmp(b"abc", b"abcabcabc", |pos| found.push(pos)).unwrap();
//! assert_eq!(found, vec![0, 3, 6]);
//! ```
//!
//! `on_match` receives the start offset of every occurrence, overlapping ones
//! included, in strictly ascending order. A pattern longer than the text
//! yields no calls. An empty pattern is rejected with
//! [`MatchError::InvalidPattern`](crate::MatchError::InvalidPattern).
//!
//! ## Algorithms
//!
//! - `naive` / `backward_naive`: compare at every offset
//! - `boyer_moore` / `boyer_moore_fast`: bad-character shifts
//! - `kmp`: failure function, linear time
//! - `karp_rabin`: rolling hash with byte verification
//! - `shift_or`: bit-parallel automaton, patterns up to 64 bytes

mod boyer_moore;
mod karp_rabin;
mod kmp;
mod naive;
mod shift_or;

pub use boyer_moore::{boyer_moore, boyer_moore_fast};
pub use karp_rabin::{karp_rabin, karp_rabin_with_modulus};
pub use kmp::kmp;
pub use naive::{backward_naive, naive};
pub use shift_or::shift_or;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact matching algorithm, selectable by name
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Naive,
    BackwardNaive,
    BoyerMoore,
    #[default]
    BoyerMooreFast,
    Kmp,
    KarpRabin,
    ShiftOr,
}

impl Algorithm {
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Naive,
        Algorithm::BackwardNaive,
        Algorithm::BoyerMoore,
        Algorithm::BoyerMooreFast,
        Algorithm::Kmp,
        Algorithm::KarpRabin,
        Algorithm::ShiftOr,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Naive => "naive",
            Algorithm::BackwardNaive => "backward-naive",
            Algorithm::BoyerMoore => "boyer-moore",
            Algorithm::BoyerMooreFast => "boyer-moore-fast",
            Algorithm::Kmp => "kmp",
            Algorithm::KarpRabin => "karp-rabin",
            Algorithm::ShiftOr => "shift-or",
        }
    }

    /// Run this algorithm, reporting each match start to `on_match`
    pub fn search<F: FnMut(usize)>(self, pattern: &[u8], text: &[u8], on_match: F) -> Result<()> {
        match self {
            Algorithm::Naive => naive(pattern, text, on_match),
            Algorithm::BackwardNaive => backward_naive(pattern, text, on_match),
            Algorithm::BoyerMoore => boyer_moore(pattern, text, on_match),
            Algorithm::BoyerMooreFast => boyer_moore_fast(pattern, text, on_match),
            Algorithm::Kmp => kmp(pattern, text, on_match),
            Algorithm::KarpRabin => karp_rabin(pattern, text, on_match),
            Algorithm::ShiftOr => shift_or(pattern, text, on_match),
        }
    }

    /// Collect all match starts in ascending order
    pub fn find_all(self, pattern: &[u8], text: &[u8]) -> Result<Vec<usize>> {
        let mut found = Vec::new();
        self.search(pattern, text, |pos| found.push(pos))?;
        Ok(found)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown algorithm: {}", s))
    }
}
