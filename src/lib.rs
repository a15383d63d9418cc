//! # strmatch - Substring Search Toolkit
//!
//! Exact and approximate pattern matching over byte sequences, plus a suffix
//! array index for repeated queries against a fixed text.
//!
//! ## Architecture
//!
//! The crate is organized into these main modules:
//!
//! - [`tables`] - Per-pattern preprocessing (shift tables, failure function,
//!   bitmasks, rolling hash)
//! - [`exact`] - Seven exact matchers sharing one callback contract
//! - [`fuzzy`] - Hamming- and edit-bounded bit-parallel matchers
//! - [`suffix_array`] - Suffix array construction and occurrence queries
//! - [`canon`] - Byte canonicalization (ASCII case folding)
//! - [`wordsplit`] - Dictionary word splitting scores
//! - [`config`], [`loader`], [`output`] - Support for the `strmatch` binary
//!
//! ## Quick Start
//!
//! ```
//! use strmatch::{exact, fuzzy, Algorithm, SuffixArray};
//!
//! // Exact search, every occurrence reported in ascending order
//! let starts = Algorithm::ShiftOr.find_all(b"aa", b"aaaa").unwrap();
//! assert_eq!(starts, vec![0, 1, 2]);
//!
//! // Callback form
//! let mut found = Vec::new();
//! exact::boyer_moore(b"abc", b"abcabcabc", |pos| found.push(pos)).unwrap();
//! assert_eq!(found, vec![0, 3, 6]);
//!
//! // Fuzzy search reports exclusive end offsets
//! let mut ends = Vec::new();
//! fuzzy::hamming(b"abc", b"xabdx", 1, |end| ends.push(end)).unwrap();
//! assert_eq!(ends, vec![4]);
//!
//! // Build once, query many times
//! let sa = SuffixArray::new(b"ananas");
//! assert_eq!(sa.lookup_all(b"na").unwrap(), vec![1, 3]);
//! ```
//!
//! ## Errors
//!
//! Empty patterns fail with [`MatchError::InvalidPattern`]. Patterns longer
//! than 64 bytes passed to Shift-Or or the fuzzy matchers fail with
//! [`MatchError::UnsupportedPatternLength`]. Both are reported before any
//! byte of the text is scanned. A pattern longer than the text is not an
//! error; it simply has no matches.

pub mod canon;
pub mod config;
pub mod error;
pub mod exact;
pub mod fuzzy;
pub mod loader;
pub mod output;
pub mod suffix_array;
pub mod tables;
pub mod wordsplit;

pub use error::{MatchError, Result};
pub use exact::Algorithm;
pub use fuzzy::FuzzyMode;
pub use suffix_array::{SuffixArray, SuffixArrayConfig};
