//! Suffix array indexing module
//!
//! This module provides O(m log n) exact substring search using suffix arrays.
//! The array is built once per text and answers any number of queries.
//!
//! ## Architecture
//!
//! - `builder`: Sorts all suffixes of a text (prefix doubling, rayon for large inputs)
//! - `index`: Binary-search queries over the sorted suffixes
//! - `types`: Configuration and statistics
//!
//! ```
//! use strmatch::SuffixArray;
//!
//! let sa = SuffixArray::new(b"ananas");
//! assert_eq!(sa.lookup_all(b"ana").unwrap(), vec![0, 2]);
//! assert!(sa.lookup_all(b"ananasx").unwrap().is_empty());
//! ```

pub mod builder;
pub mod index;
pub mod types;

// Re-exports for convenience
pub use builder::SuffixArrayBuilder;
pub use index::SuffixArray;
pub use types::{SuffixArrayConfig, SuffixArrayStats, SuffixEntry};
