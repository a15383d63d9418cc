use thiserror::Error;

/// Result type for matcher and index operations
pub type Result<T> = std::result::Result<T, MatchError>;

/// Errors raised while validating a pattern, before any scanning starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// The pattern is empty, so the set of matches is undefined
    #[error("invalid pattern: pattern must not be empty")]
    InvalidPattern,

    /// A bit-parallel algorithm was given a pattern wider than its state word
    #[error("unsupported pattern length: {len} bytes exceeds {max} bytes")]
    UnsupportedPatternLength { len: usize, max: usize },
}
