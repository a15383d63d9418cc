//! Types for the suffix array index

use serde::{Deserialize, Serialize};

/// Suffix array entry - start offset of a suffix in the indexed text
pub type SuffixEntry = usize;

/// Texts at least this long are sorted on the rayon pool
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100_000;

/// Configuration for suffix array building
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuffixArrayConfig {
    /// Canonicalize text and patterns with ASCII case folding (default: false)
    pub case_insensitive: bool,
    /// Minimum text length for parallel sorting (default: 100_000)
    pub parallel_threshold: usize,
}

impl Default for SuffixArrayConfig {
    fn default() -> Self {
        Self {
            case_insensitive: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

/// Statistics about a built suffix array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuffixArrayStats {
    pub text_size: usize,
    pub suffix_count: usize,
    pub case_insensitive: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults_from_partial_json() {
        let config: SuffixArrayConfig =
            serde_json::from_str(r#"{"case_insensitive": true}"#).unwrap();
        assert!(config.case_insensitive);
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);

        let config: SuffixArrayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, SuffixArrayConfig::default());
    }
}
