//! Tool configuration
//!
//! Loaded from a JSON file; every field is optional and falls back to its
//! default. Command-line flags take precedence over file values.
//!
//! ```json
//! {
//!   "algorithm": "kmp",
//!   "fuzzy_mode": "edit",
//!   "max_errors": 2,
//!   "suffix_array": { "case_insensitive": true, "parallel_threshold": 50000 }
//! }
//! ```

use crate::exact::Algorithm;
use crate::fuzzy::FuzzyMode;
use crate::suffix_array::SuffixArrayConfig;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default error bound for fuzzy search
pub const DEFAULT_MAX_ERRORS: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Exact algorithm used by `search` when none is given
    pub algorithm: Algorithm,
    /// Error model used by `fuzzy` when none is given
    pub fuzzy_mode: FuzzyMode,
    /// Error bound used by `fuzzy` when none is given
    pub max_errors: usize,
    pub suffix_array: SuffixArrayConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::default(),
            fuzzy_mode: FuzzyMode::default(),
            max_errors: DEFAULT_MAX_ERRORS,
            suffix_array: SuffixArrayConfig::default(),
        }
    }
}

impl Config {
    /// Read configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&data)
            .with_context(|| format!("Invalid config {}", path.display()))?;
        Ok(config)
    }

    /// Load from `path` if given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}
