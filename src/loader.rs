//! Reading search inputs from disk

use anyhow::{Context, Result};
use memmap2::Mmap;
use std::fs::{self, File};
use std::ops::Deref;
use std::path::Path;

/// File contents, memory-mapped when non-empty
pub enum TextFile {
    Mapped(Mmap),
    Empty,
}

impl Deref for TextFile {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        match self {
            TextFile::Mapped(mmap) => &mmap[..],
            TextFile::Empty => &[],
        }
    }
}

/// Open a text file for searching
pub fn load_text(path: &Path) -> Result<TextFile> {
    let file = File::open(path).with_context(|| format!("Failed to open {}", path.display()))?;
    let len = file.metadata()?.len();

    // Zero-length mappings are rejected on some platforms
    if len == 0 {
        return Ok(TextFile::Empty);
    }

    let mmap = unsafe { Mmap::map(&file) }
        .with_context(|| format!("Failed to map {}", path.display()))?;
    Ok(TextFile::Mapped(mmap))
}

/// Read a word list, one word per line, skipping blank lines
pub fn load_words(path: &Path) -> Result<Vec<String>> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|w| !w.is_empty())
        .map(String::from)
        .collect())
}
