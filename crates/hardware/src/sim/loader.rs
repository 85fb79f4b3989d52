//! Memory Image Loader.
//!
//! This module reads the plain-text images a run starts from. It performs:
//! 1. **Parsing:** One hexadecimal word per line; blank lines are skipped and an optional
//!    `0x` prefix is accepted.
//! 2. **Capacity Checks:** Images longer than their target memory are truncated with a warning.
//! 3. **Error Reporting:** Every failure carries the offending path (and line for parse errors).

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::common::constants::IMEM_SIZE;
use crate::common::error::LoadError;

/// Parses hex words from `text`, attributing errors to `path`.
///
/// # Arguments
///
/// * `text` - File contents.
/// * `path` - Source path, used only for error messages.
///
/// # Returns
///
/// The words in file order.
pub fn parse_hex_words(text: &str, path: &Path) -> Result<Vec<u32>, LoadError> {
    let mut words = Vec::new();
    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let digits = line
            .strip_prefix("0x")
            .or_else(|| line.strip_prefix("0X"))
            .unwrap_or(line);
        let word = u32::from_str_radix(digits, 16).map_err(|_| LoadError::Parse {
            path: path.to_path_buf(),
            line: idx + 1,
            text: raw.to_string(),
        })?;
        words.push(word);
    }
    Ok(words)
}

/// Reads a hex image file.
pub fn load_hex_file(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_hex_words(&text, path)?;
    debug!(path = %path.display(), words = words.len(), "loaded hex image");
    Ok(words)
}

/// Truncates `words` to `capacity`, warning about what is dropped.
fn fit(mut words: Vec<u32>, capacity: usize, path: &Path) -> Vec<u32> {
    if words.len() > capacity {
        warn!(
            path = %path.display(),
            len = words.len(),
            capacity,
            "image larger than memory; extra words ignored"
        );
        words.truncate(capacity);
    }
    words
}

/// Loads an instruction memory image (at most 1024 words).
pub fn load_imem(path: impl AsRef<Path>) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    Ok(fit(load_hex_file(path)?, IMEM_SIZE, path))
}

/// Loads a data memory image of at most `capacity` words.
pub fn load_memin(path: impl AsRef<Path>, capacity: usize) -> Result<Vec<u32>, LoadError> {
    let path = path.as_ref();
    Ok(fit(load_hex_file(path)?, capacity, path))
}
