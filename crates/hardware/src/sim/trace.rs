//! Execution Trace Formatting and Comparison.
//!
//! This module owns the textual trace format and the tool that diffs two traces:
//! 1. **Formatting:** `<cycle> <IF> <ID> <EX> <MEM> <WB> <R2> ... <R15>`, stage fields as
//!    three hex digits or `---`, registers as eight hex digits.
//! 2. **Comparison:** Reports the first diverging line, or a length mismatch when one trace
//!    is a prefix of the other. Lines are compared with surrounding whitespace trimmed.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::common::error::LoadError;

/// Renders one trace line.
///
/// # Arguments
///
/// * `cycle` - Cycle number, counted from 0.
/// * `stages` - PCs held by IF, ID, EX, MEM and WB.
/// * `regs` - Register values `R2`..`R15` before this cycle's commit.
pub fn format_line(cycle: u64, stages: [Option<u16>; 5], regs: &[u32]) -> String {
    let stage_fields = stages
        .iter()
        .map(|pc| pc.map_or_else(|| " ---".to_owned(), |pc| format!(" {pc:03X}")));
    let reg_fields = regs.iter().map(|value| format!(" {value:08X}"));
    std::iter::once(cycle.to_string()).chain(stage_fields).chain(reg_fields).collect()
}

/// Verdict of comparing two traces.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TraceComparison {
    /// Every line matches and both traces have the same length.
    Identical {
        /// Number of lines.
        lines: usize,
    },
    /// The traces differ at `line` (one-based).
    Diverged {
        /// One-based line number of the first difference.
        line: usize,
        /// The line from the first trace.
        left: String,
        /// The line from the second trace.
        right: String,
    },
    /// One trace is a strict prefix of the other.
    LengthMismatch {
        /// Lines present in both.
        common: usize,
        /// Length of the first trace.
        left_len: usize,
        /// Length of the second trace.
        right_len: usize,
    },
}

impl TraceComparison {
    /// `true` for [`TraceComparison::Identical`].
    pub const fn is_identical(&self) -> bool {
        matches!(self, Self::Identical { .. })
    }
}

impl fmt::Display for TraceComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identical { lines } => write!(f, "Traces match ({lines} lines)."),
            Self::Diverged { line, left, right } => write!(
                f,
                "Divergence found at line {line}:\nGenerated: {left}\nReference: {right}"
            ),
            Self::LengthMismatch {
                common,
                left_len,
                right_len,
            } => write!(
                f,
                "Traces match up to line {common}, but lengths differ.\nGenerated lines: {left_len}\nReference lines: {right_len}"
            ),
        }
    }
}

/// Compares two traces line by line.
pub fn compare(left: &str, right: &str) -> TraceComparison {
    let left: Vec<&str> = left.lines().collect();
    let right: Vec<&str> = right.lines().collect();

    for (idx, (l, r)) in left.iter().zip(&right).enumerate() {
        if l.trim() != r.trim() {
            return TraceComparison::Diverged {
                line: idx + 1,
                left: l.trim().to_string(),
                right: r.trim().to_string(),
            };
        }
    }

    if left.len() == right.len() {
        TraceComparison::Identical { lines: left.len() }
    } else {
        TraceComparison::LengthMismatch {
            common: left.len().min(right.len()),
            left_len: left.len(),
            right_len: right.len(),
        }
    }
}

fn read(path: &Path) -> Result<String, LoadError> {
    fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Compares two trace files.
///
/// # Errors
///
/// [`LoadError::Io`] naming whichever file could not be read.
pub fn compare_files(
    left: impl AsRef<Path>,
    right: impl AsRef<Path>,
) -> Result<TraceComparison, LoadError> {
    let left = read(left.as_ref())?;
    let right = read(right.as_ref())?;
    Ok(compare(&left, &right))
}
