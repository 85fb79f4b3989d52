//! Trace Format and Comparison Tests.

use pipesim_core::common::LoadError;
use pipesim_core::sim::trace::{TraceComparison, compare, compare_files, format_line};
use pretty_assertions::assert_eq;

#[test]
fn line_format() {
    let mut regs = [0_u32; 14];
    regs[0] = 0x2A;
    regs[13] = 0xFFFF_FFFF;
    let line = format_line(12, [Some(0x10), Some(0xF), None, Some(0x3FF), None], &regs);

    let expected = format!(
        "12 010 00F --- 3FF --- 0000002A {}FFFFFFFF",
        "00000000 ".repeat(12)
    );
    assert_eq!(line, expected);
}

#[test]
fn identical_traces() {
    let verdict = compare("0 000 ---\n1 001 000\n", "0 000 ---  \n1 001 000\n");
    assert_eq!(verdict, TraceComparison::Identical { lines: 2 });
    assert!(verdict.is_identical());
}

#[test]
fn first_divergence_is_reported() {
    let verdict = compare("a\nb\nc\n", "a\nx\ny\n");
    assert_eq!(
        verdict,
        TraceComparison::Diverged {
            line: 2,
            left: "b".to_string(),
            right: "x".to_string(),
        }
    );
    assert_eq!(
        verdict.to_string(),
        "Divergence found at line 2:\nGenerated: b\nReference: x"
    );
}

#[test]
fn prefix_is_a_length_mismatch() {
    let verdict = compare("a\nb\n", "a\nb\nc\n");
    assert_eq!(
        verdict,
        TraceComparison::LengthMismatch {
            common: 2,
            left_len: 2,
            right_len: 3,
        }
    );
    assert!(!verdict.is_identical());
}

#[test]
fn compare_files_reads_both() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.txt");
    let right = dir.path().join("right.txt");
    std::fs::write(&left, "0 000\n").unwrap();
    std::fs::write(&right, "0 000\n").unwrap();

    assert!(compare_files(&left, &right).unwrap().is_identical());
}

#[test]
fn compare_files_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let left = dir.path().join("left.txt");
    std::fs::write(&left, "0 000\n").unwrap();
    let missing = dir.path().join("missing.txt");

    match compare_files(&left, &missing) {
        Err(LoadError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected an I/O error, got {other:?}"),
    }
}
