// File: crates/profile-analysis/tests/samples.rs
// Purpose: Sample reader keeps order, skips wrong-width lines and propagates I/O and number errors.

use std::io::{Cursor, Write};

use profile_analysis::{parse_samples, read_samples, AnalysisError, Sample};
use proptest::prelude::*;

fn write_temp(contents: &str) -> tempfile::NamedTempFile {
    let mut f = tempfile::NamedTempFile::new().expect("temp file");
    f.write_all(contents.as_bytes()).expect("write temp file");
    f
}

#[test]
fn reads_well_formed_file_in_order() {
    let f = write_temp("4294892296 120 0 15\n4294892346 348 2 40\n4294892396 349 2 41\n");
    let s = read_samples(f.path()).expect("read samples");

    assert_eq!(s.len(), 3);
    assert_eq!(s.jiffies, vec![4294892296, 4294892346, 4294892396]);
    assert_eq!(s.minor_faults, vec![120, 348, 349]);
    assert_eq!(s.major_faults, vec![0, 2, 2]);
}

#[test]
fn skips_lines_with_other_token_counts() {
    let input = "\
1 10 100 7
header line
2 20 200
3 30 300 7 extra

4\t40   400 7
";
    let s = parse_samples(Cursor::new(input), "mixed").expect("parse");
    assert_eq!(s.jiffies, vec![1, 4]);
    assert_eq!(s.minor_faults, vec![10, 40]);
    assert_eq!(s.major_faults, vec![100, 400]);
}

#[test]
fn fourth_token_is_required_but_unused() {
    let s = parse_samples(Cursor::new("5 6 7 not-a-number\n"), "t").expect("parse");
    assert_eq!(s.iter().collect::<Vec<_>>(), vec![Sample { jiffies: 5, minor_faults: 6, major_faults: 7 }]);
}

#[test]
fn truncated_last_line_is_dropped() {
    let s = parse_samples(Cursor::new("1 2 3 4\n5 6"), "t").expect("parse");
    assert_eq!(s.len(), 1);
}

#[test]
fn lone_carriage_returns_end_lines() {
    let s = parse_samples(Cursor::new("1 10 100 7\r2 20 200 7\rjunk\r3 30 300 7\r"), "cr").expect("parse");
    assert_eq!(s.jiffies, vec![1, 2, 3]);
    assert_eq!(s.major_faults, vec![100, 200, 300]);
}

#[test]
fn crlf_and_mixed_endings_read_the_same_as_lf() {
    let lf = parse_samples(Cursor::new("1 2 3 4\n5 6 7 8\n9 10 11 12\n"), "lf").expect("parse");
    let crlf = parse_samples(Cursor::new("1 2 3 4\r\n5 6 7 8\r\n9 10 11 12\r\n"), "crlf").expect("parse");
    let mixed = parse_samples(Cursor::new("1 2 3 4\r5 6 7 8\r\n9 10 11 12"), "mixed").expect("parse");
    assert_eq!(lf.len(), 3);
    assert_eq!(crlf, lf);
    assert_eq!(mixed, lf);
}

#[test]
fn line_numbers_count_carriage_return_lines() {
    let err = parse_samples(Cursor::new("1 2 3 4\r\n5 6 7 8\rx 2 3 4\n"), "t").expect_err("bad token");
    assert!(matches!(err, AnalysisError::InvalidNumber { line: 3, .. }));
}

#[test]
fn empty_input_gives_empty_series() {
    let s = parse_samples(Cursor::new(""), "t").expect("parse");
    assert!(s.is_empty());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("absent.data");
    match read_samples(&path) {
        Err(AnalysisError::Io { path: p, .. }) => assert_eq!(p, path),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn bad_number_reports_line_and_token() {
    let f = write_temp("1 2 3 4\n5 six 7 8\n");
    match read_samples(f.path()) {
        Err(AnalysisError::InvalidNumber { line, token, .. }) => {
            assert_eq!(line, 2);
            assert_eq!(token, "six");
        }
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[test]
fn negative_counts_are_rejected() {
    let err = parse_samples(Cursor::new("1 -2 3 4\n"), "t").expect_err("negative count");
    match err {
        AnalysisError::InvalidNumber { line, token, .. } => assert_eq!((line, token.as_str()), (1, "-2")),
        other => panic!("expected InvalidNumber, got {other:?}"),
    }
}

#[derive(Clone, Debug)]
enum Line {
    Valid(u64, u64, u64, u64),
    Junk(Vec<String>),
}

fn line_strategy() -> impl Strategy<Value = Line> {
    prop_oneof![
        (any::<u64>(), any::<u64>(), any::<u64>(), any::<u64>()).prop_map(|(a, b, c, d)| Line::Valid(a, b, c, d)),
        prop::collection::vec("[a-z0-9]{1,6}", 0..8)
            .prop_filter("not four tokens", |v| v.len() != 4)
            .prop_map(Line::Junk),
    ]
}

proptest! {
    #[test]
    fn keeps_exactly_the_four_token_lines_in_order(lines in prop::collection::vec(line_strategy(), 0..40)) {
        let text: String = lines
            .iter()
            .map(|l| match l {
                Line::Valid(a, b, c, d) => format!("{a} {b} {c} {d}\n"),
                Line::Junk(tokens) => format!("{}\n", tokens.join(" ")),
            })
            .collect();
        let expected: Vec<Sample> = lines
            .iter()
            .filter_map(|l| match l {
                Line::Valid(a, b, c, _) => Some(Sample { jiffies: *a, minor_faults: *b, major_faults: *c }),
                Line::Junk(_) => None,
            })
            .collect();

        let s = parse_samples(Cursor::new(text), "prop").expect("parse");
        prop_assert_eq!(s.jiffies.len(), s.minor_faults.len());
        prop_assert_eq!(s.jiffies.len(), s.major_faults.len());
        prop_assert_eq!(s.iter().collect::<Vec<_>>(), expected);
    }
}
