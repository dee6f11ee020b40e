//! Edge case and error handling tests for untree


use harness::{ListingBuilder, TestListing, convert, untree};
use predicates::prelude::*;

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn test_no_arguments_prints_usage() {
    let scratch = TestListing::new();
    untree(scratch.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_one_argument_touches_nothing() {
    let scratch = TestListing::new();
    scratch.add_listing("tree.txt", "R\n └ a  1  2024/01/01 00:00:00\n");
    untree(scratch.path())
        .arg("tree.txt")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
    let entries: Vec<_> = std::fs::read_dir(scratch.path()).unwrap().collect();
    assert_eq!(entries.len(), 1, "only the input file should exist");
}

// ============================================================================
// I/O errors
// ============================================================================

#[test]
fn test_missing_input_file() {
    let scratch = TestListing::new();
    untree(scratch.path())
        .args(["missing.txt", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error opening input file"))
        .stderr(predicate::str::contains("missing.txt"));
    assert!(!scratch.output_path("out.csv").exists());
}

#[test]
fn test_output_in_missing_directory() {
    let scratch = TestListing::new();
    scratch.add_listing("tree.txt", "R\n");
    untree(scratch.path())
        .args(["tree.txt", "nope/out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error creating output file"));
}

#[test]
fn test_existing_output_is_overwritten() {
    let scratch = TestListing::new();
    scratch.add_listing("tree.txt", "R\n └ a  1  2024/01/01 00:00:00\n");
    scratch.add_listing("out.csv", "stale contents\n");
    untree(scratch.path())
        .args(["tree.txt", "out.csv"])
        .assert()
        .success();
    assert_eq!(scratch.read("out.csv"), "R\\a,2024/01/01 00:00:00\r\n");
}

// ============================================================================
// Listing shapes
// ============================================================================

#[test]
fn test_empty_listing_gives_empty_output() {
    assert_eq!(convert("", &[]), "");
}

#[test]
fn test_root_only_listing() {
    assert_eq!(convert("C:\\data < Folder >\n", &[]), "");
}

#[test]
fn test_directories_only_listing() {
    let listing = ListingBuilder::new("R").dir(1, "a").dir(2, "b").dir(1, "c").build();
    assert_eq!(convert(&listing, &[]), "");
}

#[test]
fn test_sibling_directories() {
    let listing = ListingBuilder::new("R")
        .dir(1, "A")
        .dir(1, "B")
        .file(2, "f.txt", 1, "2024/01/01 00:00:00")
        .build();
    assert_eq!(convert(&listing, &["3"]), "R\\B\\f.txt\r\n");
}

#[test]
fn test_file_names_with_spaces_and_digits() {
    let listing = ListingBuilder::new("R")
        .file(1, "Quarterly report 2024.xlsx", 48_213, "2024/04/01 09:30:00")
        .unsized_file(1, "notes 12.txt", "2024/04/02 10:00:00")
        .build();
    assert_eq!(
        convert(&listing, &["4"]),
        "R\\Quarterly report 2024.xlsx,48213,2024/04/01 09:30:00\r\n\
         R\\notes 12.txt,,2024/04/02 10:00:00\r\n"
    );
}

#[test]
fn test_non_ascii_names() {
    let listing = ListingBuilder::new("D:")
        .dir(1, "書類")
        .file(2, "報告書.pdf", 2048, "2024/06/01 12:00:00")
        .build();
    assert_eq!(convert(&listing, &["3"]), "D:\\書類\\報告書.pdf\r\n");
}

#[test]
fn test_malformed_file_line_becomes_directory() {
    let listing = ListingBuilder::new("R")
        .raw(" ├ odd.txt  12  2024/01/01")
        .raw(" │ └ child.txt  1  2024/01/01 00:00:00")
        .build();
    assert_eq!(convert(&listing, &["3"]), "R\\odd.txt  12  2024/01/01\\child.txt\r\n");
}

#[test]
fn test_warn_unmatched_reports_suspicious_line() {
    let scratch = TestListing::new();
    scratch.add_listing("tree.txt", "R\n └ odd.txt  12  2024/01/01\n");
    untree(scratch.path())
        .args(["tree.txt", "out.csv", "--warn-unmatched"])
        .assert()
        .success()
        .stderr(predicate::str::contains("matches no file pattern"));
}

#[test]
fn test_unmatched_is_silent_by_default() {
    let scratch = TestListing::new();
    scratch.add_listing("tree.txt", "R\n └ odd.txt  12  2024/01/01\n");
    untree(scratch.path())
        .args(["tree.txt", "out.csv"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_crlf_input_with_bom() {
    let out = convert("\u{feff}C:\r\n └ a.txt  1  2024/01/01 00:00:00\r\n", &[]);
    assert_eq!(out, "C:\\a.txt,2024/01/01 00:00:00\r\n");
}

#[test]
fn test_invalid_utf8_input_fails_without_output() {
    let scratch = TestListing::new();
    std::fs::write(scratch.path().join("tree.txt"), b"R\n\xff\xfe\n").unwrap();
    untree(scratch.path())
        .args(["tree.txt", "out.csv"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading"));
    assert_eq!(scratch.read("out.csv"), "");
}
