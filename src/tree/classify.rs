//! Line classification: file entries versus directory entries
//!
//! A listing carries no explicit "this is a file" marker. A line is a file
//! when one of the file patterns matches its content; every other non-root
//! line is a directory.
//!
//! # Pattern order
//!
//! Matchers are tried in [`FILE_MATCHERS`] order and the first success wins.
//! The sized pattern comes first: the unsized pattern would otherwise accept
//! a sized line by folding the size column into the name.

use std::sync::LazyLock;

use regex::Regex;

use super::config::TreeSyntax;

/// `<name>  <size>  <YYYY/MM/DD HH:MM:SS>` with an optionally comma-grouped size.
static SIZED_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\d{1,3}(?:,\d{3})*)\s+(\d{4}/\d{2}/\d{2} \d{2}:\d{2}:\d{2})$")
        .expect("SIZED_FILE regex is invalid")
});

/// `<name>  <YYYY/MM/DD><sep><HH:MM:SS>` where the separator is any non-digit.
static UNSIZED_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+?)\s+(\d{4}/\d{2}/\d{2})\D(\d{2}:\d{2}:\d{2})$")
        .expect("UNSIZED_FILE regex is invalid")
});

/// A date anywhere in the line.
static DATE_LIKE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}/\d{2}/\d{2}").expect("DATE_LIKE regex is invalid"));

/// The fields of a line recognised as a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    pub name: String,
    /// Always `YYYY/MM/DD HH:MM:SS`.
    pub timestamp: String,
    pub size: Option<u64>,
}

/// A pattern that recognises file lines.
pub trait FileMatcher: Sync {
    /// Try to read a file entry from de-indented line content.
    fn match_file(&self, content: &str) -> Option<FileEntry>;

    /// Short name used in diagnostics.
    fn name(&self) -> &'static str;
}

/// Files listed with a size column.
pub struct SizedFileMatcher;

impl FileMatcher for SizedFileMatcher {
    fn match_file(&self, content: &str) -> Option<FileEntry> {
        let caps = SIZED_FILE.captures(content)?;
        Some(FileEntry {
            name: caps[1].to_string(),
            timestamp: caps[3].to_string(),
            size: parse_grouped_size(&caps[2]),
        })
    }

    fn name(&self) -> &'static str {
        "sized"
    }
}

/// Files listed without a size column (empty or unreadable files).
pub struct UnsizedFileMatcher;

impl FileMatcher for UnsizedFileMatcher {
    fn match_file(&self, content: &str) -> Option<FileEntry> {
        let caps = UNSIZED_FILE.captures(content)?;
        Some(FileEntry {
            name: caps[1].to_string(),
            timestamp: format!("{} {}", &caps[2], &caps[3]),
            size: None,
        })
    }

    fn name(&self) -> &'static str {
        "unsized"
    }
}

/// File matchers in priority order.
pub static FILE_MATCHERS: &[&dyn FileMatcher] = &[&SizedFileMatcher, &UnsizedFileMatcher];

/// Parse a size such as `12,345`, dropping the thousands separators.
///
/// Returns `None` only if the value overflows `u64`.
pub fn parse_grouped_size(s: &str) -> Option<u64> {
    s.chars()
        .filter(|&c| c != ',')
        .collect::<String>()
        .parse()
        .ok()
}

/// Run the matchers in order and return the first hit with the matcher name.
pub fn match_file(content: &str) -> Option<(FileEntry, &'static str)> {
    FILE_MATCHERS
        .iter()
        .find_map(|m| m.match_file(content).map(|entry| (entry, m.name())))
}

/// Extract a directory name: the content with every folder marker removed.
pub fn directory_name(content: &str, syntax: &TreeSyntax) -> String {
    if syntax.folder_marker.is_empty() {
        return content.trim().to_string();
    }
    content.replace(&syntax.folder_marker, "").trim().to_string()
}

/// Check if an unmatched line still carries a date, which suggests a file
/// in a layout the patterns do not cover.
pub fn looks_like_file(content: &str) -> bool {
    DATE_LIKE.is_match(content)
}

/// Classification of a non-root line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    File(FileEntry),
    Directory(String),
}

/// Classify de-indented content.
///
/// Anything that no file pattern accepts is a directory. This is the
/// classify-as-directory-by-default policy: the classifier has no reject
/// path, so a malformed file line silently becomes a directory.
pub fn classify(content: &str, syntax: &TreeSyntax) -> LineKind {
    match match_file(content) {
        Some((entry, _)) => LineKind::File(entry),
        None => LineKind::Directory(directory_name(content, syntax)),
    }
}
