//! Test utilities for building tree listings and scratch directories.
//!
//! This module is only compiled for tests and benchmarks.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Builds listing text in the layout the parser expects: one connector per
/// level, each level three columns wide once glyphs are normalised.
#[derive(Debug, Clone, Default)]
pub struct ListingBuilder {
    lines: Vec<String>,
}

impl ListingBuilder {
    /// Start a listing with a root line.
    pub fn new(root: &str) -> Self {
        Self {
            lines: vec![format!("{} < Folder >", root)],
        }
    }

    /// Add a directory at `depth` (1 = child of the root).
    pub fn dir(mut self, depth: usize, name: &str) -> Self {
        self.lines.push(format!("{}{} < Folder >", indent(depth), name));
        self
    }

    /// Add a file with a size column.
    pub fn file(mut self, depth: usize, name: &str, size: u64, timestamp: &str) -> Self {
        self.lines.push(format!(
            "{}{}  {}  {}",
            indent(depth),
            name,
            group_thousands(size),
            timestamp
        ));
        self
    }

    /// Add a file without a size column.
    pub fn unsized_file(mut self, depth: usize, name: &str, timestamp: &str) -> Self {
        self.lines
            .push(format!("{}{}  {}", indent(depth), name, timestamp));
        self
    }

    /// Add a raw line verbatim.
    pub fn raw(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Connector prefix for an entry at `depth`.
fn indent(depth: usize) -> String {
    if depth == 0 {
        return String::new();
    }
    let mut prefix = " │".repeat(depth - 1);
    prefix.push_str(" ├ ");
    prefix
}

/// Format a size with comma thousands separators, as the listing tool does.
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

/// A scratch directory holding listing inputs and conversion outputs.
///
/// Cleaned up automatically when dropped.
pub struct TestListing {
    dir: TempDir,
}

impl TestListing {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write a listing file and return its path.
    pub fn add_listing(&self, name: &str, content: &str) -> PathBuf {
        let full_path = self.dir.path().join(name);
        fs::write(&full_path, content).expect("Failed to write listing");
        full_path
    }

    /// Path for an output file inside the scratch directory.
    pub fn output_path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Read an output file back.
    pub fn read(&self, name: &str) -> String {
        fs::read_to_string(self.dir.path().join(name)).expect("Failed to read output")
    }
}

impl Default for TestListing {
    fn default() -> Self {
        Self::new()
    }
}
