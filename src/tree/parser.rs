//! Tree listing parser
//!
//! `TreeParser` consumes listing lines one at a time, in input order, and
//! accumulates a [`FileRecord`] for every file line. Directory and root lines
//! only move the [`DirectoryStack`].

use std::io::{self, BufRead};

use tracing::{debug, warn};

use crate::record::FileRecord;

use super::classify::{directory_name, looks_like_file, match_file};
use super::config::{ParserConfig, UnmatchedLinePolicy};
use super::depth::measure;
use super::stack::DirectoryStack;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Per-kind line counts gathered while parsing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCounts {
    /// Every line read, blank ones included.
    pub lines: usize,
    pub blank: usize,
    pub roots: usize,
    pub directories: usize,
    pub files: usize,
    /// Directory lines that carried a date (only counted under
    /// [`UnmatchedLinePolicy::WarnDirectory`]).
    pub suspicious: usize,
}

/// Result of parsing a whole listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedListing {
    /// File records in input order.
    pub records: Vec<FileRecord>,
    pub counts: LineCounts,
}

/// Streaming tree listing parser.
#[derive(Debug, Default)]
pub struct TreeParser {
    config: ParserConfig,
    stack: DirectoryStack,
    records: Vec<FileRecord>,
    counts: LineCounts,
}

impl TreeParser {
    pub fn new(config: ParserConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Process one raw line. Returns the record if the line was a file.
    pub fn push_line(&mut self, raw: &str) -> Option<&FileRecord> {
        self.counts.lines += 1;
        let line_no = self.counts.lines;

        let line = if line_no == 1 {
            raw.strip_prefix(BYTE_ORDER_MARK).unwrap_or(raw)
        } else {
            raw
        };

        if line.trim().is_empty() {
            self.counts.blank += 1;
            return None;
        }

        let syntax = &self.config.syntax;
        let measured = measure(line, syntax);

        if measured.depth == 0 {
            let name = directory_name(&measured.content, syntax);
            debug!(line = line_no, depth = 0, kind = "root", name = %name);
            self.stack.reset(name);
            self.counts.roots += 1;
            return None;
        }

        let depth = measured.depth;
        if let Some((entry, matcher)) = match_file(&measured.content) {
            let path = self.stack.path_for(depth, &entry.name, syntax.separator);
            debug!(line = line_no, depth, kind = "file", matcher, path = %path);
            self.counts.files += 1;
            self.records.push(FileRecord {
                path,
                timestamp: entry.timestamp,
                size: entry.size,
                line: line_no,
            });
            return self.records.last();
        }

        // Classify-as-directory-by-default.
        let name = directory_name(&measured.content, syntax);
        if self.config.unmatched == UnmatchedLinePolicy::WarnDirectory
            && looks_like_file(&measured.content)
        {
            warn!(
                line = line_no,
                content = %measured.content,
                "line has a date but matches no file pattern; treating it as a directory"
            );
            self.counts.suspicious += 1;
        }
        debug!(line = line_no, depth, kind = "directory", name = %name);
        self.stack.enter(depth, name);
        self.counts.directories += 1;
        None
    }

    /// Parse every line of `reader`.
    pub fn parse_reader<R: BufRead>(mut self, reader: R) -> io::Result<ParsedListing> {
        for line in reader.lines() {
            self.push_line(&line?);
        }
        Ok(self.finish())
    }

    /// Parse every line of an in-memory listing.
    pub fn parse_str(mut self, text: &str) -> ParsedListing {
        for line in text.lines() {
            self.push_line(line);
        }
        self.finish()
    }

    /// Stop parsing and hand back the accumulated records.
    pub fn finish(self) -> ParsedListing {
        ParsedListing {
            records: self.records,
            counts: self.counts,
        }
    }

    pub fn stack(&self) -> &DirectoryStack {
        &self.stack
    }

    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    pub fn counts(&self) -> LineCounts {
        self.counts
    }
}

/// Parse a listing with the default configuration.
pub fn parse_listing(text: &str) -> Vec<FileRecord> {
    TreeParser::default().parse_str(text).records
}
