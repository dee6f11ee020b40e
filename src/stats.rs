//! Listing summary statistics
//!
//! Aggregates what was found in a listing: entry counts, total size of the
//! sized files, and the range of modification times.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::record::{FileRecord, TIMESTAMP_FORMAT};
use crate::tree::{LineCounts, ParsedListing};

/// Summary of a parsed listing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingStats {
    pub files: usize,
    pub directories: usize,
    pub roots: usize,
    pub blank_lines: usize,
    /// Directory lines that looked like files
    pub suspicious: usize,
    /// Sum of all known sizes
    pub total_bytes: u64,
    /// Files listed without a size column
    pub unsized_files: usize,
    /// Files whose timestamp is not a real date
    pub invalid_timestamps: usize,
    pub oldest: Option<NaiveDateTime>,
    pub newest: Option<NaiveDateTime>,
}

impl ListingStats {
    /// Compute statistics for a parsed listing.
    pub fn from_listing(listing: &ParsedListing) -> Self {
        let mut stats = Self::from_counts(listing.counts);
        for record in &listing.records {
            stats.record_file(record);
        }
        stats
    }

    fn from_counts(counts: LineCounts) -> Self {
        Self {
            directories: counts.directories,
            roots: counts.roots,
            blank_lines: counts.blank,
            suspicious: counts.suspicious,
            ..Default::default()
        }
    }

    fn record_file(&mut self, record: &FileRecord) {
        self.files += 1;

        match record.size {
            Some(size) => self.total_bytes = self.total_bytes.saturating_add(size),
            None => self.unsized_files += 1,
        }

        match record.modified() {
            Some(modified) => {
                if self.oldest.is_none_or(|t| modified < t) {
                    self.oldest = Some(modified);
                }
                if self.newest.is_none_or(|t| modified > t) {
                    self.newest = Some(modified);
                }
            }
            None => self.invalid_timestamps += 1,
        }
    }
}

fn format_time(time: Option<NaiveDateTime>) -> String {
    time.map(|t| t.format(TIMESTAMP_FORMAT).to_string())
        .unwrap_or_else(|| "-".to_string())
}

/// Write a human-readable summary.
pub fn write_stats<W: Write>(out: &mut W, stats: &ListingStats) -> io::Result<()> {
    writeln!(out, "Files:        {}", stats.files)?;
    writeln!(out, "Directories:  {}", stats.directories)?;
    if stats.roots > 1 {
        writeln!(out, "Roots:        {}", stats.roots)?;
    }
    writeln!(out, "Total size:   {} bytes", stats.total_bytes)?;
    if stats.unsized_files > 0 {
        writeln!(out, "Unsized:      {}", stats.unsized_files)?;
    }
    writeln!(out, "Oldest:       {}", format_time(stats.oldest))?;
    writeln!(out, "Newest:       {}", format_time(stats.newest))?;
    if stats.invalid_timestamps > 0 {
        writeln!(out, "Bad dates:    {}", stats.invalid_timestamps)?;
    }
    if stats.suspicious > 0 {
        writeln!(out, "Suspicious:   {}", stats.suspicious)?;
    }
    Ok(())
}

/// Print a summary to stdout.
pub fn print_stats(stats: &ListingStats) -> io::Result<()> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_stats(&mut lock, stats)
}
