//! Flat file records reconstructed from a tree listing

use chrono::NaiveDateTime;
use serde::Serialize;

/// Format of every record timestamp.
pub const TIMESTAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// One file from the listing with its full reconstructed path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Ancestor directories and file name joined with the path separator.
    pub path: String,
    /// Last-modified time as `YYYY/MM/DD HH:MM:SS`.
    pub timestamp: String,
    /// Size in bytes, when the listing had a size column for this file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    /// 1-based input line the record was read from.
    pub line: usize,
}

impl FileRecord {
    /// Parse the timestamp into a calendar date and time.
    ///
    /// The patterns only check digit shapes, so `2024/13/45 99:00:00` yields
    /// a record whose timestamp does not parse.
    pub fn modified(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, TIMESTAMP_FORMAT).ok()
    }
}
