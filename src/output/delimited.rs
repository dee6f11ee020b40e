//! Line-oriented record output

use std::io::{self, Write};

use crate::record::FileRecord;

use super::config::OutputMode;
use super::LINE_ENDING;

/// Write one record in a delimited mode, including the line terminator.
///
/// JSON is not line-oriented; it is handled by [`super::write_json`].
pub fn write_record<W: Write>(out: &mut W, record: &FileRecord, mode: OutputMode) -> io::Result<()> {
    match mode {
        OutputMode::PathTimestamp | OutputMode::Json => {
            write!(out, "{},{}", record.path, record.timestamp)?
        }
        OutputMode::PathTabTimestamp => write!(out, "{}\t{}", record.path, record.timestamp)?,
        OutputMode::PathOnly => write!(out, "{}", record.path)?,
        OutputMode::PathSizeTimestamp => {
            let size = record.size.map(|s| s.to_string()).unwrap_or_default();
            write!(out, "{},{},{}", record.path, size, record.timestamp)?
        }
    }
    out.write_all(LINE_ENDING.as_bytes())
}
