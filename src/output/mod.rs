//! Record output
//!
//! - `config` - Output mode selection
//! - `delimited` - One line per record (`csv`, `tsv`, `path`, `sized`)
//! - `json` - JSON array output

mod config;
mod delimited;
mod json;

use std::io::{self, Write};

use crate::record::FileRecord;

pub use config::OutputMode;
pub use delimited::write_record;
pub use json::write_json;

/// Terminator for every output line.
pub const LINE_ENDING: &str = "\r\n";

/// Write all records in encounter order.
pub fn write_records<W: Write>(out: &mut W, records: &[FileRecord], mode: OutputMode) -> io::Result<()> {
    if mode == OutputMode::Json {
        return write_json(out, records);
    }
    for record in records {
        write_record(out, record, mode)?;
    }
    Ok(())
}
