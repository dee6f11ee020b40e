//! JSON output formatting

use std::io::{self, Write};

use crate::record::FileRecord;

use super::LINE_ENDING;

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(out: &mut W, records: &[FileRecord]) -> io::Result<()> {
    let json = serde_json::to_string_pretty(records).map_err(io::Error::other)?;
    out.write_all(json.as_bytes())?;
    out.write_all(LINE_ENDING.as_bytes())
}
