//! Input-to-output conversion driver
//!
//! Owns the input reader and the output writer for the length of a run. Both
//! are closed on every exit path when they go out of scope.

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{Result, UntreeError};
use crate::output::{OutputMode, write_records};
use crate::tree::{ParsedListing, ParserConfig, TreeParser};

/// Options for a conversion run.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    pub parser: ParserConfig,
    pub mode: OutputMode,
}

/// Convert the listing at `input` into flat records at `output`.
///
/// The output file is created before parsing starts, but nothing is written
/// to it until the whole input has been read. A read error therefore leaves
/// an empty output file.
pub fn convert_file(input: &Path, output: &Path, options: &ConvertOptions) -> Result<ParsedListing> {
    let reader = File::open(input).map_err(|source| UntreeError::OpenInput {
        path: input.to_path_buf(),
        source,
    })?;

    let writer = File::create(output).map_err(|source| UntreeError::CreateOutput {
        path: output.to_path_buf(),
        source,
    })?;

    info!(input = %input.display(), output = %output.display(), mode = %options.mode, "converting");

    let listing = TreeParser::new(options.parser.clone())
        .parse_reader(BufReader::new(reader))
        .map_err(|source| UntreeError::Read {
            path: input.to_path_buf(),
            source,
        })?;

    let write_err = |source: std::io::Error| UntreeError::Write {
        path: output.to_path_buf(),
        source,
    };
    let mut out = BufWriter::new(writer);
    write_records(&mut out, &listing.records, options.mode).map_err(write_err)?;
    out.flush().map_err(write_err)?;

    info!(
        files = listing.counts.files,
        directories = listing.counts.directories,
        "conversion finished"
    );
    Ok(listing)
}
