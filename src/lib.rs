//! Untree - flatten a box-drawing tree listing into one record per file

pub mod convert;
pub mod error;
pub mod output;
pub mod record;
pub mod stats;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use convert::{ConvertOptions, convert_file};
pub use error::{Result, UntreeError};
pub use output::{LINE_ENDING, OutputMode, write_records};
pub use record::FileRecord;
pub use stats::{ListingStats, print_stats};
pub use tree::{ParsedListing, ParserConfig, TreeParser, TreeSyntax, UnmatchedLinePolicy, parse_listing};
