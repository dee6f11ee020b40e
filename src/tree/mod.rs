//! Tree listing parsing
//!
//! Turns a box-drawing tree listing back into flat file records:
//!
//! - `depth`: normalises connector glyphs and measures indentation
//! - `classify`: decides whether a line is a file or a directory
//! - `stack`: tracks the open ancestor directories
//! - `parser`: drives the three over a listing, line by line

mod classify;
mod config;
mod depth;
mod parser;
mod stack;

pub use classify::{
    FILE_MATCHERS, FileEntry, FileMatcher, LineKind, SizedFileMatcher, UnsizedFileMatcher,
    classify, directory_name, looks_like_file, match_file, parse_grouped_size,
};
pub use config::{
    CONNECTOR_GLYPHS, FOLDER_MARKER, GLYPH_PLACEHOLDER_WIDTH, INDENT_WIDTH, PATH_SEPARATOR,
    ParserConfig, TreeSyntax, UnmatchedLinePolicy,
};
pub use depth::{MeasuredLine, leading_width, measure, normalize_glyphs};
pub use parser::{LineCounts, ParsedListing, TreeParser, parse_listing};
pub use stack::DirectoryStack;
