//! CLI entry point for untree

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{Level, debug};
use untree::{
    ConvertOptions, ListingStats, OutputMode, ParserConfig, TreeSyntax, UnmatchedLinePolicy,
    convert_file, print_stats,
};

#[derive(Parser, Debug)]
#[command(name = "untree")]
#[command(about = "Flatten a box-drawing tree listing into one path,timestamp record per file")]
#[command(version)]
#[command(arg_required_else_help = true)]
struct Args {
    /// Tree listing to read
    input: PathBuf,

    /// File to write the records to (overwritten)
    output: PathBuf,

    /// Record layout: 1 = path,timestamp (default), 2 = path<TAB>timestamp,
    /// 3 = path, 4 = path,size,timestamp, json = JSON array.
    /// Unrecognized values fall back to 1
    mode: Option<String>,

    /// Warn about directory lines that contain a date (likely misread files)
    #[arg(long = "warn-unmatched")]
    warn_unmatched: bool,

    /// Print a summary of the listing after converting
    #[arg(long = "summary")]
    summary: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn log_level(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn setup_tracing(args: &Args) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(args.verbose))
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .without_time()
        .compact()
        .init();
}

fn main() {
    let args = Args::parse();
    setup_tracing(&args);
    debug!("Parsed CLI arguments: {args:?}");

    let options = ConvertOptions {
        parser: ParserConfig {
            syntax: TreeSyntax::default(),
            unmatched: if args.warn_unmatched {
                UnmatchedLinePolicy::WarnDirectory
            } else {
                UnmatchedLinePolicy::Directory
            },
        },
        mode: OutputMode::from_arg(args.mode.as_deref()),
    };

    let listing = match convert_file(&args.input, &args.output, &options) {
        Ok(listing) => listing,
        Err(e) => {
            eprintln!("untree: {}", e);
            process::exit(1);
        }
    };

    if args.summary {
        if let Err(e) = print_stats(&ListingStats::from_listing(&listing)) {
            eprintln!("untree: error writing summary: {}", e);
            process::exit(1);
        }
    }
}
