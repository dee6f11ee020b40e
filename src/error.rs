//! Error types for listing conversion

use std::path::PathBuf;

use thiserror::Error;

/// Errors that stop a conversion run.
#[derive(Debug, Error)]
pub enum UntreeError {
    #[error("error opening input file {}: {source}", .path.display())]
    OpenInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error creating output file {}: {source}", .path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error reading {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, UntreeError>;
